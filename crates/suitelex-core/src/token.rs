// Suitelex - Tabular Test Data Lexer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Token and token type definitions.
//!
//! Every token carries the exact source substring it was produced from together
//! with a 1-based line and column. Concatenating the values of a full-mode token
//! stream reproduces the source text.
//!
//! # Examples
//!
//! ```
//! use suitelex_core::{Token, TokenType};
//!
//! let token = Token::new(TokenType::Keyword, "Log", 3, 5);
//! assert_eq!(token.end_column(), 8);
//! assert_eq!(token.token_type.to_string(), "KEYWORD");
//! ```

use std::fmt;

/// Closed set of token types produced by the lexer.
///
/// The `Display` form is the upper-case name used in diagnostics and in the
/// serialized representation (`TESTCASE_HEADER`, `EOS`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenType {
    // ==================== Section headers ====================
    SettingHeader,
    VariableHeader,
    #[cfg_attr(feature = "serde", serde(rename = "TESTCASE_HEADER"))]
    TestCaseHeader,
    KeywordHeader,
    CommentHeader,

    // ==================== File settings ====================
    Documentation,
    Metadata,
    SuiteSetup,
    SuiteTeardown,
    TestSetup,
    TestTeardown,
    TestTemplate,
    TestTimeout,
    ForceTags,
    DefaultTags,
    Library,
    Resource,
    Variables,

    // ==================== Block settings ====================
    Setup,
    Teardown,
    Template,
    Timeout,
    Tags,
    Arguments,
    Return,

    // ==================== Data ====================
    Name,
    Variable,
    Argument,
    Assign,
    Keyword,
    WithName,
    For,
    ForSeparator,
    End,

    // ==================== Structure ====================
    Separator,
    Comment,
    Continuation,
    Eol,
    Eos,

    Error,
}

impl TokenType {
    /// Upper-case name of this token type.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenType::SettingHeader => "SETTING_HEADER",
            TokenType::VariableHeader => "VARIABLE_HEADER",
            TokenType::TestCaseHeader => "TESTCASE_HEADER",
            TokenType::KeywordHeader => "KEYWORD_HEADER",
            TokenType::CommentHeader => "COMMENT_HEADER",
            TokenType::Documentation => "DOCUMENTATION",
            TokenType::Metadata => "METADATA",
            TokenType::SuiteSetup => "SUITE_SETUP",
            TokenType::SuiteTeardown => "SUITE_TEARDOWN",
            TokenType::TestSetup => "TEST_SETUP",
            TokenType::TestTeardown => "TEST_TEARDOWN",
            TokenType::TestTemplate => "TEST_TEMPLATE",
            TokenType::TestTimeout => "TEST_TIMEOUT",
            TokenType::ForceTags => "FORCE_TAGS",
            TokenType::DefaultTags => "DEFAULT_TAGS",
            TokenType::Library => "LIBRARY",
            TokenType::Resource => "RESOURCE",
            TokenType::Variables => "VARIABLES",
            TokenType::Setup => "SETUP",
            TokenType::Teardown => "TEARDOWN",
            TokenType::Template => "TEMPLATE",
            TokenType::Timeout => "TIMEOUT",
            TokenType::Tags => "TAGS",
            TokenType::Arguments => "ARGUMENTS",
            TokenType::Return => "RETURN",
            TokenType::Name => "NAME",
            TokenType::Variable => "VARIABLE",
            TokenType::Argument => "ARGUMENT",
            TokenType::Assign => "ASSIGN",
            TokenType::Keyword => "KEYWORD",
            TokenType::WithName => "WITH_NAME",
            TokenType::For => "FOR",
            TokenType::ForSeparator => "FOR_SEPARATOR",
            TokenType::End => "END",
            TokenType::Separator => "SEPARATOR",
            TokenType::Comment => "COMMENT",
            TokenType::Continuation => "CONTINUATION",
            TokenType::Eol => "EOL",
            TokenType::Eos => "EOS",
            TokenType::Error => "ERROR",
        }
    }

    /// Returns `true` for section header types.
    pub const fn is_header(self) -> bool {
        matches!(
            self,
            TokenType::SettingHeader
                | TokenType::VariableHeader
                | TokenType::TestCaseHeader
                | TokenType::KeywordHeader
                | TokenType::CommentHeader
        )
    }

    /// Returns `true` for file-level and block-level setting names.
    pub const fn is_setting(self) -> bool {
        matches!(
            self,
            TokenType::Documentation
                | TokenType::Metadata
                | TokenType::SuiteSetup
                | TokenType::SuiteTeardown
                | TokenType::TestSetup
                | TokenType::TestTeardown
                | TokenType::TestTemplate
                | TokenType::TestTimeout
                | TokenType::ForceTags
                | TokenType::DefaultTags
                | TokenType::Library
                | TokenType::Resource
                | TokenType::Variables
                | TokenType::Setup
                | TokenType::Teardown
                | TokenType::Template
                | TokenType::Timeout
                | TokenType::Tags
                | TokenType::Arguments
                | TokenType::Return
        )
    }

    /// Returns `true` for tokens kept in data-only mode.
    ///
    /// Separators, line ends, comments and continuation markers only carry
    /// formatting. EOS is synthesized separately and is not a data type either.
    pub const fn is_data(self) -> bool {
        !matches!(
            self,
            TokenType::Separator
                | TokenType::Comment
                | TokenType::Continuation
                | TokenType::Eol
                | TokenType::Eos
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single lexed token.
///
/// `value` is the exact source text of the token (empty for EOS, for an
/// empty EOL at the end of the input, and for empty placeholder cells).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Semantic type of the token.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub token_type: TokenType,
    /// Source text of the token.
    pub value: String,
    /// 1-based line number.
    pub lineno: usize,
    /// 1-based column, counted in Unicode scalar values.
    pub columnno: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        token_type: TokenType,
        value: impl Into<String>,
        lineno: usize,
        columnno: usize,
    ) -> Self {
        Self {
            token_type,
            value: value.into(),
            lineno,
            columnno,
        }
    }

    /// Creates the zero-width end-of-statement token that directly follows `token`.
    pub fn eos_after(token: &Token) -> Self {
        Self::new(TokenType::Eos, "", token.lineno, token.end_column())
    }

    /// Column right after the last character of this token.
    #[inline]
    pub fn end_column(&self) -> usize {
        self.columnno + self.value.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} {:?}",
            self.token_type, self.lineno, self.columnno, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(TokenType::TestCaseHeader.to_string(), "TESTCASE_HEADER");
        assert_eq!(TokenType::WithName.to_string(), "WITH_NAME");
        assert_eq!(TokenType::Eos.to_string(), "EOS");
    }

    #[test]
    fn test_data_types() {
        assert!(TokenType::Keyword.is_data());
        assert!(TokenType::Error.is_data());
        assert!(TokenType::SettingHeader.is_data());
        assert!(!TokenType::Separator.is_data());
        assert!(!TokenType::Comment.is_data());
        assert!(!TokenType::Continuation.is_data());
        assert!(!TokenType::Eol.is_data());
        assert!(!TokenType::Eos.is_data());
    }

    #[test]
    fn test_setting_and_header_types() {
        assert!(TokenType::Library.is_setting());
        assert!(TokenType::Arguments.is_setting());
        assert!(!TokenType::Keyword.is_setting());
        assert!(TokenType::CommentHeader.is_header());
        assert!(!TokenType::Library.is_header());
    }

    #[test]
    fn test_end_column_counts_chars() {
        let token = Token::new(TokenType::Argument, "päivää", 1, 10);
        assert_eq!(token.end_column(), 16);
    }

    #[test]
    fn test_eos_after() {
        let eol = Token::new(TokenType::Eol, "\n", 4, 19);
        assert_eq!(Token::eos_after(&eol), Token::new(TokenType::Eos, "", 4, 20));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenType::Keyword, "Log", 2, 5);
        assert_eq!(token.to_string(), "KEYWORD 2:5 \"Log\"");
    }
}
