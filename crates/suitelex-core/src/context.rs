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

//! Section and block state threaded from row to row.
//!
//! [`SectionContext`] is owned by a single token stream. Every row reads it to
//! decide how its cells are classified and updates it afterwards: headers switch
//! the section, names open blocks, settings are recorded so repeats can be
//! flagged, and the continuation state tells the next row whether a `...`
//! marker extends the current statement.

use crate::token::TokenType;

/// The active table kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    /// Before the first header.
    #[default]
    None,
    Settings,
    Variables,
    TestCases,
    Keywords,
    /// Comment sections and sections with unrecognized headers.
    Comments,
}

impl Section {
    /// Header token type of this section.
    pub const fn header_type(self) -> Option<TokenType> {
        match self {
            Section::None => None,
            Section::Settings => Some(TokenType::SettingHeader),
            Section::Variables => Some(TokenType::VariableHeader),
            Section::TestCases => Some(TokenType::TestCaseHeader),
            Section::Keywords => Some(TokenType::KeywordHeader),
            Section::Comments => Some(TokenType::CommentHeader),
        }
    }

    /// Returns `true` for sections made of named blocks.
    pub const fn has_blocks(self) -> bool {
        matches!(self, Section::TestCases | Section::Keywords)
    }

    /// Returns `true` for sections whose content is never data.
    pub const fn is_comment(self) -> bool {
        matches!(self, Section::None | Section::Comments)
    }
}

/// How the remaining cells of a statement are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementState {
    /// Expecting assignments, then a keyword or loop header.
    KeywordCall,
    /// Every cell is an argument.
    Arguments,
    /// Library import arguments, watching for `WITH NAME`.
    LibraryArguments,
    /// The cell after `WITH NAME`.
    LibraryAlias,
    /// Loop variables up to the loop separator.
    ForVariables,
    /// Every cell is an error.
    Errors,
}

/// What a following `...` row means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Continuation {
    /// Nothing to continue; a `...` row is an error.
    #[default]
    None,
    /// The current statement stays open and continues in the given state.
    Join(StatementState),
    /// A block name stood alone on its row; a `...` row starts a body statement.
    Body,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct BlockState {
    settings: Vec<TokenType>,
    template: Option<bool>,
}

/// Row-to-row lexing state of one token stream.
#[derive(Debug, Clone, Default)]
pub struct SectionContext {
    section: Section,
    block: Option<BlockState>,
    continuation: Continuation,
    file_settings: Vec<TokenType>,
    suite_template: bool,
}

impl SectionContext {
    /// Creates the state for the start of a file.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns `true` while a test case or keyword block is open.
    pub fn block_open(&self) -> bool {
        self.block.is_some()
    }

    /// Continuation state left by the last row.
    pub fn continuation(&self) -> Continuation {
        self.continuation
    }

    /// Returns `true` if a following `...` row joins the current statement.
    pub fn joins_next(&self) -> bool {
        matches!(self.continuation, Continuation::Join(_))
    }

    /// Returns `true` if body rows of the current test case use a template.
    pub fn template_active(&self) -> bool {
        self.section == Section::TestCases
            && self
                .block
                .as_ref()
                .and_then(|block| block.template)
                .unwrap_or(self.suite_template)
    }

    pub(crate) fn enter_section(&mut self, section: Section) {
        self.section = section;
        self.block = None;
        self.continuation = Continuation::None;
    }

    pub(crate) fn open_block(&mut self) {
        self.block = Some(BlockState::default());
    }

    pub(crate) fn set_continuation(&mut self, continuation: Continuation) {
        self.continuation = continuation;
    }

    /// Records a file-level setting; returns `false` if it was already seen.
    pub(crate) fn record_file_setting(&mut self, setting: TokenType) -> bool {
        record(&mut self.file_settings, setting)
    }

    /// Records a block-level setting; returns `false` if it was already seen
    /// in the open block.
    pub(crate) fn record_block_setting(&mut self, setting: TokenType) -> bool {
        match &mut self.block {
            Some(block) => record(&mut block.settings, setting),
            None => false,
        }
    }

    pub(crate) fn set_suite_template(&mut self, active: bool) {
        self.suite_template = active;
    }

    pub(crate) fn set_block_template(&mut self, active: bool) {
        if let Some(block) = &mut self.block {
            block.template = Some(active);
        }
    }
}

fn record(seen: &mut Vec<TokenType>, setting: TokenType) -> bool {
    if seen.contains(&setting) {
        false
    } else {
        seen.push(setting);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let ctx = SectionContext::new();
        assert_eq!(ctx.section(), Section::None);
        assert!(!ctx.block_open());
        assert!(!ctx.joins_next());
        assert!(!ctx.template_active());
    }

    #[test]
    fn test_enter_section_closes_block() {
        let mut ctx = SectionContext::new();
        ctx.enter_section(Section::TestCases);
        ctx.open_block();
        ctx.set_continuation(Continuation::Join(StatementState::Arguments));
        assert!(ctx.block_open());
        assert!(ctx.joins_next());

        ctx.enter_section(Section::Keywords);
        assert!(!ctx.block_open());
        assert_eq!(ctx.continuation(), Continuation::None);
    }

    #[test]
    fn test_repeated_settings() {
        let mut ctx = SectionContext::new();
        assert!(ctx.record_file_setting(TokenType::Documentation));
        assert!(!ctx.record_file_setting(TokenType::Documentation));

        assert!(!ctx.record_block_setting(TokenType::Tags));
        ctx.enter_section(Section::TestCases);
        ctx.open_block();
        assert!(ctx.record_block_setting(TokenType::Tags));
        assert!(!ctx.record_block_setting(TokenType::Tags));
        ctx.open_block();
        assert!(ctx.record_block_setting(TokenType::Tags));
    }

    #[test]
    fn test_template_resolution() {
        let mut ctx = SectionContext::new();
        ctx.set_suite_template(true);
        ctx.enter_section(Section::TestCases);
        ctx.open_block();
        assert!(ctx.template_active());

        ctx.set_block_template(false);
        assert!(!ctx.template_active());

        ctx.open_block();
        assert!(ctx.template_active());

        ctx.enter_section(Section::Keywords);
        ctx.open_block();
        assert!(!ctx.template_active());
    }

    #[test]
    fn test_section_header_types() {
        assert_eq!(Section::None.header_type(), None);
        assert_eq!(
            Section::TestCases.header_type(),
            Some(TokenType::TestCaseHeader)
        );
        assert!(Section::Keywords.has_blocks());
        assert!(!Section::Settings.has_blocks());
        assert!(Section::Comments.is_comment());
    }
}
