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

//! Header and setting vocabularies of the suite and resource grammars.
//!
//! A grammar is plain data: which section headers it recognizes and which
//! file-level settings it accepts, each mapped to its token type. The lexer
//! consults one of the two tables for the whole input. Block-level settings
//! (`[Tags]`, `[Arguments]`, ...) are the same in both grammars.
//!
//! Names are compared case-insensitively with whitespace ignored, so
//! `Test Setup`, `test setup` and `TestSetup` are the same setting. Headers
//! also accept singular and plural spellings.
//!
//! # Examples
//!
//! ```
//! use suitelex_core::{Grammar, Section, TokenType};
//!
//! assert_eq!(Grammar::SUITE.section("*** Test Cases ***"), Some(Section::TestCases));
//! assert_eq!(Grammar::RESOURCE.section("*** Test Cases ***"), None);
//! assert_eq!(Grammar::SUITE.section("*** keyword ***"), Some(Section::Keywords));
//!
//! let rule = Grammar::SUITE.file_setting("Suite Setup").unwrap();
//! assert_eq!(rule.token_type, TokenType::SuiteSetup);
//! assert!(Grammar::RESOURCE.file_setting("Suite Setup").is_none());
//! ```

use crate::context::Section;
use crate::token::TokenType;

/// A file-level setting accepted by a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingRule {
    /// Normalized name: lower case, no whitespace.
    pub name: &'static str,
    /// Token type of the setting name cell.
    pub token_type: TokenType,
    /// Whether the setting may appear more than once.
    pub repeatable: bool,
}

const fn rule(name: &'static str, token_type: TokenType, repeatable: bool) -> SettingRule {
    SettingRule {
        name,
        token_type,
        repeatable,
    }
}

/// Header and setting vocabulary used to classify cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    name: &'static str,
    sections: &'static [(&'static str, Section)],
    settings: &'static [SettingRule],
}

const SUITE_SECTIONS: &[(&str, Section)] = &[
    ("setting", Section::Settings),
    ("variable", Section::Variables),
    ("testcase", Section::TestCases),
    ("task", Section::TestCases),
    ("keyword", Section::Keywords),
    ("comment", Section::Comments),
];

const RESOURCE_SECTIONS: &[(&str, Section)] = &[
    ("setting", Section::Settings),
    ("variable", Section::Variables),
    ("keyword", Section::Keywords),
    ("comment", Section::Comments),
];

const SUITE_SETTINGS: &[SettingRule] = &[
    rule("documentation", TokenType::Documentation, false),
    rule("metadata", TokenType::Metadata, true),
    rule("suitesetup", TokenType::SuiteSetup, false),
    rule("suiteteardown", TokenType::SuiteTeardown, false),
    rule("testsetup", TokenType::TestSetup, false),
    rule("tasksetup", TokenType::TestSetup, false),
    rule("testteardown", TokenType::TestTeardown, false),
    rule("taskteardown", TokenType::TestTeardown, false),
    rule("testtemplate", TokenType::TestTemplate, false),
    rule("tasktemplate", TokenType::TestTemplate, false),
    rule("testtimeout", TokenType::TestTimeout, false),
    rule("tasktimeout", TokenType::TestTimeout, false),
    rule("forcetags", TokenType::ForceTags, false),
    rule("defaulttags", TokenType::DefaultTags, false),
    rule("library", TokenType::Library, true),
    rule("resource", TokenType::Resource, true),
    rule("variables", TokenType::Variables, true),
];

const RESOURCE_SETTINGS: &[SettingRule] = &[
    rule("documentation", TokenType::Documentation, false),
    rule("library", TokenType::Library, true),
    rule("resource", TokenType::Resource, true),
    rule("variables", TokenType::Variables, true),
];

const TEST_CASE_SETTINGS: &[(&str, TokenType)] = &[
    ("documentation", TokenType::Documentation),
    ("tags", TokenType::Tags),
    ("setup", TokenType::Setup),
    ("teardown", TokenType::Teardown),
    ("template", TokenType::Template),
    ("timeout", TokenType::Timeout),
];

const KEYWORD_SETTINGS: &[(&str, TokenType)] = &[
    ("documentation", TokenType::Documentation),
    ("arguments", TokenType::Arguments),
    ("return", TokenType::Return),
    ("teardown", TokenType::Teardown),
    ("timeout", TokenType::Timeout),
    ("tags", TokenType::Tags),
];

impl Grammar {
    /// Grammar of test suite files: every section and the full settings vocabulary.
    pub const SUITE: Grammar = Grammar {
        name: "suite",
        sections: SUITE_SECTIONS,
        settings: SUITE_SETTINGS,
    };

    /// Grammar of resource files: no test case section, import and
    /// documentation settings only.
    pub const RESOURCE: Grammar = Grammar {
        name: "resource",
        sections: RESOURCE_SECTIONS,
        settings: RESOURCE_SETTINGS,
    };

    /// Short name of the grammar (`suite` or `resource`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Section named by a header cell such as `*** Test Cases ***`.
    pub fn section(&self, header: &str) -> Option<Section> {
        let name = normalize(header.trim_matches(|c: char| c == '*' || c.is_whitespace()));
        let singular = name.strip_suffix('s');
        self.sections
            .iter()
            .find(|(candidate, _)| name == *candidate || singular == Some(*candidate))
            .map(|(_, section)| *section)
    }

    /// File-level setting named by a cell, e.g. `Library` or `Test Setup:`.
    pub fn file_setting(&self, cell: &str) -> Option<&'static SettingRule> {
        let trimmed = cell.trim();
        let name = normalize(trimmed.strip_suffix(':').unwrap_or(trimmed));
        self.settings.iter().find(|rule| rule.name == name)
    }

    /// Block-level setting named by a bracketed cell such as `[Tags]`.
    ///
    /// Returns `None` for unknown names, for settings the section's blocks do
    /// not accept, and for cells that are not bracketed.
    pub fn block_setting(&self, section: Section, cell: &str) -> Option<TokenType> {
        let table = match section {
            Section::TestCases => TEST_CASE_SETTINGS,
            Section::Keywords => KEYWORD_SETTINGS,
            _ => return None,
        };
        let name = normalize(bracketed(cell)?);
        table
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, token_type)| *token_type)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::SUITE
    }
}

/// Inner text of a `[...]` cell.
pub(crate) fn bracketed(cell: &str) -> Option<&str> {
    cell.strip_prefix('[')?.strip_suffix(']')
}

/// Lower-cases a name and drops all whitespace.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
