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

//! Context-sensitive cell classification.
//!
//! [`classify_row`] assigns a token type to every data cell of a row. The same
//! text means different things in different places: `Library` is a setting in
//! the Settings section and a keyword name inside a test case. The decision
//! depends on the active [`Grammar`] and on the [`SectionContext`] left by the
//! previous rows, which is updated in turn.
//!
//! Classification never fails. Cells that cannot be placed become
//! [`TokenType::Error`] and the next cell is classified normally.

use crate::context::{Continuation, Section, SectionContext, StatementState};
use crate::grammar::{bracketed, Grammar};
use crate::row::{Row, CONTINUATION_MARKER};
use crate::token::TokenType;
use tracing::{debug, trace};

const LOOP_SEPARATORS: &[&str] = &["IN", "IN RANGE", "IN ENUMERATE", "IN ZIP"];

/// Classify the emitted data cells of `row`.
///
/// Leading empty cells only indent the row and are not emitted, so the result
/// has one entry per data cell after them.
pub fn classify_row(grammar: &Grammar, ctx: &mut SectionContext, row: &Row<'_>) -> Vec<TokenType> {
    let indented = row.cells().next().is_some_and(|cell| cell.text.is_empty());
    let cells: Vec<&str> = row
        .cells()
        .map(|cell| cell.text)
        .skip_while(|text| text.is_empty())
        .collect();

    if cells.is_empty() {
        ctx.set_continuation(Continuation::None);
        return Vec::new();
    }

    let data_len = cells
        .iter()
        .position(|cell| cell.starts_with('#'))
        .unwrap_or(cells.len());
    let (data, comments) = cells.split_at(data_len);

    let mut types = if !indented && data.first().is_some_and(|cell| cell.starts_with('*')) {
        classify_header(grammar, ctx, data, row.lineno)
    } else if data.is_empty() || ctx.section().is_comment() {
        ctx.set_continuation(Continuation::None);
        vec![TokenType::Comment; data.len()]
    } else if data[0] == CONTINUATION_MARKER {
        classify_continuation(grammar, ctx, &data[1..], row.lineno)
    } else {
        classify_statement(grammar, ctx, data, indented)
    };

    types.extend(std::iter::repeat(TokenType::Comment).take(comments.len()));
    trace!(line = row.lineno, cells = types.len(), "classified row");
    types
}

fn classify_header(
    grammar: &Grammar,
    ctx: &mut SectionContext,
    cells: &[&str],
    lineno: usize,
) -> Vec<TokenType> {
    match grammar.section(cells[0]) {
        Some(section) => {
            debug!(line = lineno, ?section, "entering section");
            ctx.enter_section(section);
            let header = section.header_type().unwrap_or(TokenType::Error);
            vec![header; cells.len()]
        }
        None => {
            debug!(
                line = lineno,
                header = cells[0],
                grammar = grammar.name(),
                "unrecognized section header"
            );
            ctx.enter_section(Section::Comments);
            let mut types = vec![TokenType::Comment; cells.len()];
            types[0] = TokenType::Error;
            types
        }
    }
}

fn classify_continuation(
    grammar: &Grammar,
    ctx: &mut SectionContext,
    rest: &[&str],
    lineno: usize,
) -> Vec<TokenType> {
    let mut types = vec![TokenType::Continuation];
    match ctx.continuation() {
        Continuation::Join(state) => {
            let (tail, state) = classify_tail(state, rest);
            ctx.set_continuation(Continuation::Join(state));
            types.extend(tail);
        }
        Continuation::Body => {
            if rest.is_empty() {
                // a bare marker keeps waiting for the body statement
                return types;
            }
            types.extend(classify_body(grammar, ctx, rest));
        }
        Continuation::None => {
            debug!(line = lineno, "nothing to continue");
            types.extend(std::iter::repeat(TokenType::Error).take(rest.len()));
        }
    }
    types
}

fn classify_statement(
    grammar: &Grammar,
    ctx: &mut SectionContext,
    cells: &[&str],
    indented: bool,
) -> Vec<TokenType> {
    match ctx.section() {
        Section::Settings => classify_setting(grammar, ctx, cells),
        Section::Variables => {
            let first = if is_variable(cells[0]) {
                TokenType::Variable
            } else {
                TokenType::Error
            };
            let (tail, state) = classify_tail(StatementState::Arguments, &cells[1..]);
            ctx.set_continuation(Continuation::Join(state));
            std::iter::once(first).chain(tail).collect()
        }
        Section::TestCases | Section::Keywords if !indented => {
            ctx.open_block();
            let mut types = vec![TokenType::Name];
            if cells.len() == 1 {
                ctx.set_continuation(Continuation::Body);
            } else {
                types.extend(classify_body(grammar, ctx, &cells[1..]));
            }
            types
        }
        Section::TestCases | Section::Keywords if ctx.block_open() => {
            classify_body(grammar, ctx, cells)
        }
        _ => {
            debug!(section = ?ctx.section(), "statement outside of a block");
            ctx.set_continuation(Continuation::Join(StatementState::Errors));
            vec![TokenType::Error; cells.len()]
        }
    }
}

fn classify_setting(grammar: &Grammar, ctx: &mut SectionContext, cells: &[&str]) -> Vec<TokenType> {
    let (first, state) = match grammar.file_setting(cells[0]) {
        Some(rule) => {
            let first_use = ctx.record_file_setting(rule.token_type);
            if rule.token_type == TokenType::TestTemplate && first_use {
                ctx.set_suite_template(template_enabled(cells.get(1).copied()));
            }
            let state = if rule.token_type == TokenType::Library {
                StatementState::LibraryArguments
            } else {
                StatementState::Arguments
            };
            if rule.repeatable || first_use {
                (rule.token_type, state)
            } else {
                debug!(setting = cells[0], "setting repeated");
                (TokenType::Error, state)
            }
        }
        None => {
            debug!(setting = cells[0], grammar = grammar.name(), "unknown setting");
            (TokenType::Error, StatementState::Arguments)
        }
    };

    let (tail, state) = classify_tail(state, &cells[1..]);
    ctx.set_continuation(Continuation::Join(state));
    std::iter::once(first).chain(tail).collect()
}

/// Classify one statement of a test case or keyword body.
fn classify_body(grammar: &Grammar, ctx: &mut SectionContext, cells: &[&str]) -> Vec<TokenType> {
    let section = ctx.section();

    let (types, state) = if bracketed(cells[0]).is_some() {
        let first = match grammar.block_setting(section, cells[0]) {
            Some(setting) if ctx.record_block_setting(setting) => {
                if setting == TokenType::Template {
                    ctx.set_block_template(template_enabled(cells.get(1).copied()));
                }
                setting
            }
            Some(_) => {
                debug!(setting = cells[0], "block setting repeated");
                TokenType::Error
            }
            None => {
                debug!(setting = cells[0], ?section, "unknown block setting");
                TokenType::Error
            }
        };
        let (tail, state) = classify_tail(StatementState::Arguments, &cells[1..]);
        (std::iter::once(first).chain(tail).collect(), state)
    } else if ctx.template_active() {
        classify_tail(StatementState::Arguments, cells)
    } else {
        classify_tail(StatementState::KeywordCall, cells)
    };

    ctx.set_continuation(Continuation::Join(state));
    types
}

/// Classify statement cells starting from `state`, returning the state the
/// statement ends in so a continuation row can pick up from there.
pub(crate) fn classify_tail(
    mut state: StatementState,
    cells: &[&str],
) -> (Vec<TokenType>, StatementState) {
    let mut types = Vec::with_capacity(cells.len());

    for cell in cells {
        let token_type = match state {
            StatementState::Arguments => TokenType::Argument,
            StatementState::Errors => TokenType::Error,
            StatementState::LibraryArguments => {
                if *cell == "WITH NAME" {
                    state = StatementState::LibraryAlias;
                    TokenType::WithName
                } else {
                    TokenType::Argument
                }
            }
            StatementState::LibraryAlias => {
                state = StatementState::Arguments;
                TokenType::Name
            }
            StatementState::KeywordCall => {
                if is_variable(cell) {
                    TokenType::Assign
                } else if is_for(cell) {
                    state = StatementState::ForVariables;
                    TokenType::For
                } else if *cell == "END" {
                    state = StatementState::Arguments;
                    TokenType::End
                } else {
                    state = StatementState::Arguments;
                    TokenType::Keyword
                }
            }
            StatementState::ForVariables => {
                if LOOP_SEPARATORS.contains(cell) {
                    state = StatementState::Arguments;
                    TokenType::ForSeparator
                } else {
                    TokenType::Variable
                }
            }
        };
        types.push(token_type);
    }

    (types, state)
}

/// `[Template]` and `Test Template` values other than empty and `NONE` enable
/// templates.
fn template_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty() && !value.eq_ignore_ascii_case("NONE"))
}

fn is_for(cell: &str) -> bool {
    cell == "FOR" || cell.eq_ignore_ascii_case(":FOR")
}

/// Returns `true` for variable names such as `${NAME}`, `@{LIST}` or `&{DICT}`,
/// optionally followed by `=` (with an optional space before it).
pub fn is_variable(cell: &str) -> bool {
    let name = match cell.strip_suffix('=') {
        Some(rest) => rest.strip_suffix(' ').unwrap_or(rest),
        None => cell,
    };
    is_variable_name(name)
}

fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    if !matches!(chars.next(), Some('$' | '@' | '&')) || chars.next() != Some('{') {
        return false;
    }

    let body = chars.as_str();
    let mut depth = 1usize;
    for (index, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return index + 1 == body.len() && index > 0;
                }
            }
            _ => {}
        }
    }
    false
}
