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

//! Token stream building and the public entry points.
//!
//! [`TokenStream`] pulls one physical line at a time from its source, splits
//! and classifies it, and groups the resulting tokens into statements. A
//! statement normally ends with its row; it stays open only when the next line
//! is a `...` continuation of it, which is the one line of lookahead the stream
//! ever does. Completed statements are queued and handed out token by token.
//!
//! In full mode every character of the source ends up in exactly one token. In
//! data-only mode separators, line ends, comments and continuation markers are
//! dropped, statements left empty disappear, and each EOS directly follows the
//! last remaining token.
//!
//! # Examples
//!
//! ```
//! use suitelex_core::{get_tokens, TokenType};
//!
//! let source = "*** Test Cases ***\nExample\n    Log    Hello\n";
//! let types: Vec<TokenType> = get_tokens(source, true)?
//!     .map(|token| token.map(|t| t.token_type))
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(
//!     types,
//!     vec![
//!         TokenType::TestCaseHeader, TokenType::Eos,
//!         TokenType::Name, TokenType::Eos,
//!         TokenType::Keyword, TokenType::Argument, TokenType::Eos,
//!     ]
//! );
//! # Ok::<(), suitelex_core::SourceError>(())
//! ```

use crate::classify::classify_row;
use crate::config::LexConfig;
use crate::context::SectionContext;
use crate::error::SourceResult;
use crate::grammar::Grammar;
use crate::reader::LineReader;
use crate::row::Row;
use crate::source::Source;
use crate::token::{Token, TokenType};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::debug;

/// Lexer configuration: grammar, output mode and source handling.
///
/// # Examples
///
/// ```
/// use suitelex_core::{Decoding, LexConfig, Lexer};
///
/// let lexer = Lexer::resource()
///     .data_only(true)
///     .with_config(LexConfig::new().with_decoding(Decoding::Lossy));
///
/// let tokens = lexer.tokens("*** Keywords ***\nNOOP    No Operation\n")?;
/// assert_eq!(tokens.count(), 6);
/// # Ok::<(), suitelex_core::SourceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    grammar: Grammar,
    data_only: bool,
    config: LexConfig,
}

impl Lexer {
    /// Creates a full-mode lexer for `grammar` with the default configuration.
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            data_only: false,
            config: LexConfig::default(),
        }
    }

    /// Lexer using the suite grammar.
    pub fn suite() -> Self {
        Self::new(Grammar::SUITE)
    }

    /// Lexer using the resource grammar.
    pub fn resource() -> Self {
        Self::new(Grammar::RESOURCE)
    }

    /// Selects data-only output.
    pub fn data_only(mut self, data_only: bool) -> Self {
        self.data_only = data_only;
        self
    }

    /// Replaces the source configuration.
    pub fn with_config(mut self, config: LexConfig) -> Self {
        self.config = config;
        self
    }

    /// The grammar this lexer uses.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Opens `source` and returns a lazy token stream over it.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`](crate::SourceError) if the source cannot be
    /// opened. Read and decode failures on later lines are yielded by the
    /// stream itself.
    pub fn tokens<'a>(&self, source: impl Into<Source<'a>>) -> SourceResult<TokenStream<'a>> {
        let lines = source.into().open(&self.config)?;
        debug!(
            grammar = self.grammar.name(),
            data_only = self.data_only,
            "lexing started"
        );
        Ok(TokenStream::new(lines, self.grammar, self.data_only))
    }
}

/// Lexes a test suite file.
///
/// `source` may be a path, an open reader, a byte buffer or text; see
/// [`Source`] for how plain strings are interpreted.
///
/// # Errors
///
/// Returns [`SourceError`](crate::SourceError) if the source cannot be opened.
pub fn get_tokens<'a>(
    source: impl Into<Source<'a>>,
    data_only: bool,
) -> SourceResult<TokenStream<'a>> {
    Lexer::suite().data_only(data_only).tokens(source)
}

/// Lexes a resource file. Same as [`get_tokens`] with the resource grammar.
///
/// # Errors
///
/// Returns [`SourceError`](crate::SourceError) if the source cannot be opened.
pub fn get_resource_tokens<'a>(
    source: impl Into<Source<'a>>,
    data_only: bool,
) -> SourceResult<TokenStream<'a>> {
    Lexer::resource().data_only(data_only).tokens(source)
}

/// Lazy, forward-only sequence of tokens.
///
/// Yields `Err` at most once, when reading or decoding a line fails, and
/// nothing after that. Dropping the stream releases the underlying source.
pub struct TokenStream<'a> {
    lines: LineReader<'a>,
    grammar: Grammar,
    data_only: bool,
    context: SectionContext,
    statement: Vec<Token>,
    pending: VecDeque<Token>,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    fn new(lines: LineReader<'a>, grammar: Grammar, data_only: bool) -> Self {
        Self {
            lines,
            grammar,
            data_only,
            context: SectionContext::new(),
            statement: Vec::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Section and block state after the rows consumed so far.
    pub fn context(&self) -> &SectionContext {
        &self.context
    }

    /// Lexes the next physical line.
    fn advance(&mut self) -> SourceResult<()> {
        let Some((lineno, line)) = self.lines.next_line()? else {
            self.finished = true;
            self.finish_statement();
            return Ok(());
        };

        let row = Row::split(&line, lineno);
        let types = classify_row(&self.grammar, &mut self.context, &row);
        self.push_row(&row, types);

        if !self.continues_on_next_line()? {
            self.finish_statement();
        }
        Ok(())
    }

    fn continues_on_next_line(&mut self) -> SourceResult<bool> {
        if !self.context.joins_next() {
            return Ok(false);
        }
        Ok(match self.lines.peek_line()? {
            Some((lineno, line)) => Row::split(line, *lineno).is_continuation(),
            None => false,
        })
    }

    /// Appends the full-mode tokens of `row` to the open statement.
    fn push_row(&mut self, row: &Row<'_>, types: Vec<TokenType>) {
        let mut types = types.into_iter();
        let mut indentation = true;

        for piece in &row.pieces {
            let token_type = if piece.is_separator() {
                TokenType::Separator
            } else if indentation && piece.text.is_empty() {
                continue;
            } else {
                indentation = false;
                types.next().unwrap_or(TokenType::Error)
            };
            self.statement
                .push(Token::new(token_type, piece.text, row.lineno, piece.column));
        }

        self.statement
            .push(Token::new(TokenType::Eol, row.eol, row.lineno, row.eol_column));
    }

    /// Moves the open statement to the output queue, inserting EOS tokens.
    ///
    /// A block name followed by more data on its row forms a statement of its
    /// own: EOS goes right after the name and the separator after the name
    /// follows that EOS.
    fn finish_statement(&mut self) {
        let mut name_seen = false;
        let mut data_seen = false;
        let mut held_separator = None;
        let mut eos = None;

        for token in self.statement.drain(..) {
            let token_type = token.token_type;
            if self.data_only && !token_type.is_data() {
                continue;
            }

            if name_seen {
                if token_type == TokenType::Separator {
                    held_separator = Some(token);
                    continue;
                }
                if token_type.is_data() {
                    self.pending.extend(eos.take());
                }
                self.pending.extend(held_separator.take());
                name_seen = false;
            }

            if token_type.is_data() {
                name_seen = token_type == TokenType::Name && !data_seen;
                data_seen = true;
            }
            eos = Some(Token::eos_after(&token));
            self.pending.push_back(token);
        }

        self.pending.extend(held_separator);
        self.pending.extend(eos);
    }
}

impl Iterator for TokenStream<'_> {
    type Item = SourceResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }
            if let Err(err) = self.advance() {
                debug!(error = %err, "lexing aborted");
                self.finished = true;
                self.statement.clear();
                return Some(Err(err));
            }
        }
    }
}

impl FusedIterator for TokenStream<'_> {}

impl std::fmt::Debug for TokenStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStream")
            .field("grammar", &self.grammar.name())
            .field("data_only", &self.data_only)
            .field("line", &self.lines.line_number())
            .field("context", &self.context)
            .field("pending", &self.pending.len())
            .finish()
    }
}
