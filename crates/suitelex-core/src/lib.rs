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

//! Suitelex Core
//!
//! A lexer for tabular test data: settings, variables, test cases and keywords
//! written as rows of cells separated either by runs of spaces or by pipes.
//! The lexer turns such text into a stream of typed tokens with exact line
//! and column positions.
//!
//! # Features
//!
//! - **Lossless**: in full mode the token values concatenate back to the source
//! - **Data-only mode**: separators, line ends and comments removed for
//!   statement-level consumers
//! - **Two dialects**: space and pipe separated rows, detected per row
//! - **Two grammars**: test suite files and resource files
//! - **Lazy**: one line is read at a time, with at most one line of lookahead
//! - **Resilient**: unrecognized content becomes `ERROR` tokens; only failing
//!   to read the source is an error
//!
//! # Quick Start
//!
//! ```
//! use suitelex_core::{get_tokens, TokenType};
//!
//! let source = "\
//! *** Settings ***
//! Library         Easter
//!
//! *** Test Cases ***
//! Example
//!     None shall pass    ${NONE}
//! ";
//!
//! let tokens = get_tokens(source, false)?.collect::<Result<Vec<_>, _>>()?;
//! let text: String = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(text, source);
//!
//! let keyword = tokens.iter().find(|t| t.token_type == TokenType::Keyword).unwrap();
//! assert_eq!((keyword.value.as_str(), keyword.lineno, keyword.columnno), ("None shall pass", 6, 5));
//! # Ok::<(), suitelex_core::SourceError>(())
//! ```
//!
//! # Sources
//!
//! Both entry points accept anything convertible into a [`Source`]: a path,
//! an open reader, a byte buffer or a string. Strings naming an existing file
//! are read from that file; other strings are lexed as text.
//!
//! ```no_run
//! use std::fs::File;
//! use suitelex_core::{get_resource_tokens, Source};
//!
//! let from_path = get_resource_tokens("resources/common.resource", true)?;
//! let from_file = get_resource_tokens(Source::reader(File::open("resources/common.resource")?), true)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Configuration
//!
//! [`Lexer`] exposes the grammar, the output mode and the [`LexConfig`] used to
//! read sources, including how undecodable bytes are handled.

mod classify;
mod config;
mod context;
mod error;
mod grammar;
mod lexer;
mod reader;
pub mod row;
mod source;
mod token;

pub use classify::{classify_row, is_variable};
pub use config::{Decoding, LexConfig};
pub use context::{Continuation, Section, SectionContext, StatementState};
pub use error::{SourceError, SourceResult};
pub use grammar::{Grammar, SettingRule};
pub use lexer::{get_resource_tokens, get_tokens, Lexer, TokenStream};
pub use reader::LineReader;
pub use source::Source;
pub use token::{Token, TokenType};
