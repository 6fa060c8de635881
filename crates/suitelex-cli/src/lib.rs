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

//! Suitelex CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **tokens**: Print the token stream of a file as text or JSON
//! - **check**: Report cells the lexer could not place (ERROR tokens)
//! - **roundtrip**: Verify that the token values reproduce the file
//!
//! Every command takes a file path, or `-` to read standard input, and
//! `--resource` to lex with the resource file grammar.
//!
//! # Examples
//!
//! ```no_run
//! use suitelex_cli::commands::{check, tokens};
//!
//! # fn main() -> Result<(), suitelex_cli::error::CliError> {
//! tokens("tests/login.robot", false, true, "text", "strict")?;
//! check("resources/common.resource", true, "strict")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The default level is `warn`;
//! set `RUST_LOG` (for example `RUST_LOG=suitelex_core=trace`) or pass
//! `--verbose` for more.

pub mod cli;
pub mod commands;
pub mod error;
