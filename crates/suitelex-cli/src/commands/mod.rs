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

//! CLI command implementations

mod check;
mod roundtrip;
mod tokens;

pub use check::check;
pub use roundtrip::roundtrip;
pub use tokens::{render_token, tokens};

use crate::error::CliError;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use suitelex_core::{Decoding, LexConfig, Lexer, Source, Token};
use tracing::debug;

/// Command-line name for standard input.
pub const STDIN: &str = "-";

/// Parse an `--encoding` value.
///
/// # Examples
///
/// ```
/// use suitelex_cli::commands::parse_decoding;
/// use suitelex_core::Decoding;
///
/// assert_eq!(parse_decoding("latin1").unwrap(), Decoding::Latin1);
/// assert!(parse_decoding("utf-16").is_err());
/// ```
pub fn parse_decoding(encoding: &str) -> Result<Decoding, CliError> {
    match encoding.to_ascii_lowercase().as_str() {
        "strict" | "utf-8" | "utf8" => Ok(Decoding::Strict),
        "lossy" => Ok(Decoding::Lossy),
        "latin1" | "latin-1" | "iso-8859-1" => Ok(Decoding::Latin1),
        other => Err(CliError::invalid_input(format!(
            "unknown encoding '{}' (expected strict, lossy or latin1)",
            other
        ))),
    }
}

fn lexer(resource: bool, decoding: Decoding) -> Lexer {
    let lexer = if resource {
        Lexer::resource()
    } else {
        Lexer::suite()
    };
    lexer.with_config(LexConfig::new().with_decoding(decoding))
}

/// Lex `file` (or stdin) and collect every token.
fn lex_file(file: &str, lexer: &Lexer) -> Result<Vec<Token>, CliError> {
    let source = if file == STDIN {
        Source::reader(io::stdin())
    } else {
        Source::from(Path::new(file))
    };
    debug!(file, grammar = lexer.grammar().name(), "lexing");

    lexer
        .tokens(source)
        .map_err(|e| CliError::source(file, &e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::source(file, &e))
}

/// Read the raw bytes of `file` (or stdin).
fn read_input(file: &str) -> Result<Vec<u8>, CliError> {
    if file == STDIN {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .map_err(|e| CliError::io_error("<stdin>", e))?;
        Ok(buffer)
    } else {
        fs::read(file).map_err(|e| CliError::io_error(file, e))
    }
}
