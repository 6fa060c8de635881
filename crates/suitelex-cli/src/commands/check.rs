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

//! Check command - report cells the lexer could not place

use super::{lex_file, lexer, parse_decoding, STDIN};
use crate::error::CliError;
use std::io::{self, BufWriter, Write};
use suitelex_core::{Token, TokenType};

/// Report every ERROR token of a file.
///
/// Prints one `FILE:LINE:COLUMN: error: MESSAGE` line per ERROR token.
///
/// # Errors
///
/// Returns [`CliError::ErrorTokens`] if any ERROR token was found, or another
/// error if the file cannot be read or decoded.
///
/// # Examples
///
/// ```no_run
/// use suitelex_cli::commands::check;
///
/// let result = check("resources/common.resource", true, "strict");
/// assert!(result.is_ok());
/// ```
pub fn check(file: &str, resource: bool, encoding: &str) -> Result<(), CliError> {
    let lexer = lexer(resource, parse_decoding(encoding)?);
    let tokens = lex_file(file, &lexer)?;
    let name = if file == STDIN { "<stdin>" } else { file };

    let errors: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.token_type == TokenType::Error)
        .collect();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = if errors.is_empty() {
        writeln!(out, "{}: no errors", name)
    } else {
        errors.iter().try_for_each(|token| {
            writeln!(
                out,
                "{}:{}:{}: error: {}",
                name,
                token.lineno,
                token.columnno,
                describe(&token.value)
            )
        })
    };
    written
        .and_then(|()| out.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))?;

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::ErrorTokens {
            file: name.to_string(),
            count: errors.len(),
        })
    }
}

/// Diagnostic message for the value of an ERROR token.
fn describe(value: &str) -> String {
    if value.starts_with('*') {
        format!("unrecognized section header '{}'", value)
    } else if value.starts_with('[') && value.ends_with(']') {
        format!("invalid or repeated setting '{}'", value)
    } else {
        format!("unexpected '{}'", value)
    }
}
