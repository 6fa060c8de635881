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

//! Tokens command - print the token stream of a file

use super::{lex_file, lexer, parse_decoding};
use crate::error::CliError;
use std::io::{self, BufWriter, Write};
use suitelex_core::Token;

/// Print the tokens of a file.
///
/// # Arguments
///
/// * `file` - Path to the file, or `-` for stdin
/// * `resource` - Use the resource grammar instead of the suite grammar
/// * `data_only` - Omit separators, line ends and comments
/// * `format` - `text` (one token per line) or `json`
/// * `encoding` - Byte decoding: `strict`, `lossy` or `latin1`
///
/// # Errors
///
/// Returns `Err` if the format or encoding is unknown, or if the file cannot
/// be read or decoded.
///
/// # Examples
///
/// ```no_run
/// use suitelex_cli::commands::tokens;
///
/// # fn main() -> Result<(), suitelex_cli::error::CliError> {
/// tokens("tests/login.robot", false, true, "json", "strict")?;
/// # Ok(())
/// # }
/// ```
pub fn tokens(
    file: &str,
    resource: bool,
    data_only: bool,
    format: &str,
    encoding: &str,
) -> Result<(), CliError> {
    let json = match format.to_ascii_lowercase().as_str() {
        "text" => false,
        "json" => true,
        other => {
            return Err(CliError::invalid_input(format!(
                "unknown format '{}' (expected text or json)",
                other
            )))
        }
    };
    let lexer = lexer(resource, parse_decoding(encoding)?).data_only(data_only);
    let tokens = lex_file(file, &lexer)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = if json {
        serde_json::to_writer_pretty(&mut out, &tokens)?;
        writeln!(out)
    } else {
        tokens
            .iter()
            .try_for_each(|token| writeln!(out, "{}", render_token(token)))
    };
    written
        .and_then(|()| out.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}

/// One-line text form of a token: type, `line:column` and quoted value.
///
/// # Examples
///
/// ```
/// use suitelex_cli::commands::render_token;
/// use suitelex_core::{Token, TokenType};
///
/// let line = render_token(&Token::new(TokenType::Keyword, "Log", 3, 5));
/// assert_eq!(line, "KEYWORD         3:5       \"Log\"");
/// ```
pub fn render_token(token: &Token) -> String {
    let position = format!("{}:{}", token.lineno, token.columnno);
    format!("{:<15} {:<9} {:?}", token.token_type, position, token.value)
}
