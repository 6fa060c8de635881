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

//! Roundtrip command - verify that full-mode tokens reproduce the input

use super::{lexer, read_input, STDIN};
use crate::error::CliError;
use suitelex_core::{Decoding, Source};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Lex a file in full mode and compare the concatenated token values with
/// the file content.
///
/// A leading byte-order mark is not part of the text and is ignored.
///
/// # Errors
///
/// Returns [`CliError::RoundTrip`] with the first differing line if the
/// values do not reproduce the file, or another error if the file cannot be
/// read or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use suitelex_cli::commands::roundtrip;
///
/// # fn main() -> Result<(), suitelex_cli::error::CliError> {
/// roundtrip("tests/login.robot", false)?;
/// # Ok(())
/// # }
/// ```
pub fn roundtrip(file: &str, resource: bool) -> Result<(), CliError> {
    let name = if file == STDIN { "<stdin>" } else { file };
    let bytes = read_input(file)?;

    let tokens = lexer(resource, Decoding::Strict)
        .tokens(Source::from(bytes.as_slice()))
        .map_err(|e| CliError::source(name, &e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::source(name, &e))?;

    let text: String = tokens.iter().map(|token| token.value.as_str()).collect();
    let expected = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    if let Some(line) = first_difference(text.as_bytes(), expected) {
        return Err(CliError::RoundTrip {
            file: name.to_string(),
            line,
        });
    }

    println!("{}: {} tokens reproduce the input", name, tokens.len());
    Ok(())
}

/// 1-based line of the first byte where `actual` and `expected` differ.
fn first_difference(actual: &[u8], expected: &[u8]) -> Option<usize> {
    let position = actual
        .iter()
        .zip(expected)
        .position(|(a, b)| a != b)
        .or_else(|| (actual.len() != expected.len()).then_some(actual.len().min(expected.len())))?;
    Some(1 + expected[..position].iter().filter(|&&b| b == b'\n').count())
}
