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

//! Structured error types for the Suitelex CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits with a failure status.

use std::io;
use std::path::PathBuf;
use suitelex_core::SourceError;
use thiserror::Error;

/// The main error type for Suitelex CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use suitelex_cli::error::CliError;
///
/// fn read(path: &str) -> Result<Vec<u8>, CliError> {
///     std::fs::read(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The source could not be opened or read by the lexer.
    #[error("Cannot lex '{file}': {message}")]
    Source {
        /// The input as given on the command line
        file: String,
        /// The source error message
        message: String,
    },

    /// Serializing tokens to JSON failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// The file contains ERROR tokens.
    #[error("{count} error(s) found in '{file}'")]
    ErrorTokens {
        /// The checked file
        file: String,
        /// Number of ERROR tokens
        count: usize,
    },

    /// Token values do not reproduce the input.
    #[error("Round trip failed for '{file}': first difference on line {line}")]
    RoundTrip {
        /// The checked file
        file: String,
        /// First line whose text differs
        line: usize,
    },

    /// Invalid command-line input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a lexing error for the given input.
    pub fn source(file: impl Into<String>, source: &SourceError) -> Self {
        Self::Source {
            file: file.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

// Automatic conversion from serde_json::Error
impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
