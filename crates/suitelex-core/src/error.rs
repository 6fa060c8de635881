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

//! Error types for obtaining source text.
//!
//! Lexing itself never fails: malformed cells become [`TokenType::Error`]
//! tokens. The only hard failure is not being able to read the source at all,
//! which is reported as a [`SourceError`].
//!
//! # Error Handling Examples
//!
//! ```rust
//! use std::path::Path;
//! use suitelex_core::{get_tokens, SourceError};
//!
//! match get_tokens(Path::new("/no/such/suite.robot"), false) {
//!     Err(SourceError::NotFound { path }) => {
//!         eprintln!("missing: {}", path.display());
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//!     Ok(_) => unreachable!(),
//! }
//! ```
//!
//! [`TokenType::Error`]: crate::TokenType::Error

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when source text cannot be obtained.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A path did not resolve to a readable file.
    #[error("source file '{}' does not exist or is not a file", .path.display())]
    NotFound { path: PathBuf },

    /// Reading the source failed.
    #[error("failed to read {origin}: {source}")]
    Io {
        /// Path of the file, or `<stream>` for reader sources.
        origin: String,
        #[source]
        source: io::Error,
    },

    /// Source bytes are not valid text under the configured decoding.
    #[error("invalid UTF-8 at line {line}: {message}")]
    Decode { line: usize, message: String },
}

impl SourceError {
    /// Create an I/O error for the given origin.
    #[inline]
    pub fn io(origin: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            origin: origin.into(),
            source,
        }
    }

    /// Create a decoding error.
    #[inline]
    pub fn decode(line: usize, message: impl Into<String>) -> Self {
        Self::Decode {
            line,
            message: message.into(),
        }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            SourceError::Decode { line, .. } => Some(*line),
            SourceError::NotFound { .. } | SourceError::Io { .. } => None,
        }
    }
}

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
