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

//! Configuration for reading and decoding sources.
//!
//! # Examples
//!
//! ```
//! use suitelex_core::{Decoding, LexConfig};
//!
//! let config = LexConfig::default();
//! assert_eq!(config.decoding(), Decoding::Strict);
//! assert_eq!(config.buffer_size(), 64 * 1024);
//!
//! let lenient = LexConfig::new()
//!     .with_decoding(Decoding::Latin1)
//!     .with_buffer_size(8 * 1024);
//! assert_eq!(lenient.decoding(), Decoding::Latin1);
//! ```

use crate::error::{SourceError, SourceResult};

/// How bytes read from files, streams and buffers are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    /// UTF-8; invalid sequences fail with [`SourceError::Decode`].
    #[default]
    Strict,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Lossy,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl Decoding {
    /// Decode one physical line.
    pub(crate) fn decode(self, bytes: Vec<u8>, line: usize) -> SourceResult<String> {
        match self {
            Decoding::Strict => String::from_utf8(bytes).map_err(|e| {
                SourceError::decode(
                    line,
                    format!("invalid byte sequence at offset {}", e.utf8_error().valid_up_to()),
                )
            }),
            Decoding::Lossy => Ok(match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            }),
            Decoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// Lexer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexConfig {
    /// Decoding applied to byte sources.
    ///
    /// Default: [`Decoding::Strict`].
    decoding: Decoding,

    /// Buffer size for file and stream sources.
    ///
    /// Default: 64KB
    buffer_size: usize,
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            decoding: Decoding::Strict,
            buffer_size: 64 * 1024,
        }
    }
}

impl LexConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decoding used for byte sources.
    pub fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// Sets the read buffer size. Zero is bumped to one byte.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Returns the decoding used for byte sources.
    #[inline]
    pub fn decoding(&self) -> Decoding {
        self.decoding
    }

    /// Returns the read buffer size.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}
