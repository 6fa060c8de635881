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

//! Line reader feeding the lexer.
//!
//! Provides buffered line-by-line reading with line number tracking and peek
//! support. Unlike typical line readers, lines keep their terminator (`\n` or
//! `\r\n`) so that token values can reproduce the source byte for byte.
//!
//! # Examples
//!
//! ```rust
//! use suitelex_core::LineReader;
//! use std::io::Cursor;
//!
//! let mut reader = LineReader::new(Cursor::new("first\nsecond"));
//!
//! assert_eq!(reader.peek_line().unwrap(), Some(&(1, "first\n".to_string())));
//! assert_eq!(reader.next_line().unwrap(), Some((1, "first\n".to_string())));
//! assert_eq!(reader.next_line().unwrap(), Some((2, "second".to_string())));
//! assert_eq!(reader.next_line().unwrap(), None);
//! ```

use crate::config::{Decoding, LexConfig};
use crate::error::{SourceError, SourceResult};
use std::io::{BufRead, BufReader, Read};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Buffered line reader with line number tracking.
///
/// Reads at most one line ahead of the consumer: [`peek_line`](Self::peek_line)
/// reads the next line once and keeps it until [`next_line`](Self::next_line)
/// hands it out.
pub struct LineReader<'a> {
    reader: Box<dyn BufRead + 'a>,
    origin: String,
    decoding: Decoding,
    strip_bom: bool,
    line_number: usize,
    buffer: Vec<u8>,
    peeked: Option<(usize, String)>,
}

impl<'a> LineReader<'a> {
    /// Create a line reader over a byte stream with default configuration.
    pub fn new<R: Read + 'a>(reader: R) -> Self {
        Self::with_config(reader, &LexConfig::default())
    }

    /// Create a line reader over a byte stream.
    pub fn with_config<R: Read + 'a>(reader: R, config: &LexConfig) -> Self {
        Self::from_parts(
            Box::new(BufReader::with_capacity(config.buffer_size(), reader)),
            "<stream>",
            config.decoding(),
            true,
        )
    }

    pub(crate) fn from_parts(
        reader: Box<dyn BufRead + 'a>,
        origin: impl Into<String>,
        decoding: Decoding,
        strip_bom: bool,
    ) -> Self {
        Self {
            reader,
            origin: origin.into(),
            decoding,
            strip_bom,
            line_number: 0,
            buffer: Vec::new(),
            peeked: None,
        }
    }

    /// Get the number of the last line read from the underlying source.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, terminator included.
    pub fn next_line(&mut self) -> SourceResult<Option<(usize, String)>> {
        if let Some(peeked) = self.peeked.take() {
            return Ok(Some(peeked));
        }
        self.read_line_internal()
    }

    /// Peek at the next line without consuming it.
    pub fn peek_line(&mut self) -> SourceResult<Option<&(usize, String)>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line_internal()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn read_line_internal(&mut self) -> SourceResult<Option<(usize, String)>> {
        loop {
            self.buffer.clear();

            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    if self.strip_bom {
                        self.strip_bom = false;
                        if self.buffer.starts_with(UTF8_BOM) {
                            self.buffer.drain(..UTF8_BOM.len());
                            if self.buffer.is_empty() {
                                continue;
                            }
                        }
                    }

                    self.line_number += 1;
                    let bytes = std::mem::take(&mut self.buffer);
                    let line = self.decoding.decode(bytes, self.line_number)?;
                    return Ok(Some((self.line_number, line)));
                }
                Err(e) => return Err(SourceError::io(self.origin.clone(), e)),
            }
        }
    }
}

impl Iterator for LineReader<'_> {
    type Item = SourceResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
