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

//! Source normalization.
//!
//! A [`Source`] is any of the accepted input shapes: a filesystem path, an
//! open byte stream, an in-memory byte buffer, or text. Opening a source turns
//! it into a [`LineReader`] producing physical lines with their terminators.
//!
//! Plain strings are ambiguous: `"suite.robot"` could be a file name or a
//! one-line test data file. They are resolved in this order: open stream,
//! existing filesystem path, literal text. A string containing a newline is
//! always text. Use [`Source::text`] to skip the path check.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use suitelex_core::Source;
//!
//! // Literal text (no such file exists)
//! let text = Source::from("*** Settings ***\nLibrary    OperatingSystem\n");
//! assert!(matches!(text, Source::Inferred(_)));
//!
//! // Explicit path
//! let path = Source::from(Path::new("tests/suite.robot"));
//! assert!(matches!(path, Source::Path(_)));
//!
//! // Any reader
//! let stream = Source::reader(std::io::Cursor::new(b"*** Keywords ***\n".to_vec()));
//! assert!(matches!(stream, Source::Reader(_)));
//! ```

use crate::config::{Decoding, LexConfig};
use crate::error::{SourceError, SourceResult};
use crate::reader::LineReader;
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input accepted by the lexer entry points.
pub enum Source<'a> {
    /// A filesystem path. Must name a readable file.
    Path(PathBuf),
    /// An open byte stream.
    Reader(Box<dyn Read + 'a>),
    /// An in-memory byte buffer.
    Bytes(Cow<'a, [u8]>),
    /// Literal source text.
    Text(Cow<'a, str>),
    /// A string that is a path if it names an existing file, text otherwise.
    Inferred(Cow<'a, str>),
}

impl<'a> Source<'a> {
    /// Wrap an open byte stream.
    pub fn reader<R: Read + 'a>(reader: R) -> Self {
        Source::Reader(Box::new(reader))
    }

    /// Literal source text, never interpreted as a path.
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Source::Text(text.into())
    }

    /// Open the source for reading.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] if a [`Source::Path`] does not name a
    /// file and [`SourceError::Io`] if the file cannot be opened.
    pub fn open(self, config: &LexConfig) -> SourceResult<LineReader<'a>> {
        match self {
            Source::Inferred(value) => {
                if names_existing_file(&value) {
                    debug!(path = %value, "string source resolved to a file");
                    Source::Path(PathBuf::from(value.as_ref())).open(config)
                } else {
                    debug!("string source resolved to literal text");
                    Source::Text(value).open(config)
                }
            }
            Source::Path(path) => {
                if !path.is_file() {
                    return Err(SourceError::NotFound { path });
                }
                let origin = path.display().to_string();
                let file = File::open(&path).map_err(|e| SourceError::io(origin.clone(), e))?;
                debug!(path = %origin, "reading source file");
                Ok(LineReader::from_parts(
                    Box::new(BufReader::with_capacity(config.buffer_size(), file)),
                    origin,
                    config.decoding(),
                    true,
                ))
            }
            Source::Reader(reader) => {
                debug!("reading source stream");
                Ok(LineReader::with_config(reader, config))
            }
            Source::Bytes(bytes) => Ok(LineReader::from_parts(
                Box::new(Cursor::new(bytes)),
                "<buffer>",
                config.decoding(),
                true,
            )),
            Source::Text(text) => {
                let bytes: Cow<'a, [u8]> = match text {
                    Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                    Cow::Owned(s) => Cow::Owned(s.into_bytes()),
                };
                Ok(LineReader::from_parts(
                    Box::new(Cursor::new(bytes)),
                    "<text>",
                    Decoding::Strict,
                    false,
                ))
            }
        }
    }
}

fn names_existing_file(value: &str) -> bool {
    !value.is_empty() && !value.contains('\n') && Path::new(value).is_file()
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Reader(_) => f.write_str("Reader(..)"),
            Source::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Source::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Source::Inferred(value) => f.debug_tuple("Inferred").field(value).finish(),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Source::Inferred(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(value: &'a String) -> Self {
        Source::Inferred(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Source<'_> {
    fn from(value: String) -> Self {
        Source::Inferred(Cow::Owned(value))
    }
}

impl From<&Path> for Source<'_> {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Source<'_> {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&PathBuf> for Source<'_> {
    fn from(path: &PathBuf) -> Self {
        Source::Path(path.clone())
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Source<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(Cow::Owned(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn read_all(source: Source<'_>) -> Vec<String> {
        source
            .open(&LexConfig::default())
            .unwrap()
            .map(|line| line.unwrap().1)
            .collect()
    }

    #[test]
    fn test_literal_text() {
        let lines = read_all(Source::from("a\r\nb\n\nc"));
        assert_eq!(lines, vec!["a\r\n", "b\n", "\n", "c"]);
    }

    #[test]
    fn test_existing_path_string_is_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"*** Keywords ***\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        assert_eq!(read_all(Source::from(path.as_str())), vec!["*** Keywords ***\n"]);
    }

    #[test]
    fn test_missing_path_string_is_text() {
        let lines = read_all(Source::from("/no/such/dir/suite.robot"));
        assert_eq!(lines, vec!["/no/such/dir/suite.robot"]);
    }

    #[test]
    fn test_explicit_text_never_a_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert_eq!(read_all(Source::text(path.as_str())), vec![path]);
    }

    #[test]
    fn test_missing_path_fails() {
        let err = Source::from(Path::new("/no/such/dir/suite.robot"))
            .open(&LexConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Source::from(dir.path())
            .open(&LexConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_bytes_and_reader() {
        let data = b"\xEF\xBB\xBFx\ny".to_vec();
        assert_eq!(read_all(Source::from(data.as_slice())), vec!["x\n", "y"]);
        assert_eq!(read_all(Source::reader(Cursor::new(data))), vec!["x\n", "y"]);
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", Source::reader(std::io::empty())), "Reader(..)");
        assert_eq!(format!("{:?}", Source::from(vec![1u8, 2])), "Bytes(2 bytes)");
    }
}
