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

//! Row splitting for the two separator dialects.
//!
//! A physical line is right-trimmed first; the trimmed-off whitespace and line
//! terminator become the row's end-of-line text. The rest is split into an
//! alternating sequence of data cells and separators:
//!
//! - **Space dialect**: a whitespace run of two or more characters, or any run
//!   containing a tab, separates cells. Single spaces are cell content.
//! - **Pipe dialect**: chosen when the line starts with a `|` followed by
//!   whitespace or the end of the line. A pipe preceded by whitespace (or the
//!   start of the remaining text) and followed by whitespace (or the end of the
//!   line) separates cells, together with the surrounding whitespace.
//!
//! The dialect is detected independently for every row.
//!
//! # Examples
//!
//! ```
//! use suitelex_core::row::{Dialect, Row};
//!
//! let row = Row::split("| Name | Keyword |\n", 1);
//! assert_eq!(row.dialect, Dialect::Pipe);
//! let texts: Vec<_> = row.pieces.iter().map(|p| p.text).collect();
//! assert_eq!(texts, vec!["| ", "Name", " | ", "Keyword", " |"]);
//! assert_eq!(row.eol, "\n");
//! assert_eq!(row.eol_column, 18);
//! ```

/// Cell separator dialect of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Cells separated by two or more spaces or a tab.
    Space,
    /// Cells separated by ` | `.
    Pipe,
}

impl Dialect {
    /// Detect the dialect of a right-trimmed line.
    pub fn detect(content: &str) -> Self {
        if content.starts_with('|') && matches!(find_pipe_separator(content), Some((0, _))) {
            Dialect::Pipe
        } else {
            Dialect::Space
        }
    }

    fn split(self, content: &str) -> Vec<(PieceKind, &str)> {
        match self {
            Dialect::Space => split_from_spaces(content),
            Dialect::Pipe => split_from_pipes(content),
        }
    }
}

/// Whether a piece of a row is cell data or a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Data,
    Separator,
}

/// One cell or separator of a row with its 1-based start column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'l> {
    pub kind: PieceKind,
    pub text: &'l str,
    pub column: usize,
}

impl Piece<'_> {
    /// Returns `true` for separators.
    #[inline]
    pub fn is_separator(&self) -> bool {
        self.kind == PieceKind::Separator
    }
}

/// A physical line split into pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'l> {
    /// 1-based line number.
    pub lineno: usize,
    /// Dialect used to split this row.
    pub dialect: Dialect,
    /// Cells and separators in source order. Empty trailing cells are dropped;
    /// empty leading cells mark indentation.
    pub pieces: Vec<Piece<'l>>,
    /// Trailing whitespace and line terminator.
    pub eol: &'l str,
    /// Column where `eol` starts.
    pub eol_column: usize,
}

impl<'l> Row<'l> {
    /// Split one physical line.
    pub fn split(line: &'l str, lineno: usize) -> Self {
        let content = line.trim_end();
        let eol = &line[content.len()..];
        let dialect = Dialect::detect(content);
        let raw = dialect.split(content);

        let last_data = raw
            .iter()
            .rposition(|(kind, text)| *kind == PieceKind::Data && !text.is_empty());
        let Some(last_data) = last_data else {
            // only separators: an empty row
            return Self {
                lineno,
                dialect,
                pieces: Vec::new(),
                eol: line,
                eol_column: 1,
            };
        };

        let mut column = 1;
        let mut pieces = Vec::with_capacity(raw.len());
        for (index, (kind, text)) in raw.into_iter().enumerate() {
            let keep = !text.is_empty() || index < last_data;
            if keep {
                pieces.push(Piece { kind, text, column });
            }
            column += text.chars().count();
        }

        Self {
            lineno,
            dialect,
            pieces,
            eol,
            eol_column: column,
        }
    }

    /// Data cells in order, separators skipped.
    pub fn cells(&self) -> impl Iterator<Item = &Piece<'l>> + '_ {
        self.pieces.iter().filter(|piece| !piece.is_separator())
    }

    /// Text of the first non-empty cell.
    pub fn first_value(&self) -> Option<&'l str> {
        self.cells().map(|piece| piece.text).find(|text| !text.is_empty())
    }

    /// Returns `true` if the first non-empty cell is the `...` continuation marker.
    pub fn is_continuation(&self) -> bool {
        self.first_value() == Some(CONTINUATION_MARKER)
    }
}

/// Marker continuing the previous statement.
pub const CONTINUATION_MARKER: &str = "...";

fn split_from_spaces(content: &str) -> Vec<(PieceKind, &str)> {
    let mut pieces = Vec::new();
    let mut cell_start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if !ch.is_whitespace() {
            continue;
        }

        let mut end = start + ch.len_utf8();
        let mut width = 1;
        let mut has_tab = ch == '\t';
        while let Some(&(index, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            end = index + next.len_utf8();
            width += 1;
            has_tab |= next == '\t';
            chars.next();
        }

        if width >= 2 || has_tab {
            pieces.push((PieceKind::Data, &content[cell_start..start]));
            pieces.push((PieceKind::Separator, &content[start..end]));
            cell_start = end;
        }
    }

    pieces.push((PieceKind::Data, &content[cell_start..]));
    pieces
}

fn split_from_pipes(content: &str) -> Vec<(PieceKind, &str)> {
    let mut pieces = Vec::new();
    let mut rest = content;

    // detect() guarantees a separator at offset 0
    if let Some((_, end)) = find_pipe_separator(rest) {
        pieces.push((PieceKind::Separator, &rest[..end]));
        rest = &rest[end..];
    }

    while let Some((start, end)) = find_pipe_separator(rest) {
        pieces.push((PieceKind::Data, &rest[..start]));
        pieces.push((PieceKind::Separator, &rest[start..end]));
        rest = &rest[end..];
    }

    pieces.push((PieceKind::Data, rest));
    pieces
}

/// Find the first pipe separator in `s` as a byte range.
///
/// A separator is `|` preceded by whitespace or the start of `s` and followed
/// by whitespace or the end of `s`; the surrounding whitespace belongs to it.
fn find_pipe_separator(s: &str) -> Option<(usize, usize)> {
    let mut chars = s.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let pipe = if ch == '|' && start == 0 {
            Some(0)
        } else if ch.is_whitespace() {
            let mut run_end = start + ch.len_utf8();
            while let Some(&(index, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                run_end = index + next.len_utf8();
                chars.next();
            }
            s[run_end..].starts_with('|').then_some(run_end)
        } else {
            None
        };

        if let Some(pipe) = pipe {
            let after = pipe + 1;
            let trailing = s[after..]
                .char_indices()
                .find(|(_, c)| !c.is_whitespace())
                .map_or(s.len() - after, |(offset, _)| offset);
            if trailing > 0 || after == s.len() {
                return Some((start, after + trailing));
            }
        }
    }

    None
}
