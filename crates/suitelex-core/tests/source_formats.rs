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

//! Every accepted source shape yields the same tokens for the same content.

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use suitelex_core::{
    get_resource_tokens, get_tokens, Decoding, LexConfig, Lexer, Source, SourceError,
    SourceResult, Token, TokenStream,
};
use tempfile::NamedTempFile;

const SUITE: &str = "\
*** Settings ***
Library         Easter

*** Test Cases ***
Example
    None shall pass    ${NONE}
";

const RESOURCE: &str = "\
*** Variable ***
${VAR}    Value

*** KEYWORD ***
NOOP    No Operation
";

type Entry = fn(Source<'static>, bool) -> SourceResult<TokenStream<'static>>;

fn write_temp(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn collect(stream: SourceResult<TokenStream<'_>>) -> Vec<Token> {
    stream.unwrap().collect::<Result<Vec<_>, _>>().unwrap()
}

fn verify_all_shapes(content: &str, entry: Entry, data_only: bool) {
    let expected = collect(entry(Source::text(content.to_string()), data_only));
    assert!(!expected.is_empty());

    let file = write_temp(content.as_bytes());
    let path: &Path = file.path();
    let path_text = path.to_str().unwrap().to_string();

    let shapes: Vec<(&str, Source<'static>)> = vec![
        ("string path", Source::from(path_text.clone())),
        ("path buf", Source::from(PathBuf::from(&path_text))),
        ("open file", Source::reader(File::open(path).unwrap())),
        ("in-memory buffer", Source::reader(Cursor::new(content.as_bytes().to_vec()))),
        ("byte vector", Source::from(content.as_bytes().to_vec())),
        ("literal string", Source::from(content.to_string())),
    ];

    for (shape, source) in shapes {
        assert_eq!(collect(entry(source, data_only)), expected, "shape: {shape}");
    }
}

fn suite_entry(source: Source<'static>, data_only: bool) -> SourceResult<TokenStream<'static>> {
    get_tokens(source, data_only)
}

fn resource_entry(source: Source<'static>, data_only: bool) -> SourceResult<TokenStream<'static>> {
    get_resource_tokens(source, data_only)
}

// ==================== Shape invariance ====================

#[test]
fn test_suite_source_shapes() {
    verify_all_shapes(SUITE, suite_entry, false);
    verify_all_shapes(SUITE, suite_entry, true);
}

#[test]
fn test_resource_source_shapes() {
    verify_all_shapes(RESOURCE, resource_entry, false);
    verify_all_shapes(RESOURCE, resource_entry, true);
}

#[test]
fn test_borrowed_path_and_str() {
    let file = write_temp(SUITE.as_bytes());
    let path_text = file.path().to_str().unwrap().to_string();

    let from_str = collect(get_tokens(path_text.as_str(), false));
    let from_path = collect(get_tokens(file.path(), false));
    let from_text = collect(get_tokens(SUITE, false));
    assert_eq!(from_str, from_text);
    assert_eq!(from_path, from_text);
}

#[test]
fn test_byte_order_mark_is_dropped() {
    let mut content = vec![0xEF, 0xBB, 0xBF];
    content.extend_from_slice(SUITE.as_bytes());
    let file = write_temp(&content);

    let expected = collect(get_tokens(SUITE, false));
    assert_eq!(collect(get_tokens(file.path(), false)), expected);
    assert_eq!(collect(get_tokens(content.as_slice(), false)), expected);
}

// ==================== Source errors ====================

#[test]
fn test_missing_path_is_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.robot");

    match get_tokens(missing.as_path(), false) {
        Err(SourceError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_directory_is_not_a_source_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        get_resource_tokens(dir.path(), false),
        Err(SourceError::NotFound { .. })
    ));
}

#[test]
fn test_missing_path_string_is_literal_text() {
    let tokens = collect(get_tokens("no/such/file.robot", true));
    // text before any header is comment data, dropped in data-only mode
    assert!(tokens.is_empty());
}

#[test]
fn test_invalid_utf8_is_reported_with_line() {
    let content = b"*** Settings ***\nLibrary    \xFF\n".to_vec();
    let results: Vec<_> = get_tokens(content.clone(), false).unwrap().collect();

    let error = results
        .iter()
        .find_map(|item| item.as_ref().err())
        .expect("decode error");
    assert_eq!(error.line(), Some(2));
    assert!(results.last().unwrap().is_err());

    let lossy = Lexer::suite()
        .with_config(LexConfig::new().with_decoding(Decoding::Lossy))
        .tokens(content)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(lossy[5].value, "\u{FFFD}");
}

#[test]
fn test_latin1_decoding() {
    let content = b"*** Keywords ***\nK\xE4\n".to_vec();
    let tokens = Lexer::resource()
        .with_config(LexConfig::new().with_decoding(Decoding::Latin1))
        .data_only(true)
        .tokens(content)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(tokens[2].value, "Kä");
}
