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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

const SUITE: &str = "\
*** Settings ***
Documentation    Login checks

*** Test Cases ***
Valid Login
    Open Browser    ${URL}
    Log    Hello    # greet
";

const RESOURCE: &str = "\
*** Keywords ***
Open Login Page
    [Arguments]    ${url}
    Go To    ${url}
";

fn suitelex_cmd() -> Command {
    Command::cargo_bin("suitelex").expect("Failed to find suitelex binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    suitelex_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suitelex - lexer for tabular test data"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    suitelex_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("suitelex"));
}

#[test]
fn test_no_subcommand_fails() {
    suitelex_cmd().assert().failure();
}

// ===== Tokens Command Tests =====

#[test]
fn test_tokens_text_output() {
    let file = create_temp_file(SUITE, ".robot");

    suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SETTING_HEADER"))
        .stdout(predicate::str::contains("DOCUMENTATION"))
        .stdout(predicate::str::contains("NAME            5:1       \"Valid Login\""))
        .stdout(predicate::str::contains("KEYWORD         6:5       \"Open Browser\""))
        .stdout(predicate::str::contains("COMMENT"))
        .stdout(predicate::str::contains("SEPARATOR"));
}

#[test]
fn test_tokens_json_output() {
    let file = create_temp_file(SUITE, ".robot");

    let output = suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run suitelex");
    assert!(output.status.success());

    let tokens: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    let tokens = tokens.as_array().expect("Expected a JSON array");
    assert_eq!(tokens[0]["type"], "SETTING_HEADER");
    assert_eq!(tokens[0]["value"], "*** Settings ***");
    assert_eq!(tokens[0]["lineno"], 1);
    assert_eq!(tokens[0]["columnno"], 1);

    let text: String = tokens
        .iter()
        .map(|t| t["value"].as_str().expect("value is a string"))
        .collect();
    assert_eq!(text, SUITE);
}

#[test]
fn test_tokens_data_only() {
    let file = create_temp_file(SUITE, ".robot");

    suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .arg("--data-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYWORD"))
        .stdout(predicate::str::contains("EOS"))
        .stdout(predicate::str::contains("SEPARATOR").not())
        .stdout(predicate::str::contains("EOL").not())
        .stdout(predicate::str::contains("# greet").not());
}

#[test]
fn test_tokens_resource_grammar() {
    let file = create_temp_file(RESOURCE, ".resource");

    suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .arg("--resource")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYWORD_HEADER"))
        .stdout(predicate::str::contains("ARGUMENTS"))
        .stdout(predicate::str::contains("ARGUMENT        3:20      \"${url}\""));
}

#[test]
fn test_tokens_from_stdin() {
    suitelex_cmd()
        .arg("tokens")
        .arg("-")
        .write_stdin(SUITE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Valid Login\""));
}

#[test]
fn test_tokens_invalid_format() {
    let file = create_temp_file(SUITE, ".robot");

    suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'yaml'"));
}

#[test]
fn test_tokens_invalid_encoding() {
    let file = create_temp_file(SUITE, ".robot");

    suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .arg("--encoding")
        .arg("ebcdic")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown encoding 'ebcdic'"));
}

#[test]
fn test_tokens_missing_file() {
    suitelex_cmd()
        .arg("tokens")
        .arg("/nonexistent/suite.robot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot lex '/nonexistent/suite.robot'"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_tokens_invalid_utf8() {
    let file = tempfile::Builder::new()
        .suffix(".robot")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), b"*** Test Cases ***\nCaf\xe9\n").expect("Failed to write temp file");

    suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot lex"));

    suitelex_cmd()
        .arg("tokens")
        .arg(file.path())
        .arg("--encoding")
        .arg("latin1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Café\""));
}

// ===== Check Command Tests =====

#[test]
fn test_check_clean_file() {
    let file = create_temp_file(SUITE, ".robot");

    suitelex_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no errors"));
}

#[test]
fn test_check_reports_errors() {
    let file = create_temp_file("*** Bogus ***\nsome text\n", ".robot");
    let name = file.path().display().to_string();

    suitelex_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(format!(
            "{}:1:1: error: unrecognized section header '*** Bogus ***'",
            name
        )))
        .stderr(predicate::str::contains("1 error(s) found"));
}

#[test]
fn test_check_grammar_matters() {
    // Test cases are not allowed in resource files.
    let file = create_temp_file("*** Test Cases ***\nExample\n", ".resource");

    suitelex_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .success();

    suitelex_cmd()
        .arg("check")
        .arg(file.path())
        .arg("--resource")
        .assert()
        .failure()
        .stdout(predicate::str::contains(":1:1: error:"));
}

// ===== Roundtrip Command Tests =====

#[test]
fn test_roundtrip_success() {
    let file = create_temp_file(SUITE, ".robot");

    suitelex_cmd()
        .arg("roundtrip")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens reproduce the input"));
}

#[test]
fn test_roundtrip_pipes_and_crlf() {
    let content = "| *** Test Cases *** |\r\n| Example | Log | Hi |\r\n|  | ... | more |\r\n";
    let file = create_temp_file(content, ".robot");

    suitelex_cmd()
        .arg("roundtrip")
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn test_verbose_logs_to_stderr() {
    let file = create_temp_file(SUITE, ".robot");

    suitelex_cmd()
        .arg("--verbose")
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no errors"))
        .stderr(predicate::str::contains("DEBUG"));
}
