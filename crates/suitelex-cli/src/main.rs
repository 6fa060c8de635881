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

//! Suitelex Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use suitelex_cli::cli::Commands;
use tracing_subscriber::EnvFilter;

/// Suitelex - lexer for tabular test data
///
/// Tokenizes test suite and resource files written in the space or pipe
/// separated table format.
///
/// # Examples
///
/// ```bash
/// # Print the tokens of a suite
/// suitelex tokens login.robot
///
/// # Data tokens of a resource file as JSON
/// suitelex tokens common.resource --resource --data-only --format json
///
/// # Report unrecognized content
/// suitelex check login.robot
/// ```
#[derive(Parser)]
#[command(name = "suitelex")]
#[command(author, version, about = "Suitelex - lexer for tabular test data", long_about = None)]
struct Cli {
    /// Log lexer decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("suitelex_core=debug,suitelex_cli=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("suitelex_core=warn,suitelex_cli=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
