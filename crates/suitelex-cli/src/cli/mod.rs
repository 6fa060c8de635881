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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// `FILE` is a path, or `-` to read standard input.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use suitelex_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the token stream of a file
    ///
    /// Prints one token per line with its type, position and value, or the
    /// whole stream as a JSON array.
    Tokens {
        /// Input file path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        /// Use the resource file grammar
        #[arg(short, long)]
        resource: bool,

        /// Omit separators, line ends and comments
        #[arg(short, long)]
        data_only: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Byte decoding (strict, lossy, latin1)
        #[arg(short, long, default_value = "strict")]
        encoding: String,
    },

    /// Report ERROR tokens
    ///
    /// Prints `FILE:LINE:COLUMN: error: ...` for every cell the lexer could not
    /// place and exits with a failure status if there are any.
    Check {
        /// Input file path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        /// Use the resource file grammar
        #[arg(short, long)]
        resource: bool,

        /// Byte decoding (strict, lossy, latin1)
        #[arg(short, long, default_value = "strict")]
        encoding: String,
    },

    /// Verify that the tokens reproduce the file exactly
    Roundtrip {
        /// Input file path (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: String,

        /// Use the resource file grammar
        #[arg(short, long)]
        resource: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read or lexed, if output cannot be
    /// written, or if a check fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Tokens {
                file,
                resource,
                data_only,
                format,
                encoding,
            } => commands::tokens(&file, resource, data_only, &format, &encoding),
            Commands::Check {
                file,
                resource,
                encoding,
            } => commands::check(&file, resource, &encoding),
            Commands::Roundtrip { file, resource } => commands::roundtrip(&file, resource),
        }
    }
}
