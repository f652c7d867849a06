// Dweve TabMat - Tab-Separated Matrix Toolkit
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

//! TabMat command line interface.

use clap::Parser;
use std::process::ExitCode;
use tabmat_cli::cli::Commands;

/// TabMat - integer matrix operations on tab-separated text
///
/// Reads matrices as tab-separated integer rows from files or stdin,
/// validates them strictly, and prints results to stdout.
///
/// # Examples
///
/// ```bash
/// # Dimensions of a matrix file
/// tabmat dims m.txt
///
/// # Transpose stdin
/// tabmat transpose < m.txt
///
/// # Column means
/// tabmat mean m.txt
///
/// # Add or multiply two matrix files
/// tabmat add left.txt right.txt
/// tabmat multiply left.txt right.txt
/// ```
#[derive(Parser)]
#[command(name = "tabmat")]
#[command(author, version, about = "TabMat - integer matrix operations on tab-separated text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
