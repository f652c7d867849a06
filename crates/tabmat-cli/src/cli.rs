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

//! CLI command definitions and argument parsing.
//!
//! The unary commands (`dims`, `transpose`, `mean`) take an optional matrix
//! file and fall back to stdin; the binary commands (`add`, `multiply`)
//! require exactly two file paths and never read stdin. Argument-count and
//! unknown-command failures are rejected by clap before dispatch.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// TabMat commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the dimensions of a matrix as "rows cols"
    ///
    /// Reads the matrix from FILE, or from stdin when no file is given.
    Dims {
        /// Input matrix file (stdin when omitted)
        #[arg(value_name = "FILE")]
        matrix: Option<String>,
    },

    /// Transpose a matrix
    ///
    /// Reads the matrix from FILE, or from stdin when no file is given, and
    /// prints the n x m transpose of the m x n input.
    Transpose {
        /// Input matrix file (stdin when omitted)
        #[arg(value_name = "FILE")]
        matrix: Option<String>,
    },

    /// Print the column means of a matrix as a single row
    ///
    /// Reads the matrix from FILE, or from stdin when no file is given.
    /// Means are integers, rounded half-away-from-zero.
    Mean {
        /// Input matrix file (stdin when omitted)
        #[arg(value_name = "FILE")]
        matrix: Option<String>,
    },

    /// Add two matrices element-wise
    ///
    /// Both operands must be files with identical dimensions.
    Add {
        /// Left operand file
        #[arg(value_name = "LEFT")]
        left: String,

        /// Right operand file
        #[arg(value_name = "RIGHT")]
        right: String,
    },

    /// Multiply two matrices
    ///
    /// Computes the standard matrix product; the left operand's column count
    /// must equal the right operand's row count.
    Multiply {
        /// Left operand file
        #[arg(value_name = "LEFT")]
        left: String,

        /// Right operand file
        #[arg(value_name = "RIGHT")]
        right: String,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if input acquisition, parsing, or the operation itself
    /// fails. Nothing is written to stdout in that case.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Dims { matrix } => commands::dims(matrix.as_deref()),
            Commands::Transpose { matrix } => commands::transpose(matrix.as_deref()),
            Commands::Mean { matrix } => commands::mean(matrix.as_deref()),
            Commands::Add { left, right } => commands::add(&left, &right),
            Commands::Multiply { left, right } => commands::multiply(&left, &right),
        }
    }
}
