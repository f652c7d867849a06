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

//! Single-matrix commands: dims, transpose, mean.
//!
//! Each reads one matrix from a file path, or from stdin when no path is
//! given, and prints its result to stdout only after the whole pipeline has
//! succeeded.

use super::{load_matrix, write_output};
use crate::error::CliError;
use tabmat_core::{render, render_dims};

/// Print the dimensions of a matrix as a single "rows cols" line.
///
/// # Arguments
///
/// * `matrix` - Input file path, or `None` to read stdin
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or does not parse as a matrix.
pub fn dims(matrix: Option<&str>) -> Result<(), CliError> {
    let m = load_matrix(matrix)?;
    write_output(&render_dims(&m))
}

/// Print the transpose of a matrix.
///
/// # Arguments
///
/// * `matrix` - Input file path, or `None` to read stdin
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or does not parse as a matrix.
pub fn transpose(matrix: Option<&str>) -> Result<(), CliError> {
    let m = load_matrix(matrix)?;
    write_output(&render(&tabmat_core::transpose(&m)))
}

/// Print the column means of a matrix as a single row.
///
/// Means are integers rounded half-away-from-zero.
///
/// # Arguments
///
/// * `matrix` - Input file path, or `None` to read stdin
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, does not parse as a matrix,
/// or a column sum overflows 64-bit arithmetic.
pub fn mean(matrix: Option<&str>) -> Result<(), CliError> {
    let m = load_matrix(matrix)?;
    let result = tabmat_core::mean(&m)?;
    write_output(&render(&result))
}
