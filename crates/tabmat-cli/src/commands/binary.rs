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

//! Two-matrix commands: add, multiply.
//!
//! Both operands come from files; stdin is never consulted. The left file is
//! read and parsed first, so its errors win when both inputs are bad.

use super::{load_matrix_file, write_output};
use crate::error::CliError;
use tabmat_core::{render, Matrix};

/// Add two matrices element-wise and print the sum.
///
/// # Arguments
///
/// * `left` - Left operand file path
/// * `right` - Right operand file path
///
/// # Errors
///
/// Returns `Err` if either file cannot be read or parsed, if the shapes
/// differ, or if a cell sum overflows 64-bit arithmetic.
pub fn add(left: &str, right: &str) -> Result<(), CliError> {
    let (a, b) = load_pair(left, right)?;
    let sum = tabmat_core::add(&a, &b)?;
    write_output(&render(&sum))
}

/// Multiply two matrices and print the product.
///
/// # Arguments
///
/// * `left` - Left operand file path
/// * `right` - Right operand file path
///
/// # Errors
///
/// Returns `Err` if either file cannot be read or parsed, if the left
/// operand's column count differs from the right operand's row count, or if
/// any product or accumulation overflows 64-bit arithmetic.
pub fn multiply(left: &str, right: &str) -> Result<(), CliError> {
    let (a, b) = load_pair(left, right)?;
    let product = tabmat_core::multiply(&a, &b)?;
    write_output(&render(&product))
}

fn load_pair(left: &str, right: &str) -> Result<(Matrix, Matrix), CliError> {
    let a = load_matrix_file(left)?;
    let b = load_matrix_file(right)?;
    Ok((a, b))
}
