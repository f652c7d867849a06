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

//! Matrix operations: transpose, column mean, addition, multiplication.
//!
//! All arithmetic is checked 64-bit: overflow in any result cell is reported
//! as [`MatrixError::Overflow`] naming the operation and the 1-based cell,
//! never wrapped or panicked. Shape requirements are enforced up front with
//! [`MatrixError::DimensionMismatch`] carrying both operand shapes.

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

/// Transpose an m×n matrix into n×m.
///
/// # Examples
///
/// ```
/// use tabmat_core::{parse, render, transpose};
///
/// let m = parse(b"1\t2\t3\n4\t5\t6\n").unwrap();
/// assert_eq!(render(&transpose(&m)), "1\t4\n2\t5\n3\t6\n");
/// ```
pub fn transpose(matrix: &Matrix) -> Matrix {
    let (rows, cols) = matrix.dims();
    let mut data = vec![0i64; rows * cols];
    for (i, row) in matrix.iter_rows().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            data[j * rows + i] = cell;
        }
    }
    Matrix::from_parts(cols, rows, data)
}

/// Column means of an m×n matrix, as a 1×n row vector.
///
/// Each mean is the column sum divided by the row count, rounded
/// half-away-from-zero: `(sum + sign(sum) * (rows / 2)) / rows` in
/// truncating integer arithmetic, with a zero sum yielding exactly zero.
///
/// # Errors
///
/// [`MatrixError::Overflow`] if a column sum (or its rounding adjustment)
/// exceeds the `i64` range.
pub fn mean(matrix: &Matrix) -> MatrixResult<Matrix> {
    let (rows, cols) = matrix.dims();
    let mut sums = vec![0i64; cols];
    for row in matrix.iter_rows() {
        for (j, &cell) in row.iter().enumerate() {
            sums[j] = sums[j]
                .checked_add(cell)
                .ok_or_else(|| overflow("mean", 1, j + 1))?;
        }
    }

    let divisor = rows as i64;
    let mut means = Vec::with_capacity(cols);
    for (j, &sum) in sums.iter().enumerate() {
        let value = rounded_mean(sum, divisor).ok_or_else(|| overflow("mean", 1, j + 1))?;
        means.push(value);
    }
    Ok(Matrix::from_parts(1, cols, means))
}

/// Element-wise sum of two matrices of identical shape.
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] unless `left.dims() == right.dims()`.
/// - [`MatrixError::Overflow`] if any cell sum exceeds the `i64` range.
pub fn add(left: &Matrix, right: &Matrix) -> MatrixResult<Matrix> {
    if left.dims() != right.dims() {
        return Err(dimension_mismatch("add", left, right));
    }
    let (rows, cols) = left.dims();
    let mut data = Vec::with_capacity(rows * cols);
    for (index, (&a, &b)) in left.data.iter().zip(right.data.iter()).enumerate() {
        let cell = a
            .checked_add(b)
            .ok_or_else(|| overflow("add", index / cols + 1, index % cols + 1))?;
        data.push(cell);
    }
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Standard matrix product: m×n times n×p gives m×p.
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] unless `left.cols() == right.rows()`.
/// - [`MatrixError::Overflow`] if any product or accumulation exceeds the
///   `i64` range.
pub fn multiply(left: &Matrix, right: &Matrix) -> MatrixResult<Matrix> {
    if left.cols() != right.rows() {
        return Err(dimension_mismatch("multiply", left, right));
    }
    let (rows, inner) = left.dims();
    let cols = right.cols();
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        let lhs_row = &left.data[i * inner..(i + 1) * inner];
        for j in 0..cols {
            let mut acc = 0i64;
            for (k, &a) in lhs_row.iter().enumerate() {
                let product = a
                    .checked_mul(right.data[k * cols + j])
                    .ok_or_else(|| overflow("multiply", i + 1, j + 1))?;
                acc = acc
                    .checked_add(product)
                    .ok_or_else(|| overflow("multiply", i + 1, j + 1))?;
            }
            data.push(acc);
        }
    }
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Integer mean of `sum` over `count` entries, ties rounded away from zero.
///
/// `count` must be positive. A zero sum yields zero directly: both
/// adjustment directions truncate to zero, so neither is observable.
/// Returns `None` if the rounding adjustment overflows.
fn rounded_mean(sum: i64, count: i64) -> Option<i64> {
    if sum == 0 {
        return Some(0);
    }
    let half = count / 2;
    let adjusted = if sum > 0 {
        sum.checked_add(half)?
    } else {
        sum.checked_sub(half)?
    };
    Some(adjusted / count)
}

fn overflow(op: &str, row: usize, column: usize) -> MatrixError {
    MatrixError::Overflow {
        op: op.to_string(),
        row,
        column,
    }
}

fn dimension_mismatch(op: &str, left: &Matrix, right: &Matrix) -> MatrixError {
    MatrixError::DimensionMismatch {
        op: op.to_string(),
        left_rows: left.rows(),
        left_cols: left.cols(),
        right_rows: right.rows(),
        right_cols: right.cols(),
    }
}
