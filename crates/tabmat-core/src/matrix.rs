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

//! Dense matrix model for parsed input.
//!
//! Cells are stored row-major in a single flat buffer, so operations index
//! directly instead of re-walking text. Construction is validating: a
//! `Matrix` always has at least one row, at least one column, and
//! `rows * cols` cells.

use crate::error::{MatrixError, MatrixResult};

/// A validated rectangular matrix of 64-bit integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    /// Row-major cell storage, `rows * cols` entries.
    pub(crate) data: Vec<i64>,
}

impl Matrix {
    /// Build a matrix from rows of cells, validating shape.
    ///
    /// Row indices in errors are 1-based, matching parser line numbers.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::EmptyInput`] if `rows` is empty.
    /// - [`MatrixError::BlankLine`] if any row has no cells.
    /// - [`MatrixError::RaggedMatrix`] if a row's length differs from the
    ///   first row's.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> MatrixResult<Self> {
        let row_count = rows.len();
        if row_count == 0 {
            return Err(MatrixError::EmptyInput);
        }
        let cols = rows[0].len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.is_empty() {
                return Err(MatrixError::BlankLine { line: index + 1 });
            }
            if row.len() != cols {
                return Err(MatrixError::RaggedMatrix {
                    expected: cols,
                    found: row.len(),
                    line: index + 1,
                });
            }
            data.extend_from_slice(&row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Assemble a matrix from already-validated parts.
    ///
    /// Callers must guarantee `rows >= 1`, `cols >= 1`, and
    /// `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<i64>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get a cell by 0-based row and column index.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Get a row as a slice by 0-based index.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&[i64]> {
        if index < self.rows {
            let start = index * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows as slices, in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.chunks_exact(self.cols)
    }
}
