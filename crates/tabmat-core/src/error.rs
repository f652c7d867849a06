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

//! Error types for matrix parsing and arithmetic.
//!
//! All failures across the crate are expressed as `MatrixError` variants so
//! callers can match on the exact condition. Parse errors carry 1-based line
//! numbers (and a 1-based cell column where a single cell is implicated);
//! operation errors carry the shapes or result cell involved.

use thiserror::Error;

/// Unified error type for matrix parsing and operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatrixError {
    // ==================== Parse errors ====================
    /// Input contained no data at all.
    #[error("empty input: expected at least one matrix row")]
    EmptyInput,

    /// A line was empty or contained only whitespace.
    #[error("line {line}: blank line not allowed in matrix input")]
    BlankLine { line: usize },

    /// A line ended with a separator, leaving an empty trailing cell.
    #[error("line {line}: trailing tab separator not allowed in matrix row")]
    TrailingSeparator { line: usize },

    /// A cell was not a base-10 integer representable in 64 bits.
    #[error("line {line}, column {column}: invalid matrix element '{token}'")]
    InvalidElement {
        token: String,
        line: usize,
        column: usize,
    },

    /// A row's cell count differed from the first row's.
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedMatrix {
        expected: usize,
        found: usize,
        line: usize,
    },

    // ==================== Operation errors ====================
    /// Operand shapes are incompatible for the requested operation.
    #[error("{op}: incompatible matrix dimensions ({left_rows}x{left_cols} and {right_rows}x{right_cols})")]
    DimensionMismatch {
        op: String,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// 64-bit arithmetic overflowed while computing a result cell.
    #[error("{op}: integer overflow computing row {row}, column {column}")]
    Overflow {
        op: String,
        row: usize,
        column: usize,
    },
}

impl MatrixError {
    /// Get the 1-based input line where this error occurred, if available.
    ///
    /// Returns `None` for errors that are not tied to a source line
    /// (`EmptyInput` and the operation errors).
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            MatrixError::BlankLine { line }
            | MatrixError::TrailingSeparator { line }
            | MatrixError::InvalidElement { line, .. }
            | MatrixError::RaggedMatrix { line, .. } => Some(*line),
            MatrixError::EmptyInput
            | MatrixError::DimensionMismatch { .. }
            | MatrixError::Overflow { .. } => None,
        }
    }

    /// Returns `true` if this error was produced while validating input text.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            MatrixError::EmptyInput
                | MatrixError::BlankLine { .. }
                | MatrixError::TrailingSeparator { .. }
                | MatrixError::InvalidElement { .. }
                | MatrixError::RaggedMatrix { .. }
        )
    }
}

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
