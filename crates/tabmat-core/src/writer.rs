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

//! Canonical text output for matrices.
//!
//! Properties of the rendered form:
//!
//! - **Determinism**: the same matrix always renders to the same bytes.
//! - **Canonical cells**: base-10 `i64` rendering — no leading zeros, no
//!   plus sign, minus only on negatives, zero never rendered as `-0`.
//! - **Exactly one trailing LF**: cells tab-joined, rows LF-joined, one LF
//!   after the final row.
//! - **Round-trip**: `parse(render(m))` reproduces `m` exactly, and
//!   rendering a parsed canonical input reproduces its bytes.

use crate::matrix::Matrix;
use std::fmt::Write;

/// Render a matrix in canonical tab-separated form.
///
/// # Examples
///
/// ```
/// use tabmat_core::{parse, render};
///
/// let m = parse(b"1\t2\n3\t4\n").unwrap();
/// assert_eq!(render(&m), "1\t2\n3\t4\n");
/// ```
pub fn render(matrix: &Matrix) -> String {
    // Rough budget: most cells are a few digits plus a separator.
    let mut out = String::with_capacity(matrix.rows() * matrix.cols() * 4);
    for row in matrix.iter_rows() {
        for (index, cell) in row.iter().enumerate() {
            if index > 0 {
                out.push('\t');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", cell);
        }
        out.push('\n');
    }
    out
}

/// Render the dimension line: `"{rows} {cols}\n"`.
pub fn render_dims(matrix: &Matrix) -> String {
    format!("{} {}\n", matrix.rows(), matrix.cols())
}
