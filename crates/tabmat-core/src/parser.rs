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

//! Parser for tab-separated integer matrices.
//!
//! Input is one row per LF-terminated line, cells separated by single tabs,
//! each cell a base-10 `i64` (`-?[0-9]+`). One trailing LF after the final
//! row is canonical and accepted; a missing final LF is tolerated. Blank
//! lines, trailing separators, malformed cells, and ragged rows are all
//! rejected with positioned errors.
//!
//! Within each line the checks run in a fixed order: blank line, trailing
//! separator, cell validity left to right, cell count against the first row.

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;
use memchr::memchr_iter;

/// Parse tab-separated text into a validated matrix.
///
/// Operates on raw bytes: cells that are not valid UTF-8 are reported as
/// invalid elements (with a lossy rendering of the bytes) rather than
/// aborting the whole parse with an encoding error.
///
/// # Arguments
///
/// * `input` - The complete input, as read from a file or stdin.
///
/// # Errors
///
/// - [`MatrixError::EmptyInput`] for zero-byte input.
/// - [`MatrixError::BlankLine`] for an empty or whitespace-only line,
///   including the blank line left by a doubled final terminator.
/// - [`MatrixError::TrailingSeparator`] when a line ends with a tab.
/// - [`MatrixError::InvalidElement`] for a cell that is not a base-10
///   integer representable in 64 bits.
/// - [`MatrixError::RaggedMatrix`] when a row's cell count differs from the
///   first row's.
///
/// # Examples
///
/// ```
/// use tabmat_core::parse;
///
/// let m = parse(b"1\t2\n3\t4\n").unwrap();
/// assert_eq!(m.dims(), (2, 2));
/// assert_eq!(m.get(1, 0), Some(3));
/// ```
pub fn parse(input: &[u8]) -> MatrixResult<Matrix> {
    if input.is_empty() {
        return Err(MatrixError::EmptyInput);
    }

    // One trailing LF terminates the final row; anything beyond it shows up
    // as a blank line below.
    let body = input.strip_suffix(b"\n").unwrap_or(input);

    // Every cell spans at least two input bytes counting its separator.
    let mut data: Vec<i64> = Vec::with_capacity(body.len() / 2 + 1);
    let mut cols = 0usize;
    let mut rows = 0usize;

    let mut start = 0;
    let mut line_num = 1;
    for nl in memchr_iter(b'\n', body) {
        parse_row(&body[start..nl], line_num, &mut cols, &mut data)?;
        rows += 1;
        start = nl + 1;
        line_num += 1;
    }
    // Final line (its terminator was stripped above, if present)
    parse_row(&body[start..], line_num, &mut cols, &mut data)?;
    rows += 1;

    Ok(Matrix::from_parts(rows, cols, data))
}

/// Validate one line and append its cells to `data`.
///
/// `cols` is 0 until the first row has been parsed; the first row fixes the
/// expected cell count for the rest of the input.
fn parse_row(
    line: &[u8],
    line_num: usize,
    cols: &mut usize,
    data: &mut Vec<i64>,
) -> MatrixResult<()> {
    if is_blank_line(line) {
        return Err(MatrixError::BlankLine { line: line_num });
    }
    if line.ends_with(b"\t") {
        return Err(MatrixError::TrailingSeparator { line: line_num });
    }

    let mut count = 0;
    for (index, cell) in line.split(|&b| b == b'\t').enumerate() {
        data.push(parse_element(cell, line_num, index + 1)?);
        count += 1;
    }

    if *cols == 0 {
        *cols = count;
    } else if count != *cols {
        return Err(MatrixError::RaggedMatrix {
            expected: *cols,
            found: count,
            line: line_num,
        });
    }
    Ok(())
}

/// Parse a single cell as a base-10 `i64`.
///
/// `column` is the 1-based cell position within the row.
fn parse_element(cell: &[u8], line: usize, column: usize) -> MatrixResult<i64> {
    let invalid = || MatrixError::InvalidElement {
        token: String::from_utf8_lossy(cell).into_owned(),
        line,
        column,
    };

    if !is_integer_literal(cell) {
        return Err(invalid());
    }
    // Shape-valid literals can still exceed the i64 range.
    std::str::from_utf8(cell)
        .ok()
        .and_then(|text| text.parse::<i64>().ok())
        .ok_or_else(invalid)
}

/// Check the cell grammar: optional leading minus, then one or more ASCII
/// digits. No plus sign, no whitespace, no decimal point.
#[inline]
fn is_integer_literal(cell: &[u8]) -> bool {
    let digits = match cell {
        [b'-', rest @ ..] => rest,
        _ => cell,
    };
    !digits.is_empty() && digits.iter().all(|b| b.is_ascii_digit())
}

/// A line is blank if it is empty or contains only whitespace.
#[inline]
fn is_blank_line(line: &[u8]) -> bool {
    line.iter().all(|b| b.is_ascii_whitespace())
}
