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

//! End-to-end tests through the public API: parse, operate, render.
//!
//! Each scenario runs the full pipeline and checks exact output bytes, the
//! way the CLI consumes the crate.

use tabmat_core::{
    add, mean, multiply, parse, render, render_dims, transpose, Matrix, MatrixError,
};

// =============================================================================
// Full pipelines with exact output
// =============================================================================

#[test]
fn test_dims_pipeline() {
    let m = parse(b"1\t2\n3\t4\n").unwrap();
    assert_eq!(render_dims(&m), "2 2\n");

    let wide = parse(b"1\t2\t3\n").unwrap();
    assert_eq!(render_dims(&wide), "1 3\n");

    let tall = parse(b"1\n2\n3\n").unwrap();
    assert_eq!(render_dims(&tall), "3 1\n");
}

#[test]
fn test_transpose_pipeline() {
    let m = parse(b"1\t2\n3\t4\n").unwrap();
    assert_eq!(render(&transpose(&m)), "1\t3\n2\t4\n");
}

#[test]
fn test_transpose_pipeline_rectangular() {
    let m = parse(b"1\t2\t3\n4\t5\t6\n").unwrap();
    assert_eq!(render(&transpose(&m)), "1\t4\n2\t5\n3\t6\n");
}

#[test]
fn test_mean_pipeline() {
    // Column sums 5 and -5 over two rows: 2.5 -> 3, -2.5 -> -3.
    let m = parse(b"1\t-1\n4\t-4\n").unwrap();
    assert_eq!(render(&mean(&m).unwrap()), "3\t-3\n");
}

#[test]
fn test_mean_pipeline_exact_division() {
    let m = parse(b"2\t10\n4\t20\n").unwrap();
    assert_eq!(render(&mean(&m).unwrap()), "3\t15\n");
}

#[test]
fn test_add_pipeline() {
    let a = parse(b"1\t2\n3\t4\n").unwrap();
    let b = parse(b"10\t20\n30\t40\n").unwrap();
    assert_eq!(render(&add(&a, &b).unwrap()), "11\t22\n33\t44\n");
}

#[test]
fn test_multiply_pipeline() {
    let a = parse(b"1\t2\n3\t4\n").unwrap();
    let b = parse(b"5\t6\n7\t8\n").unwrap();
    assert_eq!(render(&multiply(&a, &b).unwrap()), "19\t22\n43\t50\n");
}

#[test]
fn test_multiply_pipeline_rectangular() {
    // 2x3 times 3x2 gives 2x2.
    let a = parse(b"1\t2\t3\n4\t5\t6\n").unwrap();
    let b = parse(b"7\t8\n9\t10\n11\t12\n").unwrap();
    let product = multiply(&a, &b).unwrap();
    assert_eq!(render_dims(&product), "2 2\n");
    assert_eq!(render(&product), "58\t64\n139\t154\n");
}

// =============================================================================
// Vector shapes through every operation
// =============================================================================

#[test]
fn test_row_vector_operations() {
    let row = parse(b"1\t2\t3\n").unwrap();

    assert_eq!(render_dims(&row), "1 3\n");
    assert_eq!(render(&transpose(&row)), "1\n2\n3\n");
    assert_eq!(render(&mean(&row).unwrap()), "1\t2\t3\n");
    assert_eq!(render(&add(&row, &row).unwrap()), "2\t4\t6\n");

    let col = parse(b"4\n5\n6\n").unwrap();
    assert_eq!(render(&multiply(&row, &col).unwrap()), "32\n");
}

#[test]
fn test_single_cell_operations() {
    let m = parse(b"5\n").unwrap();
    assert_eq!(render_dims(&m), "1 1\n");
    assert_eq!(render(&transpose(&m)), "5\n");
    assert_eq!(render(&mean(&m).unwrap()), "5\n");
    assert_eq!(render(&add(&m, &m).unwrap()), "10\n");
    assert_eq!(render(&multiply(&m, &m).unwrap()), "25\n");
}

// =============================================================================
// Input tolerance and canonicalization
// =============================================================================

#[test]
fn test_missing_final_terminator_tolerated() {
    let with = parse(b"1\t2\n3\t4\n").unwrap();
    let without = parse(b"1\t2\n3\t4").unwrap();
    assert_eq!(with, without);
    assert_eq!(render(&without), "1\t2\n3\t4\n");
}

#[test]
fn test_noncanonical_cells_render_canonically() {
    // The plus sign is rejected outright...
    let err = parse(b"007\t-0\n+0\t1\n").unwrap_err();
    assert!(matches!(err, MatrixError::InvalidElement { .. }));

    // ...while leading zeros and -0 are accepted and re-rendered canonically.
    let m = parse(b"007\t-0\n").unwrap();
    assert_eq!(render(&m), "7\t0\n");
}

#[test]
fn test_parse_equivalence_of_cell_spellings() {
    let a = parse(b"7\t0\n").unwrap();
    let b = parse(b"007\t-0\n").unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Errors surfaced through the public API
// =============================================================================

#[test]
fn test_error_empty_input() {
    assert_eq!(parse(b"").unwrap_err(), MatrixError::EmptyInput);
}

#[test]
fn test_error_blank_line_reports_line() {
    let err = parse(b"1\n\n2\n").unwrap_err();
    assert_eq!(err, MatrixError::BlankLine { line: 2 });
    assert_eq!(err.line(), Some(2));
    assert!(err.is_parse_error());
}

#[test]
fn test_error_trailing_separator_reports_line() {
    let err = parse(b"1\t2\t\n").unwrap_err();
    assert_eq!(err, MatrixError::TrailingSeparator { line: 1 });
}

#[test]
fn test_error_invalid_element_reports_position() {
    let err = parse(b"1\t2\n3\tx\n").unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidElement {
            token: "x".to_string(),
            line: 2,
            column: 2,
        }
    );
}

#[test]
fn test_error_ragged_matrix_reports_shape() {
    let err = parse(b"1\t2\t3\n4\t5\n").unwrap_err();
    assert_eq!(
        err,
        MatrixError::RaggedMatrix {
            expected: 3,
            found: 2,
            line: 2,
        }
    );
}

#[test]
fn test_error_add_mismatch_carries_both_shapes() {
    let a = parse(b"1\t2\n").unwrap();
    let b = parse(b"1\n2\n").unwrap();
    let err = add(&a, &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            op: "add".to_string(),
            left_rows: 1,
            left_cols: 2,
            right_rows: 2,
            right_cols: 1,
        }
    );
    assert!(!err.is_parse_error());
}

#[test]
fn test_error_multiply_mismatch() {
    let a = parse(b"1\t2\n").unwrap();
    let b = parse(b"1\t2\n").unwrap();
    let err = multiply(&a, &b).unwrap_err();
    assert!(matches!(err, MatrixError::DimensionMismatch { ref op, .. } if op == "multiply"));
}

#[test]
fn test_error_display_is_single_line() {
    let errors = vec![
        parse(b"").unwrap_err(),
        parse(b"\n").unwrap_err(),
        parse(b"1\t\n").unwrap_err(),
        parse(b"a\n").unwrap_err(),
        parse(b"1\t2\n3\n").unwrap_err(),
    ];
    for err in errors {
        let msg = format!("{}", err);
        assert!(!msg.is_empty());
        assert!(!msg.contains('\n'), "multi-line message: {:?}", msg);
    }
}

// =============================================================================
// Library constructor interop
// =============================================================================

#[test]
fn test_from_rows_matches_parse() {
    let built = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let parsed = parse(b"1\t2\n3\t4\n").unwrap();
    assert_eq!(built, parsed);
    assert_eq!(render(&built), render(&parsed));
}

#[test]
fn test_larger_pipeline_identity_multiply() {
    let m = parse(b"1\t2\t3\n4\t5\t6\n7\t8\t9\n").unwrap();
    let identity = parse(b"1\t0\t0\n0\t1\t0\n0\t0\t1\n").unwrap();
    assert_eq!(multiply(&m, &identity).unwrap(), m);
    assert_eq!(multiply(&identity, &m).unwrap(), m);
}
