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

//! Parser, matrix model, and operations for tab-separated integer matrices.
//!
//! Input is plain text: one row per line, cells separated by single tabs,
//! each cell a base-10 signed 64-bit integer. Parsing is strict — blank
//! lines, trailing separators, malformed cells, and ragged rows are rejected
//! with positioned [`MatrixError`]s. The validated [`Matrix`] is a dense
//! row-major structure that the operations index directly.
//!
//! # Example
//!
//! ```
//! use tabmat_core::{multiply, parse, render};
//!
//! let a = parse(b"1\t2\n3\t4\n").unwrap();
//! let b = parse(b"5\t6\n7\t8\n").unwrap();
//! let product = multiply(&a, &b).unwrap();
//! assert_eq!(render(&product), "19\t22\n43\t50\n");
//! ```

mod error;
mod matrix;
mod ops;
mod parser;
mod writer;

pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix;
pub use ops::{add, mean, multiply, transpose};
pub use parser::parse;
pub use writer::{render, render_dims};
