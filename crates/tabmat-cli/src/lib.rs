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

//! TabMat CLI library for command-line parsing and execution.
//!
//! The binary is a thin dispatcher over `tabmat-core`: every command reads
//! whole inputs (file or stdin), parses them strictly, runs one operation,
//! and prints the result to stdout in canonical tab-separated form.
//!
//! # Commands
//!
//! - **dims**: print `rows cols` for a matrix
//! - **transpose**: print the transposed matrix
//! - **mean**: print the column means as a single row
//! - **add**: print the element-wise sum of two matrix files
//! - **multiply**: print the matrix product of two matrix files
//!
//! `dims`, `transpose`, and `mean` read stdin when no file is given; `add`
//! and `multiply` always take exactly two file paths.
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Failures are reported as a
//! single diagnostic line on stderr with a nonzero exit code, and nothing is
//! written to stdout — output appears only after the whole pipeline has
//! succeeded.
//!
//! # Security
//!
//! Input size is capped (default 1 GB, configurable via
//! `TABMAT_MAX_INPUT_SIZE`) before any allocation, for files and stdin both.

pub mod cli;
pub mod commands;
pub mod error;
