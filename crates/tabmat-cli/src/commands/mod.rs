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

//! CLI command implementations.

mod binary;
mod unary;

pub use binary::{add, multiply};
pub use unary::{dims, mean, transpose};

use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};
use tabmat_core::Matrix;

/// Default maximum input size to prevent memory exhaustion (1 GB).
/// Can be overridden via the TABMAT_MAX_INPUT_SIZE environment variable.
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 1024 * 1024 * 1024;

/// Get the maximum input size from the environment or use the default.
fn get_max_input_size() -> u64 {
    std::env::var("TABMAT_MAX_INPUT_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_INPUT_SIZE)
}

/// Read a file from disk with size validation.
///
/// The file size is checked against the configured limit before any
/// allocation, so an oversized file is rejected without reading it.
///
/// # Errors
///
/// - [`CliError::Io`] if the metadata or contents cannot be read.
/// - [`CliError::FileTooLarge`] if the file exceeds the limit.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_input_size = get_max_input_size();
    if metadata.len() > max_input_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_input_size));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read all of standard input into memory, capped at the configured limit.
///
/// Reads at most one byte past the limit so that oversized input is
/// detected without buffering it whole. The buffer lives only as long as
/// the command that requested it.
///
/// # Errors
///
/// - [`CliError::Stdin`] if reading fails.
/// - [`CliError::InputTooLarge`] if stdin exceeds the limit.
pub fn read_stdin() -> Result<Vec<u8>, CliError> {
    let max_input_size = get_max_input_size();
    let mut buffer = Vec::new();
    io::stdin()
        .lock()
        .take(max_input_size + 1)
        .read_to_end(&mut buffer)
        .map_err(CliError::stdin_error)?;

    if buffer.len() as u64 > max_input_size {
        return Err(CliError::InputTooLarge { max: max_input_size });
    }
    Ok(buffer)
}

/// Read a matrix source: a file when a path is given, stdin otherwise.
pub fn read_source(path: Option<&str>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(p) => read_file(p),
        None => read_stdin(),
    }
}

/// Label for error messages: the file path, or `<stdin>`.
fn source_label(path: Option<&str>) -> &str {
    path.unwrap_or("<stdin>")
}

/// Read and parse one matrix, labeling parse errors with their source.
pub(crate) fn load_matrix(path: Option<&str>) -> Result<Matrix, CliError> {
    let input = read_source(path)?;
    tabmat_core::parse(&input).map_err(|e| CliError::parse(source_label(path), e))
}

/// Read and parse one matrix from a file path.
pub(crate) fn load_matrix_file(path: &str) -> Result<Matrix, CliError> {
    load_matrix(Some(path))
}

/// Write a fully-computed result to stdout.
///
/// Commands call this exactly once, after parsing and the operation have
/// both succeeded, so failures never leave partial output behind.
pub fn write_output(content: &str) -> Result<(), CliError> {
    io::stdout()
        .write_all(content.as_bytes())
        .map_err(CliError::stdout_error)
}
