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

//! Structured error types for the TabMat CLI.
//!
//! All CLI operations return `Result<T, CliError>`; `main` renders the error
//! once, as a single line on stderr. Parse failures are labeled with the
//! input they came from (a file path or `<stdin>`), operation failures pass
//! the core error through unchanged.

use std::io;
use std::path::PathBuf;
use tabmat_core::MatrixError;
use thiserror::Error;

/// The main error type for TabMat CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Reading standard input failed.
    #[error("failed to read stdin: {message}")]
    Stdin {
        /// The error message
        message: String,
    },

    /// Writing the result to standard output failed.
    #[error("failed to write to stdout: {message}")]
    Stdout {
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    ///
    /// This prevents memory exhaustion from oversized inputs; the limit is
    /// checked before any allocation.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB); set TABMAT_MAX_INPUT_SIZE to raise the limit")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed input size in bytes
        max: u64,
        /// The maximum allowed input size in MB (for display)
        max_mb: u64,
    },

    /// Standard input exceeded the configured limit.
    #[error("stdin input is too large. Maximum allowed: {max} bytes; set TABMAT_MAX_INPUT_SIZE to raise the limit")]
    InputTooLarge {
        /// The maximum allowed input size in bytes
        max: u64,
    },

    /// A matrix failed to parse, labeled with the input it came from.
    #[error("{input}: {source}")]
    Parse {
        /// The input label: a file path, or `<stdin>`
        input: String,
        /// The underlying parse error
        source: MatrixError,
    },

    /// An operation failed after parsing (dimension mismatch or overflow).
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a stdin read error.
    pub fn stdin_error(source: io::Error) -> Self {
        Self::Stdin {
            message: source.to_string(),
        }
    }

    /// Create a stdout write error.
    pub fn stdout_error(source: io::Error) -> Self {
        Self::Stdout {
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a parse error labeled with its input.
    pub fn parse(input: impl Into<String>, source: MatrixError) -> Self {
        Self::Parse {
            input: input.into(),
            source,
        }
    }
}
