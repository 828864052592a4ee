// numabench - NUMA memory microbenchmark reporting toolkit
//
// Copyright (c) 2026 numabench contributors.
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

//! Structured error types for the numabench CLI.

use numabench_chart::ChartError;
use numabench_core::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for numabench CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// A benchmark block failed to parse; carries the block index and the
    /// offending field or row.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Reshaping or rendering failed.
    #[error("{0}")]
    Chart(#[from] ChartError),

    /// Serializing records to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing an output file failed.
    #[error("cannot write '{path}': {message}")]
    Write {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// The log file contained no `[start]`/`[end]` delimited blocks.
    #[error("'{path}': no benchmark blocks found")]
    EmptyLog {
        /// The log file path.
        path: PathBuf,
    },

    /// One or more blocks failed validation.
    #[error("'{path}': {failed} of {total} blocks failed to parse")]
    ValidationFailed {
        /// The log file path.
        path: PathBuf,
        /// Number of blocks that failed.
        failed: usize,
        /// Total number of blocks in the file.
        total: usize,
    },
}
