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

//! Error types for benchmark log parsing.

use std::io;
use thiserror::Error;

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, ParseError>;

/// An error produced while splitting or parsing a benchmark log.
///
/// A [`ResultRecord`](crate::ResultRecord) is never partially populated: the
/// first missing field, unparsable value, or malformed matrix row aborts the
/// parse of that block with one of these variants. Unknown read/write-mix or
/// hugepage-size codes are *not* errors; they degrade to fallback labels (see
/// [`ReadWriteMix`](crate::ReadWriteMix) and
/// [`HugepageSize`](crate::HugepageSize)), since that is cosmetic labeling,
/// not data loss.
///
/// # Examples
///
/// ```
/// use numabench_core::ParseError;
///
/// let err = ParseError::MissingField { field: "threads" };
/// assert_eq!(err.to_string(), "missing required field 'threads'");
///
/// let err = err.at_block(3);
/// assert_eq!(err.to_string(), "block 3: missing required field 'threads'");
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// A scalar label required by the benchmark kind is absent from the block.
    #[error("missing required field '{field}'")]
    MissingField {
        /// The label that was not found.
        field: &'static str,
    },

    /// A scalar label was found but its value failed to parse as the declared
    /// type.
    #[error("invalid value for field '{field}': expected {expected}, got '{value}'")]
    InvalidField {
        /// The label whose value was rejected.
        field: &'static str,
        /// Human-readable description of the declared type.
        expected: &'static str,
        /// The offending value text.
        value: String,
    },

    /// The matrix section is missing, empty, non-square, or contains a row
    /// with the wrong column count or a non-numeric value token.
    #[error("malformed matrix at row {row}: {message}")]
    MalformedMatrix {
        /// 0-based index of the offending matrix row.
        row: usize,
        /// Detailed description of the violation.
        message: String,
    },

    /// Reading the log file failed.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        /// The file path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Wraps another parse error with the 0-based position of the block in
    /// the log file, so a human can locate the failure in the raw text.
    #[error("block {block}: {source}")]
    InBlock {
        /// 0-based block position in the log file.
        block: usize,
        /// The underlying parse error.
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the 0-based block index to this error.
    ///
    /// Idempotent: an error that already carries a block index is returned
    /// unchanged, so callers at different layers can apply context without
    /// coordinating.
    pub fn at_block(self, block: usize) -> Self {
        match self {
            ParseError::InBlock { .. } => self,
            other => ParseError::InBlock {
                block,
                source: Box::new(other),
            },
        }
    }

    /// The block index attached via [`at_block`](Self::at_block), if any.
    pub fn block(&self) -> Option<usize> {
        match self {
            ParseError::InBlock { block, .. } => Some(*block),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_block_is_idempotent() {
        let err = ParseError::MissingField { field: "threads" }
            .at_block(2)
            .at_block(7);
        assert_eq!(err.block(), Some(2));
        assert_eq!(err.to_string(), "block 2: missing required field 'threads'");
    }

    #[test]
    fn plain_errors_carry_no_block() {
        let err = ParseError::InvalidField {
            field: "threads",
            expected: "integer",
            value: "abc".to_string(),
        };
        assert_eq!(err.block(), None);
    }
}
