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

//! Error types for reshaping and chart rendering.

use thiserror::Error;

/// Convenience alias used throughout the chart crate.
pub type Result<T> = std::result::Result<T, ChartError>;

/// An error produced while reshaping records or rendering a chart.
///
/// # Examples
///
/// ```
/// use numabench_chart::ChartError;
///
/// let err = ChartError::TopologyMismatch {
///     record: 1,
///     expected: 2,
///     found: 3,
/// };
/// assert_eq!(
///     err.to_string(),
///     "record 1 reports 3 nodes but the batch started with 2"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ChartError {
    /// A reshape batch contained no records.
    #[error("cannot reshape an empty batch of records")]
    EmptyBatch,

    /// Records in one reshape batch disagree on node count. A single
    /// mismatch invalidates the whole comparison, so the batch is aborted
    /// rather than truncated.
    #[error("record {record} reports {found} nodes but the batch started with {expected}")]
    TopologyMismatch {
        /// 0-based index of the offending record in the batch.
        record: usize,
        /// Node count established by the first record.
        expected: usize,
        /// Node count the offending record reports.
        found: usize,
    },

    /// The plotting backend failed to draw or persist the chart.
    #[error("chart rendering failed: {0}")]
    Render(String),
}
