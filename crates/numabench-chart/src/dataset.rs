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

//! Reshaping a batch of result records into a grouped dataset.

use crate::error::{ChartError, Result};
use numabench_core::ResultRecord;

/// A grouped dataset ready for bar-chart rendering.
///
/// One group per (source node, destination node) pair in row-major order,
/// one column per input record. `values[k][c]` is record `c`'s measurement
/// for pair `k`, where `k = i * node_count + j`. Immutable after
/// construction; the ordering is the contract the renderer relies on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dataset {
    group_labels: Vec<String>,
    column_labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl Dataset {
    /// `"i-j"` labels, one per node pair, row-major (source node outer).
    pub fn group_labels(&self) -> &[String] {
        &self.group_labels
    }

    /// One label per input record, from the record's distinguishing field.
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// `values[k][c]`: the measurement of record `c` at node pair `k`.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }
}

/// Pivot an ordered batch of same-topology records into a [`Dataset`].
///
/// Column `c` takes records[c]'s series label (hugepage size for idle
/// latency, read/write mix otherwise); group `i * node_count + j` takes the
/// value `records[c].matrix().get(i, j)`. A pure pivot: no aggregation, and
/// deterministic for a given input order.
///
/// # Errors
///
/// [`ChartError::EmptyBatch`] for an empty slice;
/// [`ChartError::TopologyMismatch`] if any record disagrees with the first
/// record's node count.
///
/// # Examples
///
/// ```
/// use numabench_chart::reshape;
/// use numabench_core::{parse, BenchmarkKind, RawBlock};
///
/// let block = RawBlock::new(0, "\
/// threads:           1
/// region size in KB: 1024
/// chunk size in KB:  64
/// stride size in B:  64
/// access pattern:    0 - sequential
/// use hugepage:      0
/// target duration:   2
/// Idle Latency (ns)  Node-0  Node-1
/// Node-0             78.59   120.3
/// Node-1             119.8   80.99
/// ");
/// let record = parse(&block, BenchmarkKind::IdleLatency)?;
/// let dataset = reshape(&[record])?;
/// assert_eq!(dataset.group_labels(), ["0-0", "0-1", "1-0", "1-1"]);
/// assert_eq!(dataset.column_labels(), ["4KB"]);
/// assert_eq!(dataset.values()[1], [120.3]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn reshape(records: &[ResultRecord]) -> Result<Dataset> {
    let first = records.first().ok_or(ChartError::EmptyBatch)?;
    let nodes = first.node_count();
    for (record, r) in records.iter().enumerate().skip(1) {
        if r.node_count() != nodes {
            return Err(ChartError::TopologyMismatch {
                record,
                expected: nodes,
                found: r.node_count(),
            });
        }
    }

    let column_labels = records
        .iter()
        .map(|r| r.series_label().to_string())
        .collect();

    let mut group_labels = Vec::with_capacity(nodes * nodes);
    let mut values = Vec::with_capacity(nodes * nodes);
    for i in 0..nodes {
        for j in 0..nodes {
            group_labels.push(format!("{i}-{j}"));
            values.push(records.iter().map(|r| r.matrix().get(i, j)).collect());
        }
    }

    Ok(Dataset {
        group_labels,
        column_labels,
        values,
    })
}
