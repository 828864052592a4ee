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

//! The per-node-pair measurement matrix.

use crate::error::{ParseError, Result};
use std::fmt::Write as _;

/// A square matrix of measurements indexed by (source node, destination node).
///
/// Stored dense and row-major, indexed by validated integer node indices in
/// `0..node_count()` rather than `"Node-0"` string keys. The node count is
/// discovered from the parsed rows and is always at least 1. Constructed only
/// by the record parser from validated rows; immutable thereafter.
///
/// Equality is element-wise plus equal node count, which is what the textual
/// round-trip tests rely on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeMatrix {
    nodes: usize,
    values: Vec<f64>,
}

impl NodeMatrix {
    /// Build a matrix from parsed rows, validating squareness.
    ///
    /// Row count and every row's column count must all be equal and nonzero.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nodes = rows.len();
        if nodes == 0 {
            return Err(ParseError::MalformedMatrix {
                row: 0,
                message: "no matrix rows".to_string(),
            });
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != nodes {
                return Err(ParseError::MalformedMatrix {
                    row,
                    message: format!(
                        "expected {} columns for a {0}x{0} matrix, found {}",
                        nodes,
                        values.len()
                    ),
                });
            }
        }
        Ok(Self {
            nodes,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of nodes; the matrix is `node_count() x node_count()`.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// The measurement from source node `i` to destination node `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`node_count`](Self::node_count).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.nodes && j < self.nodes, "node index out of range");
        self.values[i * self.nodes + j]
    }

    /// Iterate over the matrix rows in source-node order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.nodes)
    }

    /// Render the matrix back to the benchmark's textual row form,
    /// `Node-i  v0  v1 ...`, one line per source node.
    ///
    /// Values are formatted with `f64`'s shortest round-trippable
    /// representation, so re-parsing the output yields an equal matrix.
    pub fn to_rows(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.rows().enumerate() {
            let _ = write!(out, "Node-{i}");
            for v in row {
                let _ = write!(out, "  {v}");
            }
            out.push('\n');
        }
        out
    }
}
