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

//! Parsing one raw block into a typed result record.
//!
//! A block is semi-structured text: labeled scalar lines (`threads:   1`)
//! followed by a matrix section headed by a kind-specific title line and
//! one `Node-i  v0 v1 ...` row per source node. The parser extracts every
//! scalar the kind's field table declares, then the matrix, and fails fast
//! with a named field or row on the first violation.

use crate::blocks::RawBlock;
use crate::error::{ParseError, Result};
use crate::kind::{BenchmarkKind, FieldSpec, FieldType};
use crate::matrix::NodeMatrix;
use crate::record::{FieldValue, ResultRecord};
use std::collections::BTreeMap;

/// Prefix of a source-node label in a matrix row.
const NODE_PREFIX: &str = "Node-";

/// Parse one raw block as the given benchmark kind.
///
/// Extracts every scalar field the kind's table declares, then the
/// measurement matrix below the kind's title marker. The returned record is
/// fully populated; any missing or malformed piece aborts the parse with an
/// error naming the field or row. Callers that know the block's file
/// position attach it with [`ParseError::at_block`].
///
/// Node indices are assigned by row order of appearance, and destination
/// column order is trusted to match the header's node ordering; header node
/// labels are not re-validated.
///
/// # Examples
///
/// ```
/// use numabench_core::{parse, BenchmarkKind, RawBlock};
///
/// let block = RawBlock::new(0, "\
/// threads:           1
/// region size in KB: 524288
/// chunk size in KB:  128
/// stride size in B:  128
/// access pattern:    1 - random in chunk
/// use hugepage:      0 - No huge page
/// target duration:   2
/// Idle Latency (ns) - RandomInChunk       Node-0    Node-1
/// Node-0                                  78.59     120.3
/// Node-1                                  119.8     80.99
/// ");
/// let record = parse(&block, BenchmarkKind::IdleLatency)?;
/// assert_eq!(record.node_count(), 2);
/// assert_eq!(record.int_field("threads"), Some(1));
/// assert_eq!(record.series_label(), "4KB");
/// assert_eq!(record.matrix().get(0, 1), 120.3);
/// # Ok::<(), numabench_core::ParseError>(())
/// ```
pub fn parse(block: &RawBlock, kind: BenchmarkKind) -> Result<ResultRecord> {
    let text = block.text();
    let mut fields = BTreeMap::new();
    for spec in kind.fields() {
        fields.insert(spec.label, extract_scalar(text, spec)?);
    }
    let matrix = extract_matrix(text, kind.matrix_marker())?;
    Ok(ResultRecord::new(kind, fields, matrix))
}

/// Find the first line carrying `label:` and parse the remainder as the
/// declared type.
fn extract_scalar(text: &str, spec: &FieldSpec) -> Result<FieldValue> {
    let needle = format!("{}:", spec.label);
    let Some(rest) = text
        .lines()
        .find_map(|line| line.find(&needle).map(|pos| line[pos + needle.len()..].trim()))
    else {
        return Err(ParseError::MissingField { field: spec.label });
    };
    match spec.ty {
        FieldType::Text => {
            if rest.is_empty() {
                Err(ParseError::InvalidField {
                    field: spec.label,
                    expected: "non-empty text",
                    value: rest.to_string(),
                })
            } else {
                Ok(FieldValue::Text(rest.to_string()))
            }
        }
        FieldType::Int => {
            let token = rest.split_whitespace().next().unwrap_or("");
            token
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| ParseError::InvalidField {
                    field: spec.label,
                    expected: "integer",
                    value: rest.to_string(),
                })
        }
    }
}

/// Extract the matrix section below the line containing `marker`.
///
/// The first `Node-` row fixes the destination column count; every further
/// `Node-` row must match it exactly, and scanning stops at the first line
/// that is not a matrix row. The collected rows must form a square matrix.
fn extract_matrix(text: &str, marker: &str) -> Result<NodeMatrix> {
    let mut lines = text.lines();
    if !lines.by_ref().any(|line| line.contains(marker)) {
        return Err(ParseError::MalformedMatrix {
            row: 0,
            message: format!("matrix section '{marker}' not found"),
        });
    }

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width = 0usize;
    for line in lines {
        let mut tokens = line.split_whitespace().peekable();
        let is_row = tokens.peek().is_some_and(|t| t.starts_with(NODE_PREFIX));
        if !is_row {
            if rows.is_empty() {
                // Tolerate blank or header lines between the title and the
                // first row.
                continue;
            }
            break;
        }
        tokens.next();
        let values = parse_row_values(tokens, rows.len())?;
        if rows.is_empty() {
            if values.is_empty() {
                return Err(ParseError::MalformedMatrix {
                    row: 0,
                    message: "matrix row has no destination columns".to_string(),
                });
            }
            width = values.len();
        } else if values.len() != width {
            return Err(ParseError::MalformedMatrix {
                row: rows.len(),
                message: format!("expected {} columns, found {}", width, values.len()),
            });
        }
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(ParseError::MalformedMatrix {
            row: 0,
            message: format!("no matrix rows after '{marker}'"),
        });
    }
    if rows.len() != width {
        return Err(ParseError::MalformedMatrix {
            row: rows.len(),
            message: format!("matrix has {} columns but {} rows", width, rows.len()),
        });
    }
    NodeMatrix::from_rows(rows)
}

fn parse_row_values<'a>(
    tokens: impl Iterator<Item = &'a str>,
    row: usize,
) -> Result<Vec<f64>> {
    tokens
        .map(|token| {
            token.parse::<f64>().map_err(|_| ParseError::MalformedMatrix {
                row,
                message: format!("non-numeric value '{token}'"),
            })
        })
        .collect()
}
