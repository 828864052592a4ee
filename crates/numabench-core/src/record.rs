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

//! The typed result record produced by parsing one benchmark block.

use crate::kind::BenchmarkKind;
use crate::labels::{HugepageSize, ReadWriteMix};
use crate::matrix::NodeMatrix;
use std::collections::BTreeMap;

/// A typed scalar value extracted from a benchmark block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// An integer field such as `threads` or `region size in KB`.
    Int(i64),
    /// A free-text field such as `access pattern`.
    Text(String),
}

impl FieldValue {
    /// The integer value, if this is an [`Int`](Self::Int) field.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }

    /// The text value, if this is a [`Text`](Self::Text) field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            FieldValue::Int(_) => None,
        }
    }
}

/// One parsed benchmark result: the configuration scalars of a block plus
/// its measurement matrix.
///
/// Constructed only by [`parse`](crate::parse) and immutable thereafter.
/// Every field of the kind's table is present and typed; a record is never
/// partially populated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultRecord {
    kind: BenchmarkKind,
    fields: BTreeMap<&'static str, FieldValue>,
    matrix: NodeMatrix,
}

impl ResultRecord {
    pub(crate) fn new(
        kind: BenchmarkKind,
        fields: BTreeMap<&'static str, FieldValue>,
        matrix: NodeMatrix,
    ) -> Self {
        Self {
            kind,
            fields,
            matrix,
        }
    }

    /// The benchmark kind this record was parsed as.
    pub fn kind(&self) -> BenchmarkKind {
        self.kind
    }

    /// Look up a scalar field by its label.
    pub fn field(&self, label: &str) -> Option<&FieldValue> {
        self.fields.get(label)
    }

    /// Look up an integer field by its label.
    pub fn int_field(&self, label: &str) -> Option<i64> {
        self.field(label).and_then(FieldValue::as_int)
    }

    /// The measurement matrix.
    pub fn matrix(&self) -> &NodeMatrix {
        &self.matrix
    }

    /// Node count of the measurement matrix.
    pub fn node_count(&self) -> usize {
        self.matrix.node_count()
    }

    /// The decoded label of this record's distinguishing field, used as the
    /// chart column label: the hugepage-size label for idle latency, the
    /// read/write-mix label for bandwidth and loaded latency.
    pub fn series_label(&self) -> &'static str {
        // The series field is in the kind's table, so it is present by
        // construction; -1 hits the enum fallback arm if that ever changes.
        let code = self.int_field(self.kind.series_field()).unwrap_or(-1);
        match self.kind {
            BenchmarkKind::IdleLatency => HugepageSize::from_code(code).label(),
            BenchmarkKind::Bandwidth | BenchmarkKind::LoadedLatency => {
                ReadWriteMix::from_code(code).label()
            }
        }
    }
}
