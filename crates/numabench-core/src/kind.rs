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

//! Benchmark kinds and their per-kind parsing tables.
//!
//! Each kind declares the scalar fields its blocks must contain, the title
//! line that heads its matrix section, and which field distinguishes records
//! within a comparison batch. The record parser is one algorithm driven by
//! these tables rather than one near-duplicate function per kind.

/// Declared type of a scalar field in a benchmark block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// An integer; parsed from the first whitespace-delimited token after the
    /// label, so trailing descriptive text (`0 - No huge page`) is tolerated.
    Int,
    /// Free text; the trimmed remainder of the line after the label.
    Text,
}

/// One required scalar field of a benchmark kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// The label as it appears in the block, without the trailing colon.
    pub label: &'static str,
    /// The declared value type.
    pub ty: FieldType,
}

const fn field(label: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec { label, ty }
}

const IDLE_LATENCY_FIELDS: &[FieldSpec] = &[
    field("threads", FieldType::Int),
    field("region size in KB", FieldType::Int),
    field("chunk size in KB", FieldType::Int),
    field("stride size in B", FieldType::Int),
    field("access pattern", FieldType::Text),
    field("use hugepage", FieldType::Int),
    field("target duration", FieldType::Int),
];

const BANDWIDTH_FIELDS: &[FieldSpec] = &[
    field("threads", FieldType::Int),
    field("region size in KB", FieldType::Int),
    field("read/write mix", FieldType::Int),
    field("target duration", FieldType::Int),
];

/// The kind of microbenchmark a block reports.
///
/// Determines the required scalar fields, the matrix title marker, and the
/// distinguishing field used for chart column labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BenchmarkKind {
    /// Unloaded memory access latency between node pairs, in nanoseconds.
    IdleLatency,
    /// Peak sustained throughput between node pairs, in GB/s.
    Bandwidth,
    /// Latency under concurrent bandwidth load. Shares the bandwidth field
    /// table; the benchmark reports the same configuration scalars.
    LoadedLatency,
}

impl BenchmarkKind {
    /// The scalar fields every block of this kind must contain.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            BenchmarkKind::IdleLatency => IDLE_LATENCY_FIELDS,
            BenchmarkKind::Bandwidth | BenchmarkKind::LoadedLatency => BANDWIDTH_FIELDS,
        }
    }

    /// Substring of the line that heads this kind's matrix section.
    pub fn matrix_marker(&self) -> &'static str {
        match self {
            BenchmarkKind::IdleLatency => "Idle Latency (ns)",
            BenchmarkKind::Bandwidth => "Peak Bandwidth (GB/s)",
            BenchmarkKind::LoadedLatency => "Loaded Latency (ns)",
        }
    }

    /// The field whose decoded label distinguishes records within a batch:
    /// hugepage size for idle latency, read/write mix otherwise.
    pub fn series_field(&self) -> &'static str {
        match self {
            BenchmarkKind::IdleLatency => "use hugepage",
            BenchmarkKind::Bandwidth | BenchmarkKind::LoadedLatency => "read/write mix",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_field_is_in_field_table() {
        for kind in [
            BenchmarkKind::IdleLatency,
            BenchmarkKind::Bandwidth,
            BenchmarkKind::LoadedLatency,
        ] {
            let series = kind.series_field();
            assert!(
                kind.fields().iter().any(|f| f.label == series),
                "{kind:?} series field '{series}' missing from its table"
            );
        }
    }

    #[test]
    fn series_field_is_an_integer_code() {
        for kind in [
            BenchmarkKind::IdleLatency,
            BenchmarkKind::Bandwidth,
            BenchmarkKind::LoadedLatency,
        ] {
            let spec = kind
                .fields()
                .iter()
                .find(|f| f.label == kind.series_field())
                .unwrap();
            assert_eq!(spec.ty, FieldType::Int);
        }
    }
}
