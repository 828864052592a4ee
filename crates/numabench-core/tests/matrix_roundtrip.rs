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

//! Property-based round-trip tests for the measurement matrix.

use numabench_core::{parse, BenchmarkKind, RawBlock};
use proptest::prelude::*;

/// Wrap matrix rows in a minimal well-formed idle-latency block.
fn idle_block_with_rows(rows: &str) -> RawBlock {
    RawBlock::new(
        0,
        format!(
            "threads:           1\n\
             region size in KB: 1024\n\
             chunk size in KB:  64\n\
             stride size in B:  64\n\
             access pattern:    0 - sequential\n\
             use hugepage:      0\n\
             target duration:   2\n\
             Idle Latency (ns)\n\
             {rows}"
        ),
    )
}

proptest! {
    /// Property: rendering a parsed matrix back to the `Node-i v0 v1 ...`
    /// textual form and re-parsing it yields an equal matrix.
    #[test]
    fn prop_matrix_text_round_trip(
        nodes in 1usize..=4,
        seed in prop::collection::vec(0.0f64..10_000.0, 16)
    ) {
        let mut rows = String::new();
        for i in 0..nodes {
            rows.push_str(&format!("Node-{i}"));
            for j in 0..nodes {
                rows.push_str(&format!("  {}", seed[i * nodes + j]));
            }
            rows.push('\n');
        }

        let first = parse(&idle_block_with_rows(&rows), BenchmarkKind::IdleLatency)
            .expect("generated block must parse");
        prop_assert_eq!(first.node_count(), nodes);
        for i in 0..nodes {
            for j in 0..nodes {
                prop_assert_eq!(first.matrix().get(i, j), seed[i * nodes + j]);
            }
        }

        let rendered = first.matrix().to_rows();
        let second = parse(&idle_block_with_rows(&rendered), BenchmarkKind::IdleLatency)
            .expect("rendered matrix must re-parse");
        prop_assert_eq!(first.matrix(), second.matrix());
    }
}
