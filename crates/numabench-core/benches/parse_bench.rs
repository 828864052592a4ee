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

//! Record parser benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numabench_core::{parse, split_blocks, BenchmarkKind, RawBlock};

const IDLE_BLOCK: &str = "\
threads:           1
region size in KB: 524288
chunk size in KB:  128
stride size in B:  128
access pattern:    1 - random in chunk
use hugepage:      0 - No huge page
target duration:   2
Idle Latency (ns) - RandomInChunk       Node-0    Node-1    Node-2    Node-3
Node-0                                  78.59     120.3     379.9     299.4
Node-1                                  119.8     80.99     177.6     190.9
Node-2                                  301.2     185.5     82.10     121.7
Node-3                                  295.8     188.2     122.4     79.85
";

fn bench_parse(c: &mut Criterion) {
    let block = RawBlock::new(0, IDLE_BLOCK);
    c.bench_function("parse_idle_latency_4node", |b| {
        b.iter(|| parse(black_box(&block), BenchmarkKind::IdleLatency).unwrap())
    });

    let log: String = (0..32)
        .map(|_| format!("[start]\n{IDLE_BLOCK}[end]\n"))
        .collect();
    c.bench_function("split_32_blocks", |b| {
        b.iter(|| split_blocks(black_box(&log)).count())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
