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

//! Parsing of CPU/NUMA memory microbenchmark logs.
//!
//! The benchmark orchestrator runs latency and bandwidth binaries and writes
//! their raw stdout to a log file, one `[start]` / `[end]` delimited block
//! per invocation. This crate turns that log into typed records:
//!
//! 1. [`split_blocks`] / [`read_blocks`] extract ordered [`RawBlock`]s.
//! 2. [`parse`] converts one block into a [`ResultRecord`] for a given
//!    [`BenchmarkKind`], extracting the kind's scalar fields and its
//!    per-node-pair [`NodeMatrix`].
//!
//! Parsing is strict where it matters (missing or mistyped fields and
//! malformed matrix rows are [`ParseError`]s naming the offender) and
//! forgiving where it is cosmetic (unknown read/write-mix and hugepage-size
//! codes degrade to fallback labels).
//!
//! Everything here is sequential and allocation-light; blocks are small,
//! bounded text. The companion `numabench-chart` crate reshapes batches of
//! records into grouped-bar-chart datasets.

mod blocks;
mod error;
mod kind;
mod labels;
mod matrix;
mod parser;
mod record;

pub use blocks::{read_blocks, split_blocks, Blocks, RawBlock, BLOCK_END, BLOCK_START};
pub use error::{ParseError, Result};
pub use kind::{BenchmarkKind, FieldSpec, FieldType};
pub use labels::{HugepageSize, ReadWriteMix};
pub use matrix::NodeMatrix;
pub use parser::parse;
pub use record::{FieldValue, ResultRecord};
