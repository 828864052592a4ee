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

//! Grouped-bar-chart datasets and rendering for numabench results.
//!
//! [`reshape`] pivots an ordered batch of same-topology
//! [`ResultRecord`](numabench_core::ResultRecord)s that vary along one
//! configuration dimension (hugepage size, read/write mix) into a
//! [`Dataset`]: one group per (source node, destination node) pair, one
//! column per record. [`BarChart`] renders a dataset as a grouped bar chart
//! and saves it as a PNG.

mod bar;
mod dataset;
mod error;

pub use bar::BarChart;
pub use dataset::{reshape, Dataset};
pub use error::{ChartError, Result};
