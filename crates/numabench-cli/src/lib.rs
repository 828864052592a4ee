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

//! numabench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: parse every block of a benchmark log and report a
//!   per-block OK/error line with the block's position in the file
//! - **dump**: parse a log and emit the typed records as JSON
//! - **chart**: parse a log, pivot the records into one bar group per
//!   (source node, destination node) pair, and render a grouped bar chart
//!   PNG
//!
//! Running the benchmarks themselves, hugepage allocation, and NUMA sysfs
//! configuration are the orchestrator's business, not this tool's; it only
//! consumes the logs the orchestrator writes.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
