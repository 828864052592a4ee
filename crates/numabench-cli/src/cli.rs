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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use numabench_core::BenchmarkKind;

/// Benchmark kind selector for the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Unloaded cross-node latency (`Idle Latency (ns)` blocks).
    IdleLatency,
    /// Peak cross-node throughput (`Peak Bandwidth (GB/s)` blocks).
    Bandwidth,
    /// Latency under bandwidth load (`Loaded Latency (ns)` blocks).
    LoadedLatency,
}

impl From<KindArg> for BenchmarkKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::IdleLatency => BenchmarkKind::IdleLatency,
            KindArg::Bandwidth => BenchmarkKind::Bandwidth,
            KindArg::LoadedLatency => BenchmarkKind::LoadedLatency,
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate every block of a benchmark log
    ///
    /// Parses each [start]/[end] delimited block and reports a per-block
    /// OK or error line with the block index, so a bad block can be located
    /// in the raw log. Exits with failure if any block fails.
    Validate {
        /// Log file path
        #[arg(value_name = "LOG")]
        file: String,

        /// Benchmark kind the blocks report
        #[arg(short, long, value_enum)]
        kind: KindArg,
    },

    /// Parse a benchmark log and emit the records as JSON
    Dump {
        /// Log file path
        #[arg(value_name = "LOG")]
        file: String,

        /// Benchmark kind the blocks report
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render a grouped bar chart from a benchmark log
    ///
    /// Parses all blocks, pivots them into one bar group per node pair with
    /// one bar per block, and saves the chart as a PNG.
    Chart {
        /// Log file path
        #[arg(value_name = "LOG")]
        file: String,

        /// Benchmark kind the blocks report
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Output PNG path
        #[arg(short, long)]
        output: String,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// X axis label (defaults to the kind's conventional label)
        #[arg(long)]
        x_label: Option<String>,

        /// Y axis label (defaults to the kind's conventional label)
        #[arg(long)]
        y_label: Option<String>,
    },
}

impl Commands {
    /// Execute the selected command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Validate { file, kind } => commands::validate(&file, kind.into()),
            Commands::Dump {
                file,
                kind,
                pretty,
                output,
            } => commands::dump(&file, kind.into(), pretty, output.as_deref()),
            Commands::Chart {
                file,
                kind,
                output,
                title,
                x_label,
                y_label,
            } => commands::chart(&file, kind.into(), &output, title, x_label, y_label),
        }
    }
}
