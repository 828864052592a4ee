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

//! Validate command - per-block benchmark log validation

use crate::error::CliError;
use colored::Colorize;
use numabench_core::{parse, read_blocks, BenchmarkKind};
use std::path::PathBuf;

/// Validate every block of a benchmark log.
///
/// Unlike `dump` and `chart`, which abort on the first bad block, validation
/// reports every block so a log with several problems can be fixed in one
/// pass. Each line names the block's 0-based position and, on failure, the
/// missing or malformed field or matrix row.
///
/// # Errors
///
/// Returns [`CliError::ValidationFailed`] if any block fails to parse,
/// [`CliError::EmptyLog`] if the file contains no blocks, or a
/// [`CliError::Parse`] I/O error if the file cannot be read.
pub fn validate(file: &str, kind: BenchmarkKind) -> Result<(), CliError> {
    let blocks = read_blocks(file)?;
    if blocks.is_empty() {
        return Err(CliError::EmptyLog {
            path: PathBuf::from(file),
        });
    }

    let mut failed = 0usize;
    for block in &blocks {
        match parse(block, kind) {
            Ok(record) => println!(
                "{} block {}: {} node(s), {}",
                "OK".green().bold(),
                block.index(),
                record.node_count(),
                record.series_label()
            ),
            Err(e) => {
                failed += 1;
                eprintln!("{} {}", "error:".red().bold(), e.at_block(block.index()));
            }
        }
    }

    if failed > 0 {
        Err(CliError::ValidationFailed {
            path: PathBuf::from(file),
            failed,
            total: blocks.len(),
        })
    } else {
        println!("{} {} block(s) valid", "✓".green(), blocks.len());
        Ok(())
    }
}
