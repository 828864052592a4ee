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

//! CLI command implementations

mod chart;
mod dump;
mod validate;

pub use chart::chart;
pub use dump::dump;
pub use validate::validate;

use crate::error::CliError;
use numabench_core::{parse, read_blocks, BenchmarkKind, ResultRecord};
use std::path::PathBuf;

/// Read a log file and parse every block, aborting on the first failure
/// with the block index attached.
pub(crate) fn load_records(
    file: &str,
    kind: BenchmarkKind,
) -> Result<Vec<ResultRecord>, CliError> {
    let blocks = read_blocks(file)?;
    if blocks.is_empty() {
        return Err(CliError::EmptyLog {
            path: PathBuf::from(file),
        });
    }
    blocks
        .iter()
        .map(|block| {
            parse(block, kind)
                .map_err(|e| e.at_block(block.index()))
                .map_err(CliError::from)
        })
        .collect()
}
