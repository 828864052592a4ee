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

//! Dump command - emit parsed records as JSON

use super::load_records;
use crate::error::CliError;
use numabench_core::BenchmarkKind;
use std::fs;
use std::path::PathBuf;

/// Parse a benchmark log and emit its records as a JSON array.
///
/// Aborts on the first bad block with the block index in the error. Output
/// goes to stdout unless `output` names a file.
pub fn dump(
    file: &str,
    kind: BenchmarkKind,
    pretty: bool,
    output: Option<&str>,
) -> Result<(), CliError> {
    let records = load_records(file, kind)?;
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    match output {
        Some(path) => fs::write(path, json).map_err(|e| CliError::Write {
            path: PathBuf::from(path),
            message: e.to_string(),
        })?,
        None => println!("{json}"),
    }
    Ok(())
}
