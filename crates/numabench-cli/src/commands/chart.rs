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

//! Chart command - the full log-to-PNG pipeline

use super::load_records;
use crate::error::CliError;
use colored::Colorize;
use numabench_chart::{reshape, BarChart};
use numabench_core::BenchmarkKind;

/// Parse a benchmark log, pivot the records, and render a grouped bar chart.
///
/// Axis labels default to the kind's conventional labels (`Node A to Node B`
/// on x, the measured unit on y); `title`, `x_label`, and `y_label` override
/// them.
pub fn chart(
    file: &str,
    kind: BenchmarkKind,
    output: &str,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
) -> Result<(), CliError> {
    let records = load_records(file, kind)?;
    let dataset = reshape(&records)?;

    let mut bar = BarChart::for_kind(kind);
    if let Some(title) = title {
        bar.title = title;
    }
    if let Some(x_label) = x_label {
        bar.x_label = x_label;
    }
    if let Some(y_label) = y_label {
        bar.y_label = y_label;
    }
    bar.render(&dataset, output)?;

    println!(
        "{} {} record(s) charted to {}",
        "✓".green(),
        dataset.column_labels().len(),
        output
    );
    Ok(())
}
