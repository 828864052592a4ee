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

//! Grouped bar chart rendering.

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use numabench_core::BenchmarkKind;
use plotters::prelude::*;
use std::path::Path;

/// A grouped bar chart: one bar group per node pair, one bar per column
/// label within each group, with a legend from the column labels.
///
/// Construct with [`BarChart::for_kind`] for the conventional axis labels of
/// a benchmark kind, or fill the fields directly.
#[derive(Debug, Clone)]
pub struct BarChart {
    /// Chart caption; empty for no caption.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            width: 1280,
            height: 720,
        }
    }
}

impl BarChart {
    /// A chart with the conventional axis labels for `kind`.
    pub fn for_kind(kind: BenchmarkKind) -> Self {
        let y_label = match kind {
            BenchmarkKind::IdleLatency => "idle latency(ns)",
            BenchmarkKind::Bandwidth => "peak bandwidth(GB/s)",
            BenchmarkKind::LoadedLatency => "loaded latency(ns)",
        };
        Self {
            x_label: "Node A to Node B".to_string(),
            y_label: y_label.to_string(),
            ..Self::default()
        }
    }

    /// Render `dataset` as a grouped bar chart and persist it as a PNG at
    /// `path`.
    ///
    /// Group `k` occupies the x interval `[k, k+1)`, with one bar per
    /// column laid out left to right in column order, so the bar order
    /// within every group matches the legend order.
    pub fn render(&self, dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
        let groups = dataset.group_labels().len();
        let columns = dataset.column_labels().len();
        let y_max = dataset
            .values()
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, &v| acc.max(v));
        let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

        let root = BitMapBackend::new(path.as_ref(), (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(10)
            .x_label_area_size(48)
            .y_label_area_size(64);
        if !self.title.is_empty() {
            builder.caption(&self.title, ("sans-serif", 28));
        }
        let mut chart = builder
            .build_cartesian_2d(0f64..groups as f64, 0f64..y_top)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .x_labels(groups)
            .x_label_formatter(&|x| {
                let k = x.floor() as usize;
                dataset
                    .group_labels()
                    .get(k)
                    .cloned()
                    .unwrap_or_default()
            })
            .draw()
            .map_err(|e| ChartError::Render(e.to_string()))?;

        // Each group spans [k, k+1); bars fill the middle 80% of the span.
        let bar_width = 0.8 / columns as f64;
        for (c, label) in dataset.column_labels().iter().enumerate() {
            let color = Palette99::pick(c).mix(0.9);
            chart
                .draw_series(dataset.values().iter().enumerate().map(|(k, row)| {
                    let x0 = k as f64 + 0.1 + c as f64 * bar_width;
                    Rectangle::new([(x0, 0.0), (x0 + bar_width, row[c])], color.filled())
                }))
                .map_err(|e| ChartError::Render(e.to_string()))?
                .label(label.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| ChartError::Render(e.to_string()))?;

        root.present()
            .map_err(|e| ChartError::Render(e.to_string()))?;
        Ok(())
    }
}
