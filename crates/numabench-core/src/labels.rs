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

//! Closed mappings from raw benchmark configuration codes to chart labels.
//!
//! The benchmark binaries report the read/write mix and the hugepage size as
//! integer codes. These mappings are total: codes outside the known set
//! degrade to a documented fallback label instead of failing, since future
//! benchmark revisions may introduce new codes and a wrong legend entry is
//! preferable to losing the whole record.

/// Hugepage size selected for an idle-latency run.
///
/// Maps the `use hugepage` code: `0` → 4KB base pages, `1` → 2MB, `2` →
/// 512GB, `3` → 1GB. Any other code maps to [`Huge16G`](Self::Huge16G), the
/// same bucket the benchmark orchestrator uses for 16GB pages and for sizes
/// it does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HugepageSize {
    /// 4KB base pages (no hugepages).
    Base4K,
    /// 2MB hugepages.
    Huge2M,
    /// 512GB hugepages.
    Huge512G,
    /// 1GB hugepages.
    Huge1G,
    /// 16GB hugepages, or an unrecognized size code.
    Huge16G,
}

impl HugepageSize {
    /// Decode a raw `use hugepage` code. Total: never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => HugepageSize::Base4K,
            1 => HugepageSize::Huge2M,
            2 => HugepageSize::Huge512G,
            3 => HugepageSize::Huge1G,
            _ => HugepageSize::Huge16G,
        }
    }

    /// The chart label for this page size.
    pub fn label(&self) -> &'static str {
        match self {
            HugepageSize::Base4K => "4KB",
            HugepageSize::Huge2M => "2MB",
            HugepageSize::Huge512G => "512GB",
            HugepageSize::Huge1G => "1GB",
            HugepageSize::Huge16G => "16GB",
        }
    }
}

/// Read/write operation ratio of a bandwidth or loaded-latency run.
///
/// Maps the `read/write mix` code: `0` → all reads, `1` → 1:1, `2` → 2:1,
/// `3` → 3:1. Any other code maps to [`Unknown`](Self::Unknown) with the
/// fallback label `"unknown mix"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReadWriteMix {
    /// Reads only.
    AllReads,
    /// One write per read.
    OneToOne,
    /// One write per two reads.
    TwoToOne,
    /// One write per three reads.
    ThreeToOne,
    /// A mix code outside the known set.
    Unknown,
}

impl ReadWriteMix {
    /// Decode a raw `read/write mix` code. Total: never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => ReadWriteMix::AllReads,
            1 => ReadWriteMix::OneToOne,
            2 => ReadWriteMix::TwoToOne,
            3 => ReadWriteMix::ThreeToOne,
            _ => ReadWriteMix::Unknown,
        }
    }

    /// The chart label for this mix.
    pub fn label(&self) -> &'static str {
        match self {
            ReadWriteMix::AllReads => "all reads",
            ReadWriteMix::OneToOne => "1:1 read/write",
            ReadWriteMix::TwoToOne => "2:1 read/write",
            ReadWriteMix::ThreeToOne => "3:1 read/write",
            ReadWriteMix::Unknown => "unknown mix",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_codes_map_to_unique_labels() {
        let labels: Vec<_> = (0..4).map(|c| ReadWriteMix::from_code(c).label()).collect();
        assert_eq!(
            labels,
            ["all reads", "1:1 read/write", "2:1 read/write", "3:1 read/write"]
        );
    }

    #[test]
    fn out_of_range_mix_degrades_to_fallback() {
        assert_eq!(ReadWriteMix::from_code(4).label(), "unknown mix");
        assert_eq!(ReadWriteMix::from_code(-1).label(), "unknown mix");
    }

    #[test]
    fn hugepage_codes_map_to_sizes() {
        let labels: Vec<_> = (0..4).map(|c| HugepageSize::from_code(c).label()).collect();
        assert_eq!(labels, ["4KB", "2MB", "512GB", "1GB"]);
    }

    #[test]
    fn out_of_range_hugepage_degrades_to_16gb_bucket() {
        assert_eq!(HugepageSize::from_code(4), HugepageSize::Huge16G);
        assert_eq!(HugepageSize::from_code(99).label(), "16GB");
        assert_eq!(HugepageSize::from_code(-7).label(), "16GB");
    }
}
