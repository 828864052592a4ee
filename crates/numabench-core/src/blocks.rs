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

//! Splitting a benchmark log into raw text blocks.
//!
//! The orchestration layer writes one `[start]` / `[end]` delimited block per
//! benchmark invocation. This module extracts those blocks, in file order,
//! without assuming anything about their internal structure.

use crate::error::{ParseError, Result};
use std::fs;
use std::path::Path;

/// Line that opens a benchmark block in the log file.
pub const BLOCK_START: &str = "[start]";

/// Line that closes a benchmark block in the log file.
pub const BLOCK_END: &str = "[end]";

/// An opaque text span between a `[start]` line and the next `[end]` line.
///
/// Blocks are immutable once produced; `index` records the 0-based position
/// of the block in the log file, carried through to error messages so a
/// failure can be located in the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    index: usize,
    text: String,
}

impl RawBlock {
    /// Create a block directly, e.g. from text captured in a test.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// 0-based position of this block in the log file.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The block's content, delimiter lines excluded.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Lazy iterator over the blocks of a log file's text.
///
/// Created by [`split_blocks`]. Yields blocks in file order; a trailing
/// `[start]` with no matching `[end]` is dropped rather than yielded as a
/// partial block.
pub struct Blocks<'a> {
    lines: std::str::Lines<'a>,
    next_index: usize,
}

impl Iterator for Blocks<'_> {
    type Item = RawBlock;

    fn next(&mut self) -> Option<RawBlock> {
        loop {
            let line = self.lines.next()?;
            if line.trim() == BLOCK_START {
                break;
            }
        }
        let mut text = String::new();
        loop {
            match self.lines.next() {
                // Unmatched [start]: drop the trailing content.
                None => return None,
                Some(line) if line.trim() == BLOCK_END => break,
                Some(line) => {
                    text.push_str(line);
                    text.push('\n');
                }
            }
        }
        let index = self.next_index;
        self.next_index += 1;
        Some(RawBlock { index, text })
    }
}

/// Split the full text of a log file into an ordered sequence of blocks.
///
/// Text outside `[start]`/`[end]` pairs is ignored; a file with no delimiters
/// yields an empty sequence, which is not an error.
///
/// # Examples
///
/// ```
/// use numabench_core::split_blocks;
///
/// let log = "[start]\nthreads: 1\n[end]\n[start]\nthreads: 2\n[end]\n";
/// let blocks: Vec<_> = split_blocks(log).collect();
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].text(), "threads: 1\n");
/// assert_eq!(blocks[1].index(), 1);
/// ```
pub fn split_blocks(text: &str) -> Blocks<'_> {
    Blocks {
        lines: text.lines(),
        next_index: 0,
    }
}

/// Read a log file and collect its blocks.
///
/// The file handle is scoped to this call and released on every exit path,
/// including read errors.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read.
pub fn read_blocks(path: impl AsRef<Path>) -> Result<Vec<RawBlock>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(split_blocks(&text).collect())
}
