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

//! Integration tests for the numabench binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const IDLE_BLOCK: &str = "\
threads:           1
region size in KB: 524288
chunk size in KB:  128
stride size in B:  128
access pattern:    1 - random in chunk
use hugepage:      0 - No huge page
target duration:   2
Idle Latency (ns) - RandomInChunk       Node-0    Node-1
Node-0                                  78.59     120.3
Node-1                                  119.8     80.99
";

fn write_log(dir: &Path, blocks: &[&str]) -> String {
    let path = dir.join("results.log");
    let mut log = String::new();
    for block in blocks {
        log.push_str("[start]\n");
        log.push_str(block);
        log.push_str("[end]\n");
    }
    fs::write(&path, log).unwrap();
    path.display().to_string()
}

fn numabench() -> Command {
    Command::cargo_bin("numabench").unwrap()
}

#[test]
fn validate_reports_every_block() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), &[IDLE_BLOCK, IDLE_BLOCK]);

    numabench()
        .args(["validate", &log, "--kind", "idle-latency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("block 0"))
        .stdout(predicate::str::contains("block 1"))
        .stdout(predicate::str::contains("2 block(s) valid"));
}

#[test]
fn validate_names_bad_block_and_field() {
    let broken = IDLE_BLOCK.replace("threads:           1\n", "");
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), &[IDLE_BLOCK, &broken]);

    numabench()
        .args(["validate", &log, "--kind", "idle-latency"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("block 1"))
        .stderr(predicate::str::contains("threads"))
        .stderr(predicate::str::contains("1 of 2 blocks failed"));
}

#[test]
fn validate_rejects_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.log");
    fs::write(&path, "no delimiters here\n").unwrap();

    numabench()
        .args(["validate", path.to_str().unwrap(), "--kind", "idle-latency"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no benchmark blocks found"));
}

#[test]
fn dump_emits_typed_records_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), &[IDLE_BLOCK]);

    let output = numabench()
        .args(["dump", &log, "--kind", "idle-latency"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let record = &records[0];
    assert_eq!(record["kind"], "IdleLatency");
    assert_eq!(record["fields"]["threads"], 1);
    assert_eq!(record["fields"]["access pattern"], "1 - random in chunk");
    assert_eq!(record["matrix"]["nodes"], 2);
    assert_eq!(record["matrix"]["values"][1], 120.3);
}

#[test]
fn dump_aborts_on_first_bad_block() {
    let broken = IDLE_BLOCK.replace("80.99", "oops");
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), &[IDLE_BLOCK, &broken]);

    numabench()
        .args(["dump", &log, "--kind", "idle-latency"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("block 1"))
        .stderr(predicate::str::contains("oops"));
}

#[test]
fn dump_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), &[IDLE_BLOCK]);
    let out = dir.path().join("records.json");

    numabench()
        .args([
            "dump",
            &log,
            "--kind",
            "idle-latency",
            "--pretty",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn chart_reports_topology_mismatch() {
    let three_node = "\
threads:           1
region size in KB: 524288
chunk size in KB:  128
stride size in B:  128
access pattern:    1 - random in chunk
use hugepage:      1
target duration:   2
Idle Latency (ns)   Node-0  Node-1  Node-2
Node-0  1.0  2.0  3.0
Node-1  4.0  5.0  6.0
Node-2  7.0  8.0  9.0
";
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), &[IDLE_BLOCK, three_node]);
    let out = dir.path().join("chart.png");

    numabench()
        .args([
            "chart",
            &log,
            "--kind",
            "idle-latency",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "record 1 reports 3 nodes but the batch started with 2",
        ));
}

#[test]
fn missing_file_fails_with_path() {
    numabench()
        .args(["validate", "/no/such/file.log", "--kind", "bandwidth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/file.log"));
}
