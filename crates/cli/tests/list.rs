// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

fn project() -> TempDir {
    let temp = init_temp();
    write_file(
        &temp,
        "src/lib.rs",
        "// TODO: split module\npub fn a() {}\n// TODO[#3]: remove alias\n",
    );
    write_file(&temp, "target/out.rs", "// TODO: generated\n");
    temp
}

#[test]
fn lists_all_items() {
    let temp = project();

    tds(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout("src/lib.rs:1: split module\nsrc/lib.rs:3: [#3] remove alias\n");
}

#[test]
fn new_only() {
    let temp = project();

    tds(&temp)
        .args(["list", "--new"])
        .assert()
        .success()
        .stdout("src/lib.rs:1: split module\n");
}

#[test]
fn reported_only() {
    let temp = project();

    tds(&temp)
        .args(["list", "--reported"])
        .assert()
        .success()
        .stdout("src/lib.rs:3: [#3] remove alias\n");
}

#[test]
fn new_and_reported_conflict() {
    let temp = project();

    tds(&temp)
        .args(["list", "--new", "--reported"])
        .assert()
        .failure();
}

#[test]
fn json_output() {
    let temp = project();

    let output = tds(&temp).args(["list", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["issue"], 3);
    assert_eq!(items[1]["title"], "remove alias");
}

#[test]
fn paths_are_relative_to_project_root() {
    let temp = project();

    tds(&temp)
        .args(["-C", "src", "list", "."])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("src/lib.rs:1:"));
}

#[test]
fn works_without_init() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "notes.txt", "TODO: call back\n");

    tds(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout("notes.txt:1: call back\n");
}
