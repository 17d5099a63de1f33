// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

fn tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::create_dir_all(root.join("target/debug")).unwrap();
    std::fs::create_dir_all(root.join(".git")).unwrap();
    std::fs::write(
        root.join("src/lib.rs"),
        "// TODO: split module\nfn a() {}\n// TODO[#3]: remove alias\n",
    )
    .unwrap();
    std::fs::write(root.join("src/main.rs"), "fn main() {} // todo handle args\n").unwrap();
    std::fs::write(root.join("target/debug/gen.rs"), "// TODO: generated\n").unwrap();
    std::fs::write(root.join(".git/HEAD"), "TODO: not code\n").unwrap();
    std::fs::write(root.join("logo.bin"), [0xffu8, 0xfe, 0x00, 0x54]).unwrap();
    dir
}

fn collect(dir: &TempDir, filter: ScanFilter) -> Vec<ListedItem> {
    collect_items(dir.path(), &[dir.path().to_path_buf()], filter).unwrap()
}

#[test]
fn lists_items_in_file_order() {
    let dir = tree();
    let items = collect(&dir, ScanFilter::All);
    assert_eq!(
        items,
        vec![
            ListedItem {
                path: "src/lib.rs".into(),
                line: 1,
                issue: None,
                title: "split module".into(),
            },
            ListedItem {
                path: "src/lib.rs".into(),
                line: 3,
                issue: Some(3),
                title: "remove alias".into(),
            },
            ListedItem {
                path: "src/main.rs".into(),
                line: 1,
                issue: None,
                title: "handle args".into(),
            },
        ]
    );
}

#[parameterized(
    new = { ScanFilter::New, vec![1, 1] },
    reported = { ScanFilter::Reported, vec![3] },
)]
fn filter_selects_items(filter: ScanFilter, lines: Vec<usize>) {
    let dir = tree();
    let found: Vec<usize> = collect(&dir, filter).iter().map(|i| i.line).collect();
    assert_eq!(found, lines);
}

#[test]
fn single_file_path_is_scanned() {
    let dir = tree();
    let items = collect_items(
        dir.path(),
        &[dir.path().join("src/main.rs")],
        ScanFilter::All,
    )
    .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].path, "src/main.rs");
}

#[test]
fn missing_path_fails() {
    let dir = tree();
    let result = collect_items(dir.path(), &[dir.path().join("nope")], ScanFilter::All);
    assert!(result.is_err());
}

#[parameterized(
    plain = { "TODO[#7]: drop shim", 7, "drop shim" },
    no_colon = { "TODO[#7] drop shim", 7, "drop shim" },
    lowercase = { "todo[#12]: later", 12, "later" },
    other_number = { "TODO[#7]: drop shim", 8, "TODO[#7]: drop shim" },
)]
fn strip_reference_removes_marker(title: &str, number: u64, expected: &str) {
    assert_eq!(strip_reference(title, number), expected);
}

#[test]
fn text_line_shows_issue_reference() {
    let item = ListedItem {
        path: "src/lib.rs".into(),
        line: 3,
        issue: Some(3),
        title: "remove alias".into(),
    };
    assert_eq!(format_item(&item), "src/lib.rs:3: [#3] remove alias");

    let item = ListedItem { issue: None, ..item };
    assert_eq!(format_item(&item), "src/lib.rs:3: remove alias");
}

#[test]
fn json_omits_missing_issue() {
    let items = vec![ListedItem {
        path: "a.rs".into(),
        line: 1,
        issue: None,
        title: "t".into(),
    }];
    let json = serde_json::to_value(ListOutputJson { items: &items }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "items": [{ "path": "a.rs", "line": 1, "title": "t" }] })
    );
}
