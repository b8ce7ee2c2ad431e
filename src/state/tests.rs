// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{JsonFileStore, MemoryStore, StateStore};
use crate::testutil::temp_dir;
use std::path::Path;

#[test]
fn test_json_store_roundtrip() {
    let temp = temp_dir();
    let mut store = JsonFileStore::new(temp.path().join("state/state.json"));

    assert_eq!(store.load_last_path(), None);

    store
        .save_last_path(Path::new("/work/repos/app"))
        .expect("save should succeed");
    assert_eq!(
        store.load_last_path(),
        Some(Path::new("/work/repos/app").to_path_buf())
    );

    // A fresh store over the same file sees the persisted value.
    let reopened = JsonFileStore::new(temp.path().join("state/state.json"));
    assert_eq!(
        reopened.load_last_path(),
        Some(Path::new("/work/repos/app").to_path_buf())
    );
}

#[test]
fn test_json_store_ignores_corrupt_file() {
    let temp = temp_dir();
    let file = temp.path().join("state.json");
    std::fs::write(&file, "{not json").expect("write");

    let store = JsonFileStore::new(file);
    assert_eq!(store.load_last_path(), None);
}

#[test]
fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::default();
    assert_eq!(store.load_last_path(), None);
    store
        .save_last_path(Path::new("/tmp/x"))
        .expect("save should succeed");
    assert_eq!(store.load_last_path(), Some(Path::new("/tmp/x").to_path_buf()));
}
