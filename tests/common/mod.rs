#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use walkdir::WalkDir;

/// Relative path -> file contents (None for directories).
pub type Snapshot = BTreeMap<PathBuf, Option<Vec<u8>>>;

/// Structure and bytes of everything under `root`, excluding `root` itself.
pub fn snapshot(root: &Path) -> Snapshot {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.expect("walk snapshot"))
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let body = e.file_type().is_file().then(|| fs::read(e.path()).unwrap());
            (rel, body)
        })
        .collect()
}

/// a/{f1.txt (5 bytes), sub/{f2.c (0 bytes)}}
pub fn scenario_tree(parent: &assert_fs::TempDir) -> PathBuf {
    let a = parent.child("a");
    a.create_dir_all().unwrap();
    a.child("f1.txt").write_str("hello").unwrap();
    a.child("sub").create_dir_all().unwrap();
    a.child("sub/f2.c").touch().unwrap();
    a.path().to_path_buf()
}

/// A richer tree with several extensions and nesting levels.
pub fn mixed_tree(parent: &assert_fs::TempDir, name: &str) -> PathBuf {
    let root = parent.child(name);
    root.create_dir_all().unwrap();
    root.child("readme.md").write_str("# title\n").unwrap();
    root.child("notes.txt").write_str("remember").unwrap();
    root.child("docs/manual.pdf").write_binary(&[0x25, 0x50, 0x44, 0x46, 0, 1, 2]).unwrap();
    root.child("docs/draft.txt.bak").write_str("old").unwrap();
    root.child("src/main.c").write_str("int main(void){return 0;}\n").unwrap();
    root.child("src/lib/util.h").write_str("#pragma once\n").unwrap();
    root.child("empty/dir").create_dir_all().unwrap();
    root.path().to_path_buf()
}
