mod common;

use assert_fs::prelude::*;
use treewalk::{Config, TreeError, move_tree};

#[test]
fn move_clones_then_removes_source() {
    let td = assert_fs::TempDir::new().unwrap();
    let src = common::mixed_tree(&td, "project");
    let before = common::snapshot(&src);
    let dest = td.child("completed");
    dest.create_dir_all().unwrap();

    let report = move_tree(&Config::default(), &src, dest.path()).unwrap();

    assert!(!src.exists(), "source directory should be removed");
    assert_eq!(report.destination, dest.path().join("project"));
    assert_eq!(common::snapshot(&report.destination), before);
}

#[test]
fn scenario_move() {
    let td = assert_fs::TempDir::new().unwrap();
    let a = common::scenario_tree(&td);
    let b = td.child("b");
    b.create_dir_all().unwrap();

    move_tree(&Config::default(), &a, b.path()).unwrap();

    assert!(!a.exists());
    b.child("a/f1.txt").assert("hello");
    b.child("a/sub/f2.c").assert("");
}

#[test]
fn dry_run_keeps_both_sides_untouched() {
    let td = assert_fs::TempDir::new().unwrap();
    let src = common::scenario_tree(&td);
    let dest = td.child("b");
    dest.create_dir_all().unwrap();

    let cfg = Config { dry_run: true, ..Config::default() };
    let report = move_tree(&cfg, &src, dest.path()).unwrap();

    assert!(src.join("f1.txt").exists());
    assert!(!report.destination.exists());
}

#[test]
fn moving_into_own_subtree_is_refused_before_any_change() {
    let td = assert_fs::TempDir::new().unwrap();
    let src = common::scenario_tree(&td);
    let before = common::snapshot(&src);

    let err = move_tree(&Config::default(), &src, &src.join("sub")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TreeError>(),
        Some(TreeError::DestinationInsideSource { .. })
    ));
    assert_eq!(common::snapshot(&src), before);
}

#[cfg(unix)]
#[test]
fn failed_copy_leaves_source_untouched() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    if unsafe { libc::geteuid() } == 0 {
        eprintln!("skipping: running as root");
        return;
    }

    let td = assert_fs::TempDir::new().unwrap();
    let src = common::scenario_tree(&td);
    let before = common::snapshot(&src);
    let dest = td.child("readonly");
    dest.create_dir_all().unwrap();
    fs::set_permissions(dest.path(), fs::Permissions::from_mode(0o555)).unwrap();

    let result = move_tree(&Config::default(), &src, dest.path());
    fs::set_permissions(dest.path(), fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.expect_err("expected error due to unwritable destination");
    assert!(matches!(err.downcast_ref::<TreeError>(), Some(TreeError::CopyFailed { .. })));
    assert_eq!(common::snapshot(&src), before, "source must survive a failed move");
}

#[cfg(unix)]
#[test]
fn symlinked_source_root_is_neither_copied_nor_unlinked() {
    let td = assert_fs::TempDir::new().unwrap();
    let real = td.child("real");
    real.child("keep/precious").write_str("p").unwrap();
    let link = td.child("link");
    std::os::unix::fs::symlink(real.path(), link.path()).unwrap();
    let dest = td.child("dest");
    dest.create_dir_all().unwrap();

    let err = move_tree(&Config::default(), link.path(), dest.path()).unwrap_err();

    assert!(matches!(err.downcast_ref::<TreeError>(), Some(TreeError::SourceIsSymlink(_))));
    assert!(std::fs::symlink_metadata(link.path()).unwrap().file_type().is_symlink());
    real.child("keep/precious").assert("p");
    assert!(common::snapshot(dest.path()).is_empty());
}
