use assert_fs::prelude::*;
use treewalk::{Config, TreeError, remove_tree};

#[test]
fn removes_nested_tree() {
    let td = assert_fs::TempDir::new().unwrap();
    let root = td.child("victim");
    root.child("a/b/c/deep.txt").write_str("d").unwrap();
    root.child("a/side").write_str("s").unwrap();
    root.child("empty").create_dir_all().unwrap();

    let report = remove_tree(&Config::default(), root.path()).unwrap();

    root.assert(predicates::path::missing());
    assert_eq!(report.files_removed, 2);
    // victim, a, a/b, a/b/c, empty
    assert_eq!(report.dirs_removed, 5);
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_unlinked_not_emptied() {
    let td = assert_fs::TempDir::new().unwrap();
    let keep = td.child("keep");
    keep.child("precious").write_str("p").unwrap();
    let root = td.child("victim");
    root.create_dir_all().unwrap();
    std::os::unix::fs::symlink(keep.path(), root.child("link").path()).unwrap();

    remove_tree(&Config::default(), root.path()).unwrap();

    root.assert(predicates::path::missing());
    keep.child("precious").assert("p");
}

#[test]
fn missing_root_fails() {
    let td = assert_fs::TempDir::new().unwrap();
    let err = remove_tree(&Config::default(), td.child("absent").path()).unwrap_err();
    assert!(matches!(err.downcast_ref::<TreeError>(), Some(TreeError::Traversal { .. })));
}

#[cfg(target_os = "linux")]
#[test]
fn first_failed_removal_aborts() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    if unsafe { libc::geteuid() } == 0 {
        eprintln!("skipping: running as root");
        return;
    }

    let td = assert_fs::TempDir::new().unwrap();
    let root = td.child("victim");
    let sealed = root.child("sealed");
    sealed.child("inside").write_str("i").unwrap();
    // Readable and listable, but entries cannot be unlinked.
    fs::set_permissions(sealed.path(), fs::Permissions::from_mode(0o555)).unwrap();

    let result = remove_tree(&Config::default(), root.path());
    fs::set_permissions(sealed.path(), fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.expect_err("removal inside a read-only directory must fail");
    match err.downcast_ref::<TreeError>() {
        Some(TreeError::RemoveFailed { path, .. }) => {
            assert_eq!(path, sealed.child("inside").path())
        }
        other => panic!("unexpected error: {other:?}"),
    }
    root.assert(predicates::path::is_dir());
    sealed.child("inside").assert("i");
}

#[cfg(unix)]
#[test]
fn symlinked_root_is_unlinked_and_target_kept() {
    let td = assert_fs::TempDir::new().unwrap();
    let real = td.child("real");
    real.child("precious").write_str("p").unwrap();
    let link = td.child("link");
    std::os::unix::fs::symlink(real.path(), link.path()).unwrap();

    let report = remove_tree(&Config::default(), link.path()).unwrap();

    assert_eq!(report, treewalk::RemoveReport { files_removed: 1, dirs_removed: 0 });
    assert!(std::fs::symlink_metadata(link.path()).is_err());
    real.child("precious").assert("p");
}
