//! Directory creation through the rooted filesystem.
//!
//! Covers the `mkdir -p` contract: nested creation, repeat calls, files in
//! the way, and concurrent creators racing on the same tree.

use std::path::{Path, PathBuf};
use std::sync::Barrier;

use basicfs_common::DEFAULT_DIR_PERM;
use basicfs_filesystem::{BasicFilesystem, FileSystemError, PathError};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Helper to create a filesystem rooted in a fresh temp directory.
fn create_test_env() -> (TempDir, BasicFilesystem) {
    let dir: TempDir = TempDir::new().unwrap();
    let fs: BasicFilesystem = BasicFilesystem::new(dir.path()).unwrap();
    (dir, fs)
}

/// All directories below `root`, relative to it, sorted.
fn directories_under(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn test_creates_three_levels() {
    let (dir, fs) = create_test_env();

    fs.mkdir_all("a/b/c", DEFAULT_DIR_PERM).unwrap();

    assert_eq!(
        directories_under(dir.path()),
        vec![
            PathBuf::from("a"),
            PathBuf::from("a").join("b"),
            PathBuf::from("a").join("b").join("c"),
        ]
    );
}

#[test]
fn test_repeat_is_noop() {
    let (dir, fs) = create_test_env();

    fs.mkdir_all("a/b/c", DEFAULT_DIR_PERM).unwrap();
    std::fs::write(dir.path().join("a/b/c/keep.txt"), b"keep").unwrap();
    fs.mkdir_all("a/b/c", DEFAULT_DIR_PERM).unwrap();

    assert_eq!(directories_under(dir.path()).len(), 3);
    assert!(dir.path().join("a/b/c/keep.txt").is_file());
}

#[test]
fn test_root_itself() {
    let (_dir, fs) = create_test_env();
    fs.mkdir_all("", DEFAULT_DIR_PERM).unwrap();
    fs.mkdir_all(".", DEFAULT_DIR_PERM).unwrap();
}

#[test]
fn test_file_in_path_is_not_a_directory() {
    let (dir, fs) = create_test_env();

    fs.mkdir_all("a", DEFAULT_DIR_PERM).unwrap();
    std::fs::write(dir.path().join("a").join("b"), b"plain file").unwrap();

    let result = fs.mkdir_all("a/b/c", DEFAULT_DIR_PERM);
    assert!(matches!(result, Err(FileSystemError::NotADirectory { .. })));

    let result = fs.mkdir_all("a/b", DEFAULT_DIR_PERM);
    assert!(matches!(result, Err(FileSystemError::NotADirectory { .. })));

    // The file is left alone.
    assert_eq!(std::fs::read(dir.path().join("a").join("b")).unwrap(), b"plain file");
}

#[test]
fn test_escaping_name_rejected_before_touching_disk() {
    let (dir, fs) = create_test_env();

    let result = fs.mkdir_all("../sibling", DEFAULT_DIR_PERM);
    assert!(matches!(
        result,
        Err(FileSystemError::Path(PathError::NotRelative { .. }))
    ));
    assert!(!dir.path().parent().unwrap().join("sibling").exists());
}

#[cfg(windows)]
#[test]
fn test_drive_prefixed_segment_rejected() {
    let (dir, fs) = create_test_env();

    for name in ["a/C:evil", "x/D:", "C:"] {
        let result = fs.mkdir_all(name, DEFAULT_DIR_PERM);
        assert!(
            matches!(result, Err(FileSystemError::Path(PathError::NotRelative { .. }))),
            "{} was accepted",
            name
        );
    }
    assert!(directories_under(dir.path()).is_empty());
}

#[test]
fn test_concurrent_creators_converge() {
    let (dir, fs) = create_test_env();
    let deep: &str = "x/y/z/w/v/u";
    let barrier: Barrier = Barrier::new(2);

    let results: Vec<Result<(), FileSystemError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    fs.mkdir_all(deep, DEFAULT_DIR_PERM)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        result.unwrap();
    }
    assert_eq!(directories_under(dir.path()).len(), 6);
    assert!(dir.path().join(deep).is_dir());
}

#[test]
fn test_many_concurrent_creators_on_overlapping_trees() {
    let (dir, fs) = create_test_env();
    let targets: Vec<String> = (0..8).map(|i| format!("shared/common/leaf{}", i % 3)).collect();

    std::thread::scope(|scope| {
        for target in &targets {
            let fs: &BasicFilesystem = &fs;
            scope.spawn(move || fs.mkdir_all(target, DEFAULT_DIR_PERM).unwrap());
        }
    });

    assert_eq!(
        directories_under(dir.path()),
        vec![
            PathBuf::from("shared"),
            PathBuf::from("shared").join("common"),
            PathBuf::from("shared").join("common").join("leaf0"),
            PathBuf::from("shared").join("common").join("leaf1"),
            PathBuf::from("shared").join("common").join("leaf2"),
        ]
    );
}
