use std::fs;

use tempfile::TempDir;
use transcript_engine::{ensure_output_dir, write_text_file};

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out/nested");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn rejects_output_path_that_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("taken");
    fs::write(&file_path, "x").unwrap();
    assert!(ensure_output_dir(&file_path).is_err());
}

#[test]
fn write_creates_parents_and_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("a/b/doc.txt");

    write_text_file(&target, "hello\n").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "hello\n");

    write_text_file(&target, "world\n").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "world\n");
}

#[test]
fn no_partial_file_when_parent_is_unusable() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let target = blocker.join("doc.txt");
    assert!(write_text_file(&target, "data").is_err());
    assert!(!target.exists());
}
