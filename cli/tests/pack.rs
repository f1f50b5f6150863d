//! # zippack CLI Packing Integration Tests
//!
//! File: cli/tests/pack.rs
//!
//! ## Overview
//!
//! End-to-end runs of `zippack` in both input modes. Each test builds a
//! scratch tree with `tempfile`, runs the binary, and reads the produced
//! archive back with the `zip` crate.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// `a.txt` and `sub/b.txt` under `<root>/src`.
fn sample_tree(root: &Path) -> std::path::PathBuf {
    let src = root.join("src");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::write(src.join("a.txt"), "alpha").unwrap();
    fs::write(src.join("sub/b.txt"), "beta").unwrap();
    src
}

#[test]
fn test_dir_mode_archives_tree() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = sample_tree(work_dir.path());
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .arg(format!("--dir={}", arg(&src)))
        .arg(format!("--output={}", arg(&output)))
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!("{} => a.txt", src.join("a.txt").display())).and(
                predicate::str::contains(format!(
                    "{} => sub/b.txt",
                    src.join("sub/b.txt").display()
                )),
            ),
        );

    assert_eq!(sorted_names(&output), vec!["a.txt", "sub/b.txt"]);
}

/// Exactly the regular files: no directory entries, no duplicates.
#[test]
fn test_dir_mode_has_no_directory_entries() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = sample_tree(work_dir.path());
    fs::create_dir_all(src.join("empty/deeper")).unwrap();
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .args(["--dir", arg(&src), "--output", arg(&output), "--quiet"])
        .assert()
        .success();

    let names = sorted_names(&output);
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| !n.ends_with('/') && !n.contains('\\')));
}

#[test]
fn test_dir_mode_round_trip_is_byte_identical() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = work_dir.path().join("src");
    fs::create_dir_all(src.join("bin")).unwrap();
    let binary: Vec<u8> = (0..=255u8).cycle().take(200_000).collect();
    fs::write(src.join("bin/blob.dat"), &binary).unwrap();
    fs::write(src.join("empty.txt"), "").unwrap();
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .args(["--dir", arg(&src), "--output", arg(&output), "--quiet"])
        .assert()
        .success();

    let mut entries = read_archive(&output);
    entries.sort();
    assert_eq!(
        entries,
        vec![
            ("bin/blob.dat".to_string(), binary),
            ("empty.txt".to_string(), Vec::new()),
        ]
    );
}

#[test]
fn test_input_file_mode_with_base_dir() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let root = work_dir.path();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    let list = root.join("list.txt");
    fs::write(&list, format!("{}\n", root.join("a.txt").display())).unwrap();
    let output = root.join("out.zip");

    zippack_cmd()
        .arg(format!("--input-file={}", arg(&list)))
        .arg(format!("--base-dir={}", arg(root)))
        .arg(format!("--output={}", arg(&output)))
        .assert()
        .success()
        .stdout(format!("{} => a.txt\n", root.join("a.txt").display()));

    assert_eq!(
        read_archive(&output),
        vec![("a.txt".to_string(), b"alpha".to_vec())]
    );
}

/// Listed order is archive order; duplicates are kept.
#[test]
fn test_input_file_mode_preserves_order() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = sample_tree(work_dir.path());
    let list = work_dir.path().join("list.txt");
    fs::write(
        &list,
        format!(
            "{b}\n\n{a}\n{b}\n",
            a = src.join("a.txt").display(),
            b = src.join("sub/b.txt").display()
        ),
    )
    .unwrap();
    let output = work_dir.path().join("out.zip");
    let base_dir = format!("{}/", arg(&src));

    zippack_cmd()
        .args([
            "--input-file",
            arg(&list),
            "--base-dir",
            base_dir.as_str(),
            "--output",
            arg(&output),
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let names: Vec<String> = read_archive(&output).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["sub/b.txt", "a.txt", "sub/b.txt"]);
}

/// A listed file that does not exist aborts the run instead of being skipped.
#[test]
fn test_input_file_mode_missing_file_aborts() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = sample_tree(work_dir.path());
    let missing = src.join("missing.txt");
    let list = work_dir.path().join("list.txt");
    fs::write(
        &list,
        format!("{}\n{}\n", src.join("a.txt").display(), missing.display()),
    )
    .unwrap();
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .args([
            "--input-file",
            arg(&list),
            "--base-dir",
            arg(&src),
            "--output",
            arg(&output),
        ])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to open source file")
                .and(predicate::str::contains("missing.txt")),
        );
}

#[test]
fn test_missing_list_file_aborts() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .args([
            "--input-file",
            arg(&work_dir.path().join("nope.txt")),
            "--output",
            arg(&output),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open file list"));
    assert!(!output.exists());
}

#[test]
fn test_missing_directory_aborts() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .args([
            "--dir",
            arg(&work_dir.path().join("nope")),
            "--output",
            arg(&output),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    assert!(!output.exists());
}

#[test]
fn test_quiet_from_environment() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = sample_tree(work_dir.path());
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .env("ZIPPACK_QUIET", "true")
        .args(["--dir", arg(&src), "--output", arg(&output)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(sorted_names(&output), vec!["a.txt", "sub/b.txt"]);
}

/// Logs go to stderr, so stdout stays exactly the progress lines.
#[test]
fn test_verbose_logs_do_not_touch_stdout() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = work_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("only.txt"), "x").unwrap();
    let output = work_dir.path().join("out.zip");

    zippack_cmd()
        .env("NO_COLOR", "1")
        .args(["-vv", "--dir", arg(&src), "--output", arg(&output)])
        .assert()
        .success()
        .stdout(format!("{} => only.txt\n", src.join("only.txt").display()))
        .stderr(predicate::str::contains("Wrote 1 entries"));
}

#[test]
fn test_existing_output_is_overwritten() {
    let work_dir = tempdir().expect("Failed to create temp dir");
    let src = sample_tree(work_dir.path());
    let output = work_dir.path().join("out.zip");
    fs::write(&output, "not a zip").unwrap();

    zippack_cmd()
        .args(["--dir", arg(&src), "--output", arg(&output), "--quiet"])
        .assert()
        .success();

    assert_eq!(sorted_names(&output), vec!["a.txt", "sub/b.txt"]);
}
