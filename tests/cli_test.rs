use std::fs::{self, File, create_dir};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn sqlbatches() -> Command {
    Command::cargo_bin("sqlbatches").expect("Binary should be built")
}

#[test]
fn test_default_directory_without_arguments() {
    let temp_dir = tempdir().unwrap();
    let batches = temp_dir.path().join("postcode_batches");
    create_dir(&batches).unwrap();
    File::create(batches.join("batch_002.sql")).unwrap();
    File::create(batches.join("batch_001.sql")).unwrap();
    File::create(batches.join("notes.txt")).unwrap();

    let output = sqlbatches().current_dir(temp_dir.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<&str> = stdout.lines().filter(|l| l.starts_with("BATCH|")).collect();
    assert_eq!(records.len(), 2);
    assert!(records[0].starts_with("BATCH|1|2|"));
    assert!(records[0].ends_with("batch_001.sql"));
    assert!(records[1].starts_with("BATCH|2|2|"));
    assert!(records[1].ends_with("batch_002.sql"));

    let path = records[0].splitn(4, '|').nth(3).unwrap();
    assert!(std::path::Path::new(path).is_absolute());
}

#[test]
fn test_directory_flag() {
    let temp_dir = tempdir().unwrap();
    File::create(temp_dir.path().join("batch_a.sql")).unwrap();

    let expected = format!("BATCH|1|1|{}", temp_dir.path().join("batch_a.sql").display());

    sqlbatches()
        .arg("--directory")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total batches to process: 1"))
        .stdout(predicate::str::contains(expected))
        .stdout(predicate::str::contains("Total: 1 batch files ready for import"));
}

#[test]
fn test_empty_directory() {
    let temp_dir = tempdir().unwrap();

    sqlbatches()
        .arg("-d")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("Total batches to process: 0\n\n\nTotal: 0 batch files ready for import\n");
}

#[test]
fn test_missing_directory_fails() {
    let temp_dir = tempdir().unwrap();

    sqlbatches()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("BATCH|").not())
        .stderr(predicate::str::contains("postcode_batches"));
}

#[test]
fn test_report_stays_on_stdout_with_verbose_logging() {
    let temp_dir = tempdir().unwrap();
    File::create(temp_dir.path().join("batch_1.sql")).unwrap();

    sqlbatches()
        .arg("-vv")
        .arg("-d")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 batch files").not())
        .stderr(predicate::str::contains("batch files in"));
}

#[test]
fn test_banner_format() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("batch_1.sql"), "SELECT 1;").unwrap();

    sqlbatches()
        .args(["--format", "banner", "-d"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("Found 1 batch files to process\n\n===== BATCH 1/1 (batch_1.sql) =====\nSELECT 1;\n\n");
}

#[test]
fn test_config_file() {
    let temp_dir = tempdir().unwrap();
    let batches = temp_dir.path().join("exports");
    create_dir(&batches).unwrap();
    File::create(batches.join("batch_Part_1.sql")).unwrap();
    File::create(batches.join("batch_1.sql")).unwrap();

    let config = temp_dir.path().join("settings.yaml");
    fs::write(&config, "directory:\n  - exports\npattern: \"batch_Part_*.sql\"\n").unwrap();

    sqlbatches()
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("BATCH|1|1|"))
        .stdout(predicate::str::contains("batch_Part_1.sql"));
}

#[test]
fn test_config_file_in_working_directory_is_ignored() {
    let temp_dir = tempdir().unwrap();
    let batches = temp_dir.path().join("postcode_batches");
    create_dir(&batches).unwrap();
    File::create(batches.join("batch_001.sql")).unwrap();
    fs::write(
        temp_dir.path().join("sql_batches.yaml"),
        "pattern: \"nomatch_*.sql\"\n",
    )
    .unwrap();

    sqlbatches()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BATCH|1|1|"))
        .stdout(predicate::str::contains("batch_001.sql"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = tempdir().unwrap();

    sqlbatches()
        .arg("-c")
        .arg(temp_dir.path().join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yaml"));
}

#[test]
fn test_invalid_pattern_fails() {
    let temp_dir = tempdir().unwrap();

    sqlbatches()
        .args(["-p", "batch_[.sql", "-d"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("batch_[.sql"));
}

#[test]
fn test_invalid_format_is_a_usage_error() {
    sqlbatches()
        .args(["--format", "json"])
        .assert()
        .failure()
        .code(2);
}
