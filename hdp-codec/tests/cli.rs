use std::{fs, process::Command};

use test_log::test;

const COMPUTE_OUTPUTS: &str = env!("CARGO_BIN_EXE_compute-outputs");
const JOB_OUTPUTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tests/job_outputs.json");
const JOB_OUTPUTS_ABI: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tests/job_outputs.abi");

#[test]
fn test_compute_outputs_prints_abi_hex() {
    let output = Command::new(COMPUTE_OUTPUTS).arg(JOB_OUTPUTS).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let expected = fs::read_to_string(JOB_OUTPUTS_ABI).unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), expected.trim());
}

#[test]
fn test_compute_outputs_missing_argument() {
    let output = Command::new(COMPUTE_OUTPUTS).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_compute_outputs_unreadable_file() {
    let missing = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tests/no_such_file.json");
    let output = Command::new(COMPUTE_OUTPUTS).arg(missing).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open file"));
}
