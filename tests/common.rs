#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sst() -> Command {
    cargo_bin_cmd!("shiftsheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftsheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB through the CLI
pub fn init_db(db_path: &str) {
    sst()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Start a shift and return its id, read back from the `🆔 <id>` line
pub fn start_shift(db_path: &str, event: &str, name: &str, date: &str, at: &str) -> String {
    let out = sst()
        .args([
            "--db", db_path, "start", "--event", event, "--name", name, "--date", date, "--at",
            at,
        ])
        .output()
        .expect("run start");
    assert!(out.status.success(), "start failed: {:?}", out);

    let stdout = String::from_utf8_lossy(&out.stdout);
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("🆔 "))
        .map(|id| id.trim().to_string())
        .expect("shift id in output")
}

/// Record one complete 09:00-17:00 shift with a 10-minute break
pub fn record_day(db_path: &str, event: &str, name: &str, date: &str) -> String {
    let id = start_shift(db_path, event, name, date, "09:00");

    sst()
        .args(["--db", db_path, "break-start", &id, "--kind", "10", "--at", "12:00"])
        .assert()
        .success();
    sst()
        .args(["--db", db_path, "break-end", &id, "--at", "12:10"])
        .assert()
        .success();
    sst()
        .args(["--db", db_path, "end", &id, "--at", "17:00", "--yes"])
        .assert()
        .success();

    id
}
