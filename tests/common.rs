#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hb() -> Command {
    cargo_bin_cmd!("hourblocks")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourblocks.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourblocks_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB through the CLI (no config file written)
pub fn init_db(db_path: &str) {
    hb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// `hourblocks --db <db> --user tester <args..>`
pub fn hb_as_tester(db_path: &str, args: &[&str]) -> Command {
    let mut cmd = hb();
    cmd.args(["--db", db_path, "--user", "tester"]).args(args);
    cmd
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Monday 2025-03-10 .. Sunday 2025-03-16
pub const WEEK: [&str; 7] = [
    "2025-03-10",
    "2025-03-11",
    "2025-03-12",
    "2025-03-13",
    "2025-03-14",
    "2025-03-15",
    "2025-03-16",
];

pub fn week_days() -> Vec<NaiveDate> {
    WEEK.iter().map(|s| d(s)).collect()
}
