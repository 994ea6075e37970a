#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE_LOG: &str = "12:00:00,Job A,START,1001\n\
                              12:05:00,Job A,END,1001\n\
                              13:00:00,Job B,START,1002\n\
                              13:12:00,Job B,END,1002\n";

pub fn jr() -> Command {
    cargo_bin_cmd!("jobreport")
}

/// Write a log file with the given content inside the system temp dir
/// and return its path. The name keeps test files unique.
pub fn write_log(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobreport.log", name));
    fs::write(&path, content).expect("write test log");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
