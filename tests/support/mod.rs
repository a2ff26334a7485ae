use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for roster, isolated from any ambient roster file setting
pub fn roster() -> Command {
    let mut cmd = cargo_bin_cmd!("roster");
    cmd.env_remove("ROSTER_FILE")
        .env_remove("ROSTER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a temp dir containing `students.txt` with the given contents
pub fn setup_roster_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[allow(dead_code)]
pub fn read_roster_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
