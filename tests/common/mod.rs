//! Shared integration-test harness for running the `mirno` binary as a
//! child process.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to a YAML fixture under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Runs the `mirno` binary with the given arguments and waits for it.
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mirno"))
        .args(args)
        .env_remove("MIRNO_CONFIG")
        .env_remove("MIRNO_STORE")
        .env_remove("MIRNO_SPEECH_CMD")
        .env_remove("MIRNO_EVENTS")
        .output()
        .expect("failed to spawn mirno")
}

/// Stdout of a finished process as UTF-8.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished process as UTF-8.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
