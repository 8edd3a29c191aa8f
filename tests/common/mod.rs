//! Common test utilities for CLI tests.

use std::process::{Command, Output};

/// Run the `fatlang` binary with `args` and capture its output.
pub fn run_fatlang(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fatlang"))
        .args(args)
        .output()
        .expect("Failed to execute fatlang")
}

/// Stdout of a run that must have succeeded.
pub fn success_stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "fatlang exited with {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}
