//! Common test utilities for process-level tests.
//!
//! The runtime talks to the real stdin/stdout and can terminate the process,
//! so each scenario re-runs the current test binary filtered down to a single
//! test. Inside that child the scenario body runs against piped stdio.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const CHILD_ENV: &str = "FATLANG_RUNTIME_CHILD";

/// Written by the child right before the scenario body starts.
const MARKER: &[u8] = b"<<<";

/// Runs `body` in a child process fed with `stdin`.
///
/// In the parent this spawns the child and returns its output. In the child
/// it runs `body` and exits with status 0 unless `body` exits first, so it
/// never returns.
pub fn run_child(test_name: &str, stdin: &[u8], body: impl FnOnce()) -> Output {
    if std::env::var_os(CHILD_ENV).is_some() {
        let mut out = std::io::stdout();
        out.write_all(MARKER).expect("Failed to write marker");
        out.flush().expect("Failed to flush marker");
        body();
        fatlang_runtime::__ext_exit(0);
    }

    let exe = std::env::current_exe().expect("Failed to locate test binary");
    let mut child = Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn child test");

    let mut child_stdin = child.stdin.take().expect("Child stdin is piped");
    child_stdin.write_all(stdin).expect("Failed to feed child stdin");
    drop(child_stdin);

    child.wait_with_output().expect("Failed to wait for child")
}

/// The bytes the scenario body wrote to stdout.
pub fn program_stdout(output: &Output) -> String {
    let stdout = &output.stdout;
    let start = stdout
        .windows(MARKER.len())
        .position(|window| window == MARKER)
        .unwrap_or_else(|| {
            panic!(
                "Child never reached the scenario body\nstdout: {}\nstderr: {}",
                String::from_utf8_lossy(stdout),
                String::from_utf8_lossy(&output.stderr)
            )
        });
    String::from_utf8_lossy(&stdout[start + MARKER.len()..]).into_owned()
}
