//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Semicolon-separated export with a header line, as written by spreadsheets.
pub const SAMPLE_EXPORT: &str = "\
table;depends_on;via
SALES.ORDERS;REF.CLIENTS;REF.PRODUCTS
BI.REVENUE;SALES.ORDERS
BI.REVENUE;;
sales.lines;SALES.ORDERS
";

/// Write `content` as `deps.csv` inside `dir` and return its path.
pub fn write_export(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("deps.csv");
    std::fs::write(&path, content).expect("Failed to write export");
    path
}

fn command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tablegraph"));
    command
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    command
}

/// Run the tablegraph binary in the specified directory
pub fn run_tablegraph_in_dir(dir: &Path, args: &[&str]) -> Output {
    command(dir, args)
        .output()
        .expect("Failed to execute tablegraph binary")
}

/// Run the tablegraph binary with `stdin` piped in
pub fn run_tablegraph_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = command(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tablegraph binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for tablegraph binary")
}

/// Stdout of a successful run, as text.
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
