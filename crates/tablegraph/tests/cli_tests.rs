//! Integration tests for the tablegraph CLI.
//!
//! These tests run the built binary against small exports in temporary
//! directories, with explanations turned off.

use rstest::{fixture, rstest};
use serde_json::Value;
use tempfile::TempDir;

mod common;
use common::{
    SAMPLE_EXPORT, run_tablegraph_in_dir, run_tablegraph_with_stdin, stdout_of, write_export,
};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provides a temporary directory containing `deps.csv`
#[fixture]
fn export_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    write_export(temp.path(), SAMPLE_EXPORT);
    temp
}

fn run(dir: &TempDir, args: &[&str]) -> String {
    let mut full = vec!["--input", "deps.csv", "--no-explain"];
    full.extend_from_slice(args);
    stdout_of(&run_tablegraph_in_dir(dir.path(), &full))
}

fn run_json(dir: &TempDir, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    serde_json::from_str(&run(dir, &full)).expect("stdout is JSON")
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[rstest]
fn test_cli_help(export_dir: TempDir) {
    let stdout = stdout_of(&run_tablegraph_in_dir(export_dir.path(), &["--help"]));

    assert!(stdout.contains("Usage:"));
    for command in ["ask", "deps", "users", "show", "suggest", "info"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

#[rstest]
fn test_cli_version(export_dir: TempDir) {
    let stdout = stdout_of(&run_tablegraph_in_dir(export_dir.path(), &["--version"]));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Query Commands
// ============================================================================

#[rstest]
fn test_deps_direct(export_dir: TempDir) {
    let stdout = run(&export_dir, &["deps", "sales.orders"]);

    assert!(stdout.contains("Direct dependencies of 'SALES.ORDERS':"));
    assert!(stdout.contains("  • REF.CLIENTS\n  • REF.PRODUCTS\n"));
    assert!(stdout.contains("Total: 2 items"));
}

#[rstest]
fn test_deps_indirect_json(export_dir: TempDir) {
    let json = run_json(&export_dir, &["deps", "BI.REVENUE", "--indirect"]);

    assert_eq!(json["status"], "found");
    assert_eq!(
        json["result"],
        serde_json::json!(["REF.CLIENTS", "REF.PRODUCTS", "SALES.ORDERS"])
    );
}

#[rstest]
fn test_users_keeps_display_spelling(export_dir: TempDir) {
    let json = run_json(&export_dir, &["users", "Sales.Orders"]);

    assert_eq!(json["result"], serde_json::json!(["BI.REVENUE", "sales.lines"]));
}

#[rstest]
fn test_leaf_has_no_dependencies(export_dir: TempDir) {
    let stdout = run(&export_dir, &["deps", "ref.products"]);

    assert!(stdout.contains("Direct dependencies of 'REF.PRODUCTS':"));
    assert!(stdout.contains("No items found"));
}

#[rstest]
fn test_show_both_directions(export_dir: TempDir) {
    let stdout = run(&export_dir, &["show", "sales.orders"]);

    assert!(stdout.contains("Full analysis for 'SALES.ORDERS':"));
    assert!(stdout.contains("Direct dependencies:\n  • REF.CLIENTS"));
    assert!(stdout.contains("Direct users:\n  • BI.REVENUE"));
}

#[rstest]
fn test_name_with_inner_space(export_dir: TempDir) {
    write_export(export_dir.path(), "table;uses\nSALES.ORDER LINES;REF.PRODUCTS\n");

    let json = run_json(&export_dir, &["deps", " sales.order lines "]);

    assert_eq!(json["status"], "found");
    assert_eq!(json["result"], serde_json::json!(["REF.PRODUCTS"]));
}

#[rstest]
fn test_unknown_name_is_not_an_error(export_dir: TempDir) {
    let stdout = run(&export_dir, &["deps", "sales.ordrs"]);

    assert!(stdout.contains("'SALES.ORDRS' does not exist."));
    assert!(stdout.contains("Similar names:"));
    assert!(stdout.contains("SALES.ORDERS"));
}

#[rstest]
fn test_unknown_name_json(export_dir: TempDir) {
    let json = run_json(&export_dir, &["users", "nowhere.table"]);

    assert_eq!(json["status"], "unknown");
    assert_eq!(json["result"]["name"], "NOWHERE.TABLE");
    assert_eq!(json["result"]["suggestions"], serde_json::json!([]));
}

#[rstest]
fn test_suggest_json(export_dir: TempDir) {
    let json = run_json(&export_dir, &["suggest", "SALES.x"]);

    assert_eq!(json, serde_json::json!(["sales.lines", "SALES.ORDERS"]));
}

#[rstest]
fn test_info_json(export_dir: TempDir) {
    let json = run_json(&export_dir, &["info"]);

    assert_eq!(json["names"], 5);
    assert_eq!(json["dependencies"], 5);
    assert_eq!(json["skipped_records"], 0);
    assert_eq!(json["headers"], serde_json::json!(["table", "depends_on", "via"]));
    assert!(json["explain_model"].is_null());
}

// ============================================================================
// Questions
// ============================================================================

#[rstest]
fn test_ask_single_question(export_dir: TempDir) {
    let stdout = run(
        &export_dir,
        &["ask", "quelles sont les dépendances indirectes de bi.revenue ?"],
    );

    assert!(stdout.contains("Indirect dependencies of 'BI.REVENUE':"));
    assert!(stdout.contains("Total: 3 items"));
}

#[rstest]
fn test_interactive_session_from_stdin(export_dir: TempDir) {
    let output = run_tablegraph_with_stdin(
        export_dir.path(),
        &["--input", "deps.csv", "--no-explain"],
        "hello\nwho uses ref.clients\nquit\n",
    );
    let stdout = stdout_of(&output);

    assert!(stdout.contains("5 names, 5 dependencies loaded"));
    assert!(stdout.contains("How can I help you"));
    assert!(stdout.contains("Users of 'REF.CLIENTS':\n  • SALES.ORDERS\n"));
    assert!(stdout.trim_end().ends_with("Goodbye!"));
}

#[rstest]
fn test_interactive_session_ends_at_eof(export_dir: TempDir) {
    let output = run_tablegraph_with_stdin(
        export_dir.path(),
        &["--input", "deps.csv", "--no-explain", "ask"],
        "sales.orders\n",
    );
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Full analysis for 'SALES.ORDERS':"));
    assert!(stdout.trim_end().ends_with("Goodbye!"));
}

#[rstest]
fn test_json_session_prints_only_results(export_dir: TempDir) {
    let output = run_tablegraph_with_stdin(
        export_dir.path(),
        &["--input", "deps.csv", "--no-explain", "--json"],
        "hello\nwho uses ref.clients\nquit\n",
    );
    let json: Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is JSON");

    assert_eq!(json["result"], serde_json::json!(["SALES.ORDERS"]));
}

// ============================================================================
// Configuration and Input Handling
// ============================================================================

#[rstest]
fn test_config_file_supplies_input(export_dir: TempDir) {
    write_export(export_dir.path(), "A.X,A.Y\nA.Y,A.Z\n");
    std::fs::write(
        export_dir.path().join("tablegraph.yaml"),
        concat!(
            "input:\n  path: deps.csv\n  delimiter: \",\"\n  encoding: utf-8\n",
            "  has-headers: false\nexplain:\n  enabled: false\n",
        ),
    )
    .unwrap();

    let output = run_tablegraph_in_dir(export_dir.path(), &["--json", "deps", "a.x", "--indirect"]);
    let json: Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    assert_eq!(json["result"], serde_json::json!(["A.Y", "A.Z"]));
}

#[rstest]
fn test_flags_override_config_file(export_dir: TempDir) {
    std::fs::write(
        export_dir.path().join("tablegraph.yaml"),
        "input:\n  path: missing.csv\n",
    )
    .unwrap();

    let output = run_tablegraph_in_dir(
        export_dir.path(),
        &["--input", "deps.csv", "--no-explain", "--json", "info"],
    );
    let json: Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    assert_eq!(json["names"], 5);
}

#[rstest]
fn test_no_headers_keeps_first_line(export_dir: TempDir) {
    let json = run_json(&export_dir, &["--no-headers", "info"]);

    // The header line becomes a row of three more names.
    assert_eq!(json["names"], 8);
    assert!(json["headers"].is_null());
}

#[rstest]
fn test_latin1_export(export_dir: TempDir) {
    std::fs::write(
        export_dir.path().join("deps.csv"),
        b"table;uses\nFIN.\xC9CRITURES;FIN.COMPTES\n",
    )
    .unwrap();

    let json = run_json(&export_dir, &["deps", "fin.\u{e9}critures"]);

    assert_eq!(json["status"], "found");
    assert_eq!(json["result"], serde_json::json!(["FIN.COMPTES"]));
}

#[rstest]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_tablegraph_in_dir(temp.path(), &["--no-explain", "info"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No input file"));
}

#[rstest]
fn test_unreadable_input_fails(export_dir: TempDir) {
    let output = run_tablegraph_in_dir(
        export_dir.path(),
        &["--input", "absent.csv", "--no-explain", "info"],
    );

    assert!(!output.status.success());
}

#[rstest]
fn test_invalid_delimiter_rejected_at_parse_time(export_dir: TempDir) {
    let output = run_tablegraph_in_dir(export_dir.path(), &["--delimiter", "ab", "info"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Delimiter"));
}
