//! Integration tests for the blitzplan binary.
//!
//! Spawns the planner process with command-line options, feeds scenarios
//! on stdin where needed, and checks the report on stdout.

use std::io::Write;
use std::process::{Command, Stdio};

/// Output of one planner run.
struct Run {
    success: bool,
    stdout: String,
    stderr: String,
}

/// Runs the planner with `args`, writing `input` to its stdin.
fn run_planner(args: &[&str], input: &str) -> Run {
    let exe = env!("CARGO_BIN_EXE_blitzplan");
    let mut child = Command::new(exe)
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start blitzplan");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input.as_bytes()).unwrap();
    drop(stdin);

    let output = child.wait_with_output().expect("failed to wait on child");
    Run {
        success: output.status.success(),
        stdout: String::from_utf8(output.stdout).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
    }
}

/// The standard scenario with defenses low enough to take everything.
const WINNABLE: &str = r#"{
    "budget": 20,
    "troop_strengths": {"infantry": 1, "cavalry": 3, "artillery": 5},
    "territories": [
        {"id": 1, "defense": 5, "terrain": "plano"},
        {"id": 2, "defense": 6, "terrain": "montaña"},
        {"id": 3, "defense": 4, "terrain": "fortaleza"}
    ]
}"#;

#[test]
fn default_scenario_text_report() {
    let run = run_planner(&[], "");
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Troop compositions (44):"));
    assert!(run.stdout.contains("Attack orders (6): [1, 3, 2], [1, 2, 3]"));
    assert!(run.stdout.contains("Evaluated pairs: 264\n"));
    assert!(run.stdout.contains("Successful campaigns (0): none"));
    assert!(run
        .stdout
        .contains("Best campaign: composition (1, 1, 2) order [1, 3, 2] conquered 1 of 3"));
}

#[test]
fn scenario_from_stdin_finds_full_conquest() {
    let run = run_planner(&["--config", "-"], WINNABLE);
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run
        .stdout
        .contains("Best campaign: composition (1, 1, 3) order [3, 1, 2] conquered 3 of 3\n"));
    assert!(run.stdout.contains("territory 3 (fortress): lead with 3 artillery"));
    assert!(run.stdout.contains("territory 1 (plain): lead with 1 cavalry"));
    assert!(run.stdout.contains("territory 2 (mountain): lead with 1 infantry"));
}

#[test]
fn json_report_lists_successful_campaigns() {
    let run = run_planner(&["--config", "-", "--json"], WINNABLE);
    assert!(run.success, "stderr: {}", run.stderr);
    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(value["nodes"], 264);
    assert_eq!(value["best"]["success"], true);
    assert_eq!(value["best"]["conquered"], 3);
    let successful = value["successful"].as_array().unwrap();
    assert_eq!(successful.len(), 204);
    assert!(successful.iter().all(|r| r["success"] == true));
}

#[test]
fn as_listed_changes_tie_break_only() {
    let run = run_planner(&["--config", "-", "--as-listed", "--json"], WINNABLE);
    assert!(run.success, "stderr: {}", run.stderr);
    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(value["best"]["conquered"], 3);
    assert_eq!(value["best"]["order"], serde_json::json!([1, 2, 3]));
    assert_eq!(value["successful"].as_array().unwrap().len(), 204);
}

#[test]
fn parallel_run_matches_sequential_output() {
    let seq = run_planner(&["--config", "-", "--json"], WINNABLE);
    let par = run_planner(&["--config", "-", "--json", "--threads", "4"], WINNABLE);
    assert!(seq.success && par.success);
    assert_eq!(seq.stdout, par.stdout);
}

#[test]
fn negative_budget_is_rejected() {
    let run = run_planner(&["--budget", "-3"], "");
    assert!(!run.success);
    assert!(run.stderr.contains("budget must be non-negative"), "stderr: {}", run.stderr);
    assert!(run.stdout.is_empty());
}

#[test]
fn negative_defense_is_rejected() {
    let scenario = r#"{"budget": 20, "territories": [{"id": 7, "defense": -1}]}"#;
    let run = run_planner(&["--config", "-"], scenario);
    assert!(!run.success);
    assert!(run.stderr.contains("territory 7 has negative defense -1"));
}

#[test]
fn zero_strength_is_rejected() {
    let scenario = r#"{
        "budget": 20,
        "troop_strengths": {"infantry": 1, "cavalry": 0, "artillery": 5},
        "territories": []
    }"#;
    let run = run_planner(&["--config", "-"], scenario);
    assert!(!run.success);
    assert!(run.stderr.contains("cavalry strength must be positive"));
}

#[test]
fn malformed_json_is_rejected() {
    let run = run_planner(&["--config", "-"], "{ not json");
    assert!(!run.success);
    assert!(run.stderr.contains("failed to parse scenario"));
}

#[test]
fn zero_budget_reports_no_best() {
    let run = run_planner(&["--budget", "0"], "");
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Troop compositions (0): none"));
    assert!(run.stdout.contains("Best campaign: none (no composition fits the budget)"));
}

#[test]
fn empty_board_is_trivial_success() {
    let run = run_planner(&["--config", "-", "--budget", "9"], r#"{"budget": 20}"#);
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Attack orders (1): []"));
    assert!(run.stdout.contains("Best campaign: composition (1, 1, 1) order [] conquered 0 of 0\n"));
}

#[test]
fn node_limit_marks_report_incomplete() {
    let run = run_planner(&["--nodes", "7"], "");
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Evaluated pairs: 7 (search stopped early)"));
}

#[test]
fn node_limit_bounds_a_twelve_territory_board() {
    let run = run_planner(&["--random", "12", "--seed", "5", "--nodes", "3", "--json"], "");
    assert!(run.success, "stderr: {}", run.stderr);
    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(value["territories"], 12);
    assert_eq!(value["nodes"], 3);
    assert_eq!(value["complete"], false);
    assert_eq!(value["orders"].as_array().unwrap().len(), 3);
}

#[test]
fn random_scenario_is_reproducible() {
    let a = run_planner(&["--random", "4", "--seed", "42", "--json"], "");
    let b = run_planner(&["--random", "4", "--seed", "42", "--json"], "");
    assert!(a.success && b.success);
    assert_eq!(a.stdout, b.stdout);
    let value: serde_json::Value = serde_json::from_str(&a.stdout).unwrap();
    assert_eq!(value["territories"], 4);
    assert_eq!(value["orders"].as_array().unwrap().len(), 24);
}

#[test]
fn interactive_session() {
    let answers = "20\n1\n3\n5\n2\n5\nplano\n6\nswamp\n";
    let run = run_planner(&["--interactive"], answers);
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Maximum points available:"));
    assert!(run.stdout.contains("Terrain of territory 2"));
    assert!(run.stdout.contains("conquered 2 of 2"));
    // Unknown terrain falls back to cavalry.
    assert!(run.stdout.contains("territory 2 (swamp): lead with"));
    assert!(run.stdout.contains("cavalry"));
}

#[test]
fn interactive_session_cut_short() {
    let run = run_planner(&["--interactive"], "20\n1\n");
    assert!(!run.success);
    assert!(run.stderr.contains("input ended"));
}
