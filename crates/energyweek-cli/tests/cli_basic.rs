//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. The
//! interactive track session is driven with a scripted stdin.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "energyweek-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a track session with the given stdin script.
fn run_track(input: &str) -> (String, String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "energyweek-cli", "--", "track", "--plain"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin script");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_commands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("track"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_track_empty_session_shows_placeholders() {
    let (stdout, _, code) = run_track("quit\n");
    assert_eq!(code, 0, "track session failed");
    assert!(stdout.contains("Weekly Energy Pattern Tracker"));
    assert!(stdout.contains("No consistent high energy times detected yet"));
    assert!(stdout.contains("No consistent patterns detected yet"));
    // Empty blocks average 0, so all three start out as challenge times.
    assert!(stdout.contains("Plan extra support or breaks during: morning, afternoon, evening"));
    assert!(stdout.contains("entries are not saved"));
}

#[test]
fn test_track_set_updates_patterns() {
    let script = "set mon morning high\n\
                  set tue morning high\n\
                  set wed morning high\n\
                  quit\n";
    let (stdout, _, code) = run_track(script);
    assert_eq!(code, 0);
    assert!(stdout.contains("monday morning -> High"));
    // Morning averages 4.0 across three matching days.
    assert!(stdout.contains("Schedule important tasks during your high energy periods: morning"));
    assert!(stdout.contains("You have consistent energy during: morning"));
}

#[test]
fn test_track_clear_reverts_cell() {
    let script = "set fri evening low\n\
                  clear fri evening\n\
                  quit\n";
    let (stdout, _, code) = run_track(script);
    assert_eq!(code, 0);
    assert!(stdout.contains("friday evening -> Low"));
    assert!(stdout.contains("friday evening -> unset"));
    assert!(stdout.contains("0/15 cells filled"));
}

#[test]
fn test_track_patterns_command_shows_averages() {
    let script = "set mon afternoon good\n\
                  set tue afternoon low\n\
                  patterns\n\
                  quit\n";
    let (stdout, _, code) = run_track(script);
    assert_eq!(code, 0);
    assert!(stdout.contains("Block averages:"));

    // Only the report after the `patterns` command reflects the final
    // grid; earlier recomputes see the partially filled block.
    let tail = stdout.rsplit("Block averages:").next().unwrap();
    // {3,2} averages 2.5: neither a best nor a challenge time.
    assert!(tail.contains("avg 2.5 over 2 day(s)"));
    assert!(!tail.contains("high energy periods: afternoon"));
    assert!(!tail.contains("breaks during: afternoon"));
}

#[test]
fn test_track_bad_input_keeps_session_alive() {
    let script = "set mon morning banana\n\
                  set someday morning high\n\
                  set mon morning good\n\
                  quit\n";
    let (stdout, stderr, code) = run_track(script);
    assert_eq!(code, 0, "parse errors must not end the session");
    assert!(stderr.contains("Unknown energy level: 'banana'"));
    assert!(stderr.contains("Unknown weekday: 'someday'"));
    assert!(stdout.contains("monday morning -> Good"));
}

#[test]
fn test_track_eof_ends_session() {
    let (stdout, _, code) = run_track("set mon morning rest\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("1/15 cells filled"));
}

#[test]
fn test_config_list_is_json() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("config list did not emit JSON");
    assert!(parsed.get("display").is_some());
}

#[test]
fn test_config_get_known_key() {
    let (stdout, _, code) = run_cli(&["config", "get", "display.emoji_labels"]);
    assert_eq!(code, 0);
    assert!(stdout.trim() == "true" || stdout.trim() == "false");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "display.theme"]);
    assert!(code != 0);
    assert!(stderr.contains("unknown key"));
}
