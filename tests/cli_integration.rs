//! Integration tests for the `pl` CLI.
//!
//! Each test runs `pl` as a subprocess against the built-in demo board and
//! verifies stdout. Every invocation reseeds, so tests are order-free.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the built `pl` binary.
fn pl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("pl");
    path
}

/// Run `pl` with the given args, returning (stdout, stderr, success).
fn run_pl(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(pl_bin())
        .args(args)
        .output()
        .expect("failed to run pl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `pl` expecting success, return stdout.
fn run_pl_ok(args: &[&str]) -> String {
    let (stdout, stderr, success) = run_pl(args);
    if !success {
        panic!(
            "pl {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

// ---------------------------------------------------------------------------
// Read command tests
// ---------------------------------------------------------------------------

#[test]
fn test_list_shows_the_seed() {
    let out = run_pl_ok(&["list"]);
    assert!(out.contains("task1"));
    assert!(out.contains("Design new UI presentation"));
    assert!(out.contains("task11"));
}

#[test]
fn test_list_json_has_eleven_tasks() {
    let out = run_pl_ok(&["list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 11);
    assert_eq!(tasks[0]["id"], "task1");
    assert_eq!(tasks[0]["tier"], "amber");
}

#[test]
fn test_list_filters_by_project() {
    let out = run_pl_ok(&["list", "--project", "design", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["task1", "task2", "task3", "task5", "task6"]);
}

#[test]
fn test_list_status_and_sort_compose() {
    let out = run_pl_ok(&[
        "list", "--status", "done", "--sort", "title", "--order", "desc", "--json",
    ]);
    let tasks: serde_json::Value = serde_json::from_str(&out).unwrap();
    let titles: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        [
            "Make twitter banner",
            "Launch product promotion",
            "Add product to the market"
        ]
    );
}

#[test]
fn test_show_includes_comments_and_activity() {
    let out = run_pl_ok(&["show", "task1"]);
    assert!(out.contains("Design new UI presentation"));
    assert!(out.contains("Let's try to complete this by Friday."));
    assert!(out.contains("status_changed"));
}

#[test]
fn test_board_column_counts() {
    let out = run_pl_ok(&["board"]);
    assert!(out.contains("To do (4)"));
    assert!(out.contains("In progress (4)"));
    assert!(out.contains("Done (3)"));
}

#[test]
fn test_stats_json() {
    let out = run_pl_ok(&["stats", "--json"]);
    let stats: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(stats["counts"]["todo"], 4);
    assert_eq!(stats["counts"]["in_progress"], 4);
    assert_eq!(stats["counts"]["done"], 3);
    assert_eq!(stats["completion"], 27);
}

#[test]
fn test_projects_show_health() {
    let out = run_pl_ok(&["projects"]);
    assert!(out.contains("User flow"));
    assert!(out.contains("Completed"));
    assert!(out.contains("Just Started"));
}

#[test]
fn test_users_listing() {
    let out = run_pl_ok(&["users"]);
    assert!(out.contains("John"));
    assert!(out.contains("Sarah"));
    assert!(out.contains("Alex"));

    let detail = run_pl_ok(&["users", "user2"]);
    assert!(detail.contains("5 tasks"));
    assert!(detail.contains("20% complete"));
}

// ---------------------------------------------------------------------------
// Write command tests
// ---------------------------------------------------------------------------

#[test]
fn test_move_prints_the_updated_row() {
    let out = run_pl_ok(&["move", "task1", "done"]);
    assert!(out.contains("task1"));
    assert!(out.contains("done"));
}

#[test]
fn test_move_unknown_task_fails() {
    let (_, stderr, success) = run_pl(&["move", "task99", "done"]);
    assert!(!success);
    assert!(stderr.contains("task not found"));
}

#[test]
fn test_move_rejects_unknown_status() {
    let (_, stderr, success) = run_pl(&["move", "task1", "archived"]);
    assert!(!success);
    assert!(stderr.contains("unknown status"));
}

#[test]
fn test_add_creates_task12() {
    let out = run_pl_ok(&["add", "X", "Y", "--json"]);
    let task: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(task["id"], "task12");
    assert_eq!(task["status"], "todo");
    assert_eq!(task["progress"], 0);
    assert_eq!(task["total_progress"], 10);
}

#[test]
fn test_add_requires_a_title() {
    let (_, stderr, success) = run_pl(&["add", "", "Y"]);
    assert!(!success);
    assert!(stderr.contains("title is required"));
}

#[test]
fn test_delete_reports_remaining_count() {
    let out = run_pl_ok(&["delete", "task5"]);
    assert!(out.contains("10 tasks remain"));
}

#[test]
fn test_comment_bumps_the_counter() {
    let out = run_pl_ok(&["comment", "task2", "looks good", "--json"]);
    let task: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(task["comments"], 1);
}

// ---------------------------------------------------------------------------
// Reminders and chats
// ---------------------------------------------------------------------------

#[test]
fn test_reminders_listing_and_add() {
    let out = run_pl_ok(&["reminders"]);
    assert!(out.contains("Team meeting"));
    assert!(out.contains("High"));

    let out = run_pl_ok(&[
        "reminders", "add", "Standup", "--time", "Mon, 9:30 AM", "--priority", "low",
    ]);
    assert!(out.contains("reminder4"));
    assert!(out.contains("Standup"));
}

#[test]
fn test_chats_listing_marks_unread() {
    let out = run_pl_ok(&["chats"]);
    assert!(out.contains("Team Chat (5 unread)"));
    assert!(out.contains("Design\n") || out.trim_end().ends_with("Design"));
}

#[test]
fn test_chat_send_appends_to_history() {
    let out = run_pl_ok(&["chats", "send", "messenger1", "on my way"]);
    assert!(out.contains("Team Chat (4 messages)"));
    assert!(out.contains("John: on my way"));
}
