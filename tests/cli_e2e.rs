#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn taskz_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("taskz"));
    cmd.env("TASKZ_DATA", data_dir.as_os_str());
    cmd
}

#[test]
fn test_add_list_complete_filter_workflow() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    // 1. Add two tasks
    taskz_cmd(data)
        .args(["add", "water", "plants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (1): water plants"));

    taskz_cmd(data)
        .args(["add", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (2): buy milk"));

    // 2. Both show up pending
    taskz_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("water plants")
                .and(predicate::str::contains("buy milk"))
                .and(predicate::str::contains("[x]").not()),
        );

    // 3. Complete the first one
    taskz_cmd(data)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"));

    // 4. Completed filter shows only the first task
    taskz_cmd(data)
        .args(["list", "completed"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("water plants")
                .and(predicate::str::contains("buy milk").not())
                .and(predicate::str::contains("[completed]")),
        );

    // 5. Pending filter shows only the second
    taskz_cmd(data)
        .args(["list", "pending"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("buy milk")
                .and(predicate::str::contains("water plants").not()),
        );
}

#[test]
fn test_whitespace_task_is_rejected_silently() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    taskz_cmd(data)
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // Nothing was persisted
    assert!(!data.join("tasks.json").exists());

    taskz_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks!"));
}

#[test]
fn test_clear_empties_every_filter_view() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    taskz_cmd(data).args(["add", "water plants"]).assert().success();
    taskz_cmd(data).args(["add", "buy milk"]).assert().success();
    taskz_cmd(data).args(["done", "2"]).assert().success();

    taskz_cmd(data)
        .args(["clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 task(s)"));

    for filter in ["all", "pending", "completed"] {
        taskz_cmd(data)
            .args(["list", filter])
            .assert()
            .success()
            .stdout(predicate::str::contains("No tasks!"));
    }
}

#[test]
fn test_tasks_persist_across_invocations() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    taskz_cmd(data).args(["add", "water plants"]).assert().success();

    // Fresh process still sees the task, and assigns the next id after it
    taskz_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("water plants"));

    taskz_cmd(data)
        .args(["add", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (2): buy milk"));
}

#[test]
fn test_unknown_id_is_a_silent_noop() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    taskz_cmd(data).args(["add", "water plants"]).assert().success();

    taskz_cmd(data)
        .args(["done", "42"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    taskz_cmd(data)
        .args(["list", "pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("water plants"));
}

#[test]
fn test_malformed_store_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();
    fs::write(data.join("tasks.json"), "{ this is not json ]").unwrap();

    taskz_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks!"));

    // The store recovers on the next write
    taskz_cmd(data)
        .args(["add", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (1): buy milk"));
}

#[test]
fn test_delete_removes_single_task() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    taskz_cmd(data).args(["add", "water plants"]).assert().success();
    taskz_cmd(data).args(["add", "buy milk"]).assert().success();

    taskz_cmd(data)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 1"));

    taskz_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("buy milk")
                .and(predicate::str::contains("water plants").not()),
        );
}

#[test]
fn test_invalid_filter_fails() {
    let temp = TempDir::new().unwrap();

    taskz_cmd(temp.path())
        .args(["list", "done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown filter"));
}

#[test]
fn test_ui_session_round_trip() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    taskz_cmd(data)
        .args(["ui"])
        .write_stdin("add buy milk\ndone 1\ncompleted\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No tasks!")
                .and(predicate::str::contains("[x]"))
                .and(predicate::str::contains("buy milk")),
        );

    // The session persisted its mutations
    taskz_cmd(data)
        .args(["list", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"));
}

#[test]
fn test_config_set_and_show() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    taskz_cmd(data)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width = 80"));

    taskz_cmd(data)
        .args(["config", "line-width", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width = 100"));

    taskz_cmd(data)
        .args(["config", "line-width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width = 100"));
}
