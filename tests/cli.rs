use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

fn todo_sync() -> Command {
    let mut cmd = Command::cargo_bin("todo-sync").unwrap();
    cmd.env_remove("TODO_BOT_TOKEN")
        .env_remove("TODO_BOT_TAGS")
        .env_remove("TODO_BOT_NAME")
        .env_remove("TODO_BOT_COLOR")
        .env_remove("CI_PROJECT_ID")
        .env_remove("CI_API_V4_URL")
        .env_remove("CI_COMMIT_SHA")
        .env_remove("CI_PROJECT_URL");
    cmd
}

#[test]
fn missing_token_aborts_before_any_work() {
    todo_sync()
        .env("CI_PROJECT_ID", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TODO_BOT_TOKEN"));
}

#[test]
fn missing_project_id_aborts_before_any_work() {
    todo_sync()
        .env("TODO_BOT_TOKEN", "t")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CI_PROJECT_ID"));
}

#[test]
fn dry_run_reports_markers_without_network() {
    let dir = TempDir::new().unwrap();
    let mut file = File::create(dir.path().join("a.py")).unwrap();
    for _ in 0..9 {
        writeln!(file, "pass").unwrap();
    }
    writeln!(file, "# TODO: refactor").unwrap();

    todo_sync()
        .env("TODO_BOT_TOKEN", "t")
        .env("CI_PROJECT_ID", "1")
        .arg("--dry-run")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found <1> comments in code!"))
        .stdout(predicate::str::contains("[a.py L10] TODO: refactor"));
}

#[test]
fn dry_run_on_clean_tree_prints_only_the_count() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("clean.py")).unwrap();

    todo_sync()
        .env("TODO_BOT_TOKEN", "t")
        .env("CI_PROJECT_ID", "1")
        .arg("--dry-run")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::eq("Found <0> comments in code!\n"));
}

#[test]
fn keyword_inside_a_word_is_not_a_marker() {
    let dir = TempDir::new().unwrap();
    let mut file = File::create(dir.path().join("notes.txt")).unwrap();
    writeln!(file, "see the TODOLIST for details").unwrap();

    todo_sync()
        .env("TODO_BOT_TOKEN", "t")
        .env("CI_PROJECT_ID", "1")
        .arg("--dry-run")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found <0> comments in code!"));
}
