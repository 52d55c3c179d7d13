use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn flowstate(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flowstate"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("FLOWSTATE_FILE");
    cmd
}

#[test]
fn pretty_list_groups_completed_tasks() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("tasks.txt"),
        "Work|Ship v1,,,High,false\nWork|Old release,,,Low,true\n",
    )
    .unwrap();

    flowstate(dir.path())
        .args(["list", "--tab", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work (2)"))
        .stdout(predicate::str::contains("1. [H] Ship v1"))
        .stdout(predicate::str::contains("> Completed"))
        .stdout(predicate::str::contains("2. [L] Old release"));
}

#[test]
fn pretty_list_marks_empty_tabs() {
    let dir = tempdir().unwrap();

    flowstate(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal (0)"))
        .stdout(predicate::str::contains("(empty) No tasks yet."));
}

#[test]
fn pretty_show_after_add_has_no_project() {
    let dir = tempdir().unwrap();

    flowstate(dir.path())
        .args(["add", "Design review", "--tab", "Work"])
        .assert()
        .success();

    flowstate(dir.path())
        .args(["show", "Work", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design review"))
        .stdout(predicate::str::contains("due: No date"))
        .stdout(predicate::str::contains("project:").not());
}

#[test]
fn pretty_rename_of_default_tab_notes_it_stays() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tasks.txt"), "Personal|Call mom,,,Medium,false\n").unwrap();

    flowstate(dir.path())
        .args(["tab", "rename", "Personal", "Family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tab renamed to: Family"))
        .stdout(predicate::str::contains("default tab Personal stays, empty"));
}

#[test]
fn pretty_errors_are_plain_text() {
    let dir = tempdir().unwrap();

    flowstate(dir.path())
        .args(["tab", "delete", "General"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: tab 'General' is protected"));
}

#[test]
fn minimal_format_prints_table() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tasks.txt"), "Personal|Call mom,,,Medium,false\n").unwrap();

    flowstate(dir.path())
        .args(["--format", "minimal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TAB"))
        .stdout(predicate::str::contains("Call mom"));
}
