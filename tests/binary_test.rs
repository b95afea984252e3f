mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sprout_cmd(templates: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sprout").unwrap();
    cmd.env("SPROUT_TEMPLATES_DIR", templates.path());
    cmd
}

#[test]
fn test_invalid_template_exits_without_writing() {
    let root = common::templates_root();
    let target = TempDir::new().unwrap();

    sprout_cmd(&root)
        .args(["--template", "nope", "--git"])
        .arg(target.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid template name 'nope'"))
        .stderr(predicate::str::contains("demo"));

    assert_eq!(std::fs::read_dir(target.path()).unwrap().count(), 0);
}

#[test]
fn test_scaffold_into_target() {
    let root = common::templates_root();
    let target = TempDir::new().unwrap();

    sprout_cmd(&root)
        .args(["--template", "DEMO"])
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Ready!"))
        .stdout(predicate::str::contains("Pass --install to automatically install dependencies."));

    assert_eq!(common::read_tree(target.path()), vec!["a.txt", "sub/b.txt"]);
}

#[test]
fn test_defaults_to_current_directory() {
    let root = common::templates_root();
    let cwd = TempDir::new().unwrap();

    sprout_cmd(&root)
        .args(["-t", "demo"])
        .current_dir(cwd.path())
        .assert()
        .success();

    assert_eq!(common::read_tree(cwd.path()), vec!["a.txt", "sub/b.txt"]);
}

#[test]
fn test_list_templates() {
    let root = common::templates_root();

    sprout_cmd(&root)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::eq("demo\n"));
}

#[test]
fn test_missing_template_prints_help() {
    let root = common::templates_root();

    sprout_cmd(&root)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("--template"));
}

#[test]
fn test_failed_task_exits_non_zero() {
    let root = common::templates_root();
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("occupied");
    std::fs::write(&target, "not a directory").unwrap();

    sprout_cmd(&root)
        .args(["-t", "demo", "--git"])
        .arg(&target)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✖ Copy Project Files"))
        .stdout(predicate::str::contains("Project Ready!").not())
        .stderr(predicate::str::contains("1 task(s) failed"));

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "not a directory");
}
