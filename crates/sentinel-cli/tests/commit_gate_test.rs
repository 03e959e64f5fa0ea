use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn git(repo: &Path, args: &[&str]) -> std::process::Output {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("git invocation failed")
}

fn init_repo(repo: &Path) {
    assert!(git(repo, &["init"]).status.success());
    assert!(git(repo, &["config", "user.email", "you@example.com"])
        .status
        .success());
    assert!(git(repo, &["config", "user.name", "Your Name"])
        .status
        .success());
}

fn sentinel() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sentinel"))
}

#[test]
fn commit_is_rejected_when_staged_file_has_blocking_marker() {
    let dir = tempdir().unwrap();
    let repo = dir.path();
    init_repo(repo);

    fs::write(repo.join("a.ts"), "// PARANOID: do not ship\n").unwrap();
    fs::write(repo.join("b.ts"), "// clean file\nlet x = 1;\n").unwrap();
    git(repo, &["add", "a.ts", "b.ts"]);

    sentinel()
        .current_dir(repo)
        .arg("commit")
        .arg("-m")
        .arg("feat: something")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("a.ts (Line 1): PARANOID"))
        .stderr(predicate::str::contains("b.ts").not());

    // The underlying commit must not have run.
    let head = git(repo, &["rev-parse", "HEAD"]);
    assert!(!head.status.success(), "no commit should exist");
}

#[test]
fn commit_proceeds_with_tracking_markers_only() {
    let dir = tempdir().unwrap();
    let repo = dir.path();
    init_repo(repo);

    fs::write(repo.join("a.ts"), "// TODO: tidy later\n// FIXME too\n").unwrap();
    git(repo, &["add", "a.ts"]);

    sentinel()
        .current_dir(repo)
        .arg("commit")
        .arg("-m")
        .arg("feat: tracked work")
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed"));

    // The commit ran and carries the forwarded message unchanged.
    let log = git(repo, &["log", "-1", "--pretty=%s"]);
    assert!(log.status.success());
    assert_eq!(
        String::from_utf8_lossy(&log.stdout).trim(),
        "feat: tracked work"
    );
}

#[test]
fn commit_passes_through_when_blocking_disabled() {
    let dir = tempdir().unwrap();
    let repo = dir.path();
    init_repo(repo);

    fs::write(repo.join("sentinel.toml"), "[core]\nblock_commits = false\n").unwrap();
    fs::write(repo.join("a.ts"), "// PARANOID\n").unwrap();
    git(repo, &["add", "a.ts", "sentinel.toml"]);

    sentinel()
        .current_dir(repo)
        .arg("commit")
        .arg("-m")
        .arg("chore: gate disabled")
        .assert()
        .success();

    assert!(git(repo, &["rev-parse", "HEAD"]).status.success());
}

#[test]
fn commit_rejects_on_second_commit_too() {
    // Exercises the HEAD-tree diff base rather than the unborn-HEAD path.
    let dir = tempdir().unwrap();
    let repo = dir.path();
    init_repo(repo);

    fs::write(repo.join("a.ts"), "let ok = true;\n").unwrap();
    git(repo, &["add", "a.ts"]);
    sentinel()
        .current_dir(repo)
        .args(["commit", "-m", "init"])
        .assert()
        .success();

    fs::write(repo.join("a.ts"), "let ok = true;\n// PARANOID edit\n").unwrap();
    git(repo, &["add", "a.ts"]);
    sentinel()
        .current_dir(repo)
        .args(["commit", "-m", "bad edit"])
        .assert()
        .failure()
        .code(1);

    let log = git(repo, &["log", "-1", "--pretty=%s"]);
    assert_eq!(String::from_utf8_lossy(&log.stdout).trim(), "init");
}

#[test]
fn commit_with_nothing_staged_is_an_error() {
    let dir = tempdir().unwrap();
    let repo = dir.path();
    init_repo(repo);

    sentinel()
        .current_dir(repo)
        .args(["commit", "-m", "empty"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nothing staged"));
}

#[test]
fn commit_outside_a_repository_reports_hook_backstop() {
    let dir = tempdir().unwrap();

    sentinel()
        .current_dir(dir.path())
        .args(["commit", "-m", "nope"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("hook install"));
}
