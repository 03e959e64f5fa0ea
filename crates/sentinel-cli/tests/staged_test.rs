use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn git(repo: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("git invocation failed");
    assert!(status.status.success(), "git {:?} failed", args);
}

#[test]
fn staged_scan_sees_only_staged_files() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup temp repo
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path();

    git(repo_path, &["init"]);
    git(repo_path, &["config", "user.email", "you@example.com"]);
    git(repo_path, &["config", "user.name", "Your Name"]);

    // 2. Create a file with a blocking marker and stage it
    let staged_file = repo_path.join("staged_marker.ts");
    let mut file = File::create(&staged_file)?;
    writeln!(file, "// PARANOID: remove before commit")?;
    git(repo_path, &["add", "staged_marker.ts"]);

    // 3. Create another marked file but DO NOT stage it
    let unstaged_file = repo_path.join("unstaged_marker.ts");
    let mut file2 = File::create(&unstaged_file)?;
    writeln!(file2, "// PARANOID: also bad")?;

    // 4. Staged scan reports the staged file only
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sentinel"));
    cmd.current_dir(repo_path)
        .arg("scan")
        .arg("--staged")
        .arg("--fail-on-blocking")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("staged_marker.ts"))
        .stdout(predicate::str::contains("unstaged_marker.ts").not());

    Ok(())
}

#[test]
fn staged_scan_with_clean_staging_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path();

    git(repo_path, &["init"]);

    let staged_file = repo_path.join("clean.ts");
    let mut file = File::create(&staged_file)?;
    writeln!(file, "// TODO: tracking words are allowed")?;
    git(repo_path, &["add", "clean.ts"]);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sentinel"));
    cmd.current_dir(repo_path)
        .arg("scan")
        .arg("--staged")
        .arg("--fail-on-blocking")
        .assert()
        .success()
        .stdout(predicate::str::contains("TODO"));

    Ok(())
}
