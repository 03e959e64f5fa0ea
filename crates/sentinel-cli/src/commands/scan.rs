use crate::output::formatter::print_finding;
use anyhow::{Context, Result};
use colored::Colorize;
use git2::Repository;
use sentinel_core::{scan_files, scan_tree, Category, Finding};
use std::path::PathBuf;

/// Runs a tree scan (default) or a staged-file scan (`--staged`).
///
/// Returns whether the scan should fail the process: only when
/// `--fail-on-blocking` was given and a blocking finding exists.
pub fn scan(
    paths: &[PathBuf],
    config_path: Option<&PathBuf>,
    staged: bool,
    format: &str,
    fail_on_blocking: bool,
    quiet: bool,
) -> Result<bool> {
    let config = crate::config_loader::load_effective_config(config_path)?;

    if !config.core.enabled {
        if !quiet {
            println!("{}", "Scanning is disabled (core.enabled = false).".dimmed());
        }
        return Ok(false);
    }

    let (findings, scanned_files, skipped_files) = if staged {
        let repo = Repository::open(std::env::current_dir()?)
            .context("Failed to open git repository (required for --staged)")?;
        let staged_paths = super::git::staged_files(&repo)?;
        let scanned = staged_paths.len();
        (scan_files(&staged_paths, &config), scanned, 0)
    } else {
        let result = scan_tree(paths, &config);
        (result.findings, result.scanned_files, result.skipped_files)
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&findings)?);
        }
        _ => {
            for finding in &findings {
                print_finding(finding);
            }
            if !quiet {
                print_summary(&findings, scanned_files, skipped_files);
            }
        }
    }

    let blocking = findings.iter().filter(|f| f.is_blocking()).count();
    Ok(fail_on_blocking && blocking > 0)
}

fn print_summary(findings: &[Finding], scanned_files: usize, skipped_files: usize) {
    let blocking = findings
        .iter()
        .filter(|f| f.category == Category::Blocking)
        .count();
    let tracking = findings.len() - blocking;

    println!();
    println!("{}", "Scan Summary".bold().underline());
    println!("  Scanned Files: {}", scanned_files);
    if skipped_files > 0 {
        println!("  Skipped Files: {} (extension not watched)", skipped_files);
    }

    if findings.is_empty() {
        println!("{}", "  No marker comments found.".green());
    } else if blocking == 0 {
        println!(
            "{}",
            format!("  Found {} tracking comment(s), no blocking ones.", tracking).yellow()
        );
    } else {
        println!(
            "{}",
            format!(
                "  Found {} blocking and {} tracking comment(s). Commits will be rejected!",
                blocking, tracking
            )
            .red()
        );
    }
}
