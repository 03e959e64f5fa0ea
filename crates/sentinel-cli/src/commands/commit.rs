use anyhow::{Context, Result};
use colored::Colorize;
use git2::Repository;
use sentinel_core::{CommitAttempt, GateOutcome, GateRegistry};
use std::path::PathBuf;

/// Commits the staged files through the gate.
///
/// The gate is the adapter-side interception boundary: the real commit is
/// handed to `GateRegistry::intercept` as a closure and runs only when no
/// staged file carries a blocking comment.
pub fn commit(
    message: &str,
    repo_path: Option<&PathBuf>,
    config_path: Option<&PathBuf>,
    quiet: bool,
) -> Result<bool> {
    let root = match repo_path {
        Some(p) => p.clone(),
        None => std::env::current_dir()?,
    };
    let repo = Repository::open(&root).with_context(|| {
        format!(
            "Failed to open git repository at {:?}. Without it the gate cannot run; \
             `sentinel hook install` provides the hook backstop instead",
            root
        )
    })?;

    let config = crate::config_loader::load_effective_config(config_path)?;

    let staged = super::git::staged_files(&repo)?;
    if staged.is_empty() {
        anyhow::bail!("nothing staged to commit");
    }

    let attempt = CommitAttempt {
        staged_files: staged,
        message: message.to_string(),
    };

    let registry = GateRegistry::new();
    let repo_id = super::git::repo_id(&repo);
    registry.arm(&repo_id);

    let outcome = registry.intercept(&repo_id, &attempt, &config, |attempt| {
        perform_commit(&repo, &attempt.message)
    });

    match outcome {
        GateOutcome::Proceeded(result) => {
            let oid = result.context("Gate passed but the commit itself failed")?;
            if !quiet {
                let mut short = oid.to_string();
                short.truncate(7);
                println!("{} {}", "Committed".green(), short);
            }
            Ok(false)
        }
        GateOutcome::Rejected(report) => {
            eprintln!("{}", report.to_string().red());
            Ok(true)
        }
    }
}

fn perform_commit(repo: &Repository, message: &str) -> Result<git2::Oid> {
    let mut index = repo.index()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let signature = repo
        .signature()
        .context("git user.name / user.email not configured")?;

    // Unborn HEAD (initial commit) has no parent.
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )?;
    Ok(oid)
}
