use anyhow::{Context, Result};
use git2::{Delta, DiffOptions, Repository};
use std::path::PathBuf;

/// Enumerates the files staged for commit, as absolute paths.
///
/// The staged set is the diff of HEAD's tree against the index (empty base on
/// an unborn HEAD). Only Added and Modified deltas are returned: a staged
/// deletion cannot reintroduce a marker comment.
pub fn staged_files(repo: &Repository) -> Result<Vec<PathBuf>> {
    let workdir = repo
        .workdir()
        .context("bare repository has no working directory")?;

    let index = repo.index()?;
    let head_tree = repo.head().ok().and_then(|h| h.peel_to_tree().ok());

    let mut diff_opts = DiffOptions::new();
    let diff = repo.diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut diff_opts))?;

    let mut files = Vec::new();
    for delta in diff.deltas() {
        if matches!(delta.status(), Delta::Added | Delta::Modified) {
            if let Some(path) = delta.new_file().path() {
                files.push(workdir.join(path));
            }
        }
    }
    Ok(files)
}

/// Stable identifier for a repository in the gate registry.
pub fn repo_id(repo: &Repository) -> String {
    repo.path().display().to_string()
}
