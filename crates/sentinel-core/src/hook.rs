use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker line embedded in every generated hook. Ownership of a hook file is
/// decided solely by the presence of this string: install and remove refuse
/// to touch a pre-commit hook that lacks it.
pub const HOOK_SENTINEL: &str = "todo-sentinel pre-commit hook";

#[derive(Debug, Error)]
pub enum HookError {
    #[error("no git repository at {0} (missing .git)")]
    NoRepository(PathBuf),

    #[error("pre-commit hook at {0} was not created by todo-sentinel; refusing to touch it")]
    Conflict(PathBuf),

    #[error("no pre-commit hook installed at {0}")]
    NotInstalled(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    NotInstalled,
    /// Installed and carries the sentinel.
    Ours,
    /// A hook exists but was written by something else.
    Foreign,
}

/// Renders the pre-commit script for the given blocking words.
///
/// The script is the durable backstop: it greps the staged files for lines
/// matching `(//|#).*(WORD1|WORD2|...)` and exits 1 on any hit. That rule is
/// deliberately looser than the in-process classifier (substring anywhere
/// after a comment token), so the hook can reject more than the gate would,
/// never less.
pub fn generate_hook(blocking_words: &[String]) -> String {
    let alternation = blocking_words.join("|");
    let listing = blocking_words.join(", ");

    format!(
        r#"#!/bin/sh
# {sentinel}
# Auto-generated by todo-sentinel. Reinstall with `sentinel hook install`.

BLOCKING_WORDS="{alternation}"

if git diff --cached --name-only | xargs grep -l -E "(//|#).*($BLOCKING_WORDS)" 2>/dev/null; then
    echo ""
    echo "todo-sentinel: cannot commit, blocking comments found:"
    echo "================================================================"
    git diff --cached --name-only | xargs grep -n -E "(//|#).*($BLOCKING_WORDS)" 2>/dev/null | while read -r line; do
        echo "  $line"
    done
    echo "================================================================"
    echo ""
    echo "Remove these comments before committing."
    echo "Blocking words: {listing}"
    exit 1
fi

exit 0
"#,
        sentinel = HOOK_SENTINEL,
        alternation = alternation,
        listing = listing,
    )
}

pub fn hook_path(repo_root: &Path) -> PathBuf {
    repo_root.join(".git").join("hooks").join("pre-commit")
}

pub fn hook_status(repo_root: &Path) -> Result<HookStatus, HookError> {
    let git_dir = repo_root.join(".git");
    if !git_dir.exists() {
        return Err(HookError::NoRepository(repo_root.to_path_buf()));
    }

    let path = hook_path(repo_root);
    if !path.exists() {
        return Ok(HookStatus::NotInstalled);
    }
    let content = fs::read_to_string(&path)?;
    if content.contains(HOOK_SENTINEL) {
        Ok(HookStatus::Ours)
    } else {
        Ok(HookStatus::Foreign)
    }
}

/// Writes the pre-commit hook, executable, into `<repo>/.git/hooks`.
///
/// A hook we previously wrote is refreshed in place; a foreign hook is left
/// untouched and reported as a conflict with no partial write.
pub fn install_hook(repo_root: &Path, blocking_words: &[String]) -> Result<PathBuf, HookError> {
    let path = hook_path(repo_root);
    match hook_status(repo_root)? {
        HookStatus::Foreign => return Err(HookError::Conflict(path)),
        HookStatus::NotInstalled | HookStatus::Ours => {}
    }

    if let Some(hooks_dir) = path.parent() {
        fs::create_dir_all(hooks_dir)?;
    }
    fs::write(&path, generate_hook(blocking_words))?;
    set_executable(&path)?;

    tracing::debug!(path = %path.display(), "pre-commit hook installed");
    Ok(path)
}

/// Removes the pre-commit hook, refusing to delete one we did not create.
pub fn remove_hook(repo_root: &Path) -> Result<PathBuf, HookError> {
    let path = hook_path(repo_root);
    match hook_status(repo_root)? {
        HookStatus::NotInstalled => Err(HookError::NotInstalled(path)),
        HookStatus::Foreign => Err(HookError::Conflict(path)),
        HookStatus::Ours => {
            fs::remove_file(&path)?;
            Ok(path)
        }
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
