use crate::model::Finding;
use crate::scanner::scan_files;
use sentinel_config::Config;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// One intercepted commit. Lives only for the duration of a single
/// [`GateRegistry::intercept`] call.
#[derive(Debug, Clone)]
pub struct CommitAttempt {
    pub staged_files: Vec<PathBuf>,
    pub message: String,
}

/// The blocking findings that vetoed a commit. The full finding list is
/// retained so callers can render or serialize it; the `Display` impl is the
/// human-readable report.
#[derive(Debug, Clone, Serialize)]
pub struct RejectionReport {
    pub findings: Vec<Finding>,
}

impl fmt::Display for RejectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cannot commit: found blocking comments:")?;
        for finding in &self.findings {
            writeln!(
                f,
                "  {} (Line {}): {}",
                finding.file_name(),
                finding.line_number,
                finding.word
            )?;
        }
        write!(f, "Remove these comments before committing.")
    }
}

/// Result of consulting the gate for one commit attempt.
#[derive(Debug)]
pub enum GateOutcome<T> {
    /// The underlying commit operation ran; its result is carried through.
    Proceeded(T),
    /// The commit was vetoed. The underlying operation did not run.
    Rejected(RejectionReport),
}

impl<T> GateOutcome<T> {
    pub fn proceeded(&self) -> bool {
        matches!(self, GateOutcome::Proceeded(_))
    }
}

/// Per-process registry of armed repositories.
///
/// The gate never wraps or replaces the collaborator's commit operation; the
/// adapter consults `intercept` and the original operation is passed in as a
/// closure. Disarming therefore restores the original behavior exactly,
/// because there is nothing to restore.
///
/// This is the only shared mutable state in the system. Arm, disarm and
/// intercept all take the one lock, so no interleaving can leave a repository
/// half-armed.
#[derive(Debug, Default)]
pub struct GateRegistry {
    armed: Mutex<HashSet<String>>,
}

impl GateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the gate for a repository. Re-arming is a no-op; returns whether
    /// the state changed.
    pub fn arm(&self, repo_id: &str) -> bool {
        self.lock().insert(repo_id.to_string())
    }

    /// Disarms the gate for a repository. Idempotent; returns whether the
    /// state changed.
    pub fn disarm(&self, repo_id: &str) -> bool {
        self.lock().remove(repo_id)
    }

    pub fn is_armed(&self, repo_id: &str) -> bool {
        self.lock().contains(repo_id)
    }

    /// Runs one commit attempt through the gate.
    ///
    /// Pass-through (the commit closure runs unchanged) when the gate is
    /// disarmed for this repository, or when the configuration disables
    /// scanning or commit blocking. Otherwise exactly the staged files are
    /// scanned and any blocking finding vetoes the commit; on the rejected
    /// path the closure is never invoked.
    pub fn intercept<T, F>(
        &self,
        repo_id: &str,
        attempt: &CommitAttempt,
        config: &Config,
        commit_fn: F,
    ) -> GateOutcome<T>
    where
        F: FnOnce(&CommitAttempt) -> T,
    {
        if !config.core.enabled || !config.core.block_commits || !self.is_armed(repo_id) {
            return GateOutcome::Proceeded(commit_fn(attempt));
        }

        let blocking: Vec<Finding> = scan_files(&attempt.staged_files, config)
            .into_iter()
            .filter(Finding::is_blocking)
            .collect();

        if blocking.is_empty() {
            GateOutcome::Proceeded(commit_fn(attempt))
        } else {
            tracing::info!(
                repo = repo_id,
                findings = blocking.len(),
                "commit rejected by gate"
            );
            GateOutcome::Rejected(RejectionReport { findings: blocking })
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.armed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
