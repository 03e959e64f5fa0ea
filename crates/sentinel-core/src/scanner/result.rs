use crate::model::Finding;

/// Aggregate outcome of a tree scan. `skipped_files` counts files that were
/// seen by the walker but not scanned (extension not watched).
#[derive(Debug, Clone, Default)]
pub struct TreeScanResult {
    pub findings: Vec<Finding>,
    pub scanned_files: usize,
    pub skipped_files: usize,
}
