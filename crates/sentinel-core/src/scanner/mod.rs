use crate::classifier::{compile_matchers, WordMatcher};
use crate::model::Finding;
use ignore::WalkBuilder;
use rayon::prelude::*;
use sentinel_config::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub mod result;

use result::TreeScanResult;

/// Scans already-loaded content. Pure: no I/O, no config reads.
///
/// Findings are emitted in (line, blocking-before-tracking, word-list) order;
/// `matchers` as produced by [`compile_matchers`] already carry that order.
/// A line matching several words yields one finding per word.
pub fn scan_content(content: &str, path: &Path, matchers: &[WordMatcher]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        for matcher in matchers {
            if matcher.matches(line) {
                findings.push(Finding {
                    path: path.to_path_buf(),
                    line_number: line_idx + 1,
                    text: line.trim().to_string(),
                    word: matcher.word.clone(),
                    category: matcher.category,
                });
            }
        }
    }

    findings
}

/// Scans one file against the configured word lists.
///
/// Files that do not exist or whose extension is not watched yield no
/// findings. Read failures (permissions, non-UTF-8, removed mid-scan) are
/// logged and recovered as zero findings; they never abort a larger scan.
pub fn scan_file(path: &Path, config: &Config) -> Vec<Finding> {
    let matchers = compile_matchers(config);
    scan_file_with(path, config, &matchers)
}

/// Scans an explicit file set (the commit gate's staged files), preserving
/// the given order. The word lists are compiled once for the whole set.
pub fn scan_files(paths: &[PathBuf], config: &Config) -> Vec<Finding> {
    let matchers = compile_matchers(config);
    paths
        .iter()
        .flat_map(|p| scan_file_with(p, config, &matchers))
        .collect()
}

fn scan_file_with(path: &Path, config: &Config, matchers: &[WordMatcher]) -> Vec<Finding> {
    if !is_watched(path, config) {
        return Vec::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => scan_content(&content, path, matchers),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            Vec::new()
        }
    }
}

fn is_watched(path: &Path, config: &Config) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let dotted = format!(".{}", ext);
    config
        .files
        .extensions
        .iter()
        .any(|watched| watched.eq_ignore_ascii_case(&dotted))
}

/// Walks the given roots recursively and scans every watched file.
///
/// Hidden directories and the configured `exclude_dirs` names are pruned and
/// never descended into. Symbolic links are not followed (link cycles are a
/// documented non-goal). File paths are collected and sorted before the
/// parallel scan, and per-file results are merged back in path order, so the
/// finding list is deterministic for an unchanged tree.
pub fn scan_tree(roots: &[PathBuf], config: &Config) -> TreeScanResult {
    let matchers = compile_matchers(config);

    let mut files = Vec::new();
    let mut skipped_files = 0usize;
    for root in roots {
        collect_files(root, config, &mut files, &mut skipped_files);
    }
    files.sort();
    files.dedup();

    let per_file: Vec<Vec<Finding>> = files
        .par_iter()
        .map(|path| scan_file_with(path, config, &matchers))
        .collect();

    TreeScanResult {
        findings: per_file.into_iter().flatten().collect(),
        scanned_files: files.len(),
        skipped_files,
    }
}

fn collect_files(root: &Path, config: &Config, files: &mut Vec<PathBuf>, skipped: &mut usize) {
    let excluded = config.files.exclude_dirs.clone();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !excluded.iter().any(|ex| ex == name.as_ref())
        })
        .build();

    for entry in walker {
        match entry {
            Ok(e) => {
                if e.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                    if is_watched(e.path(), config) {
                        files.push(e.into_path());
                    } else {
                        *skipped += 1;
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
            }
        }
    }
}
