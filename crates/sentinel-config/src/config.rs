use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CoreConfig {
    /// Master switch. When false, scans report nothing and the gate never
    /// vetoes.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// When false, blocking findings are still reported by scans but commits
    /// are never vetoed.
    #[serde(default = "default_true")]
    pub block_commits: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            block_commits: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WordsConfig {
    /// Keywords whose presence vetoes a commit. Matched case-insensitively.
    #[serde(default = "default_blocking")]
    pub blocking: Vec<String>,
    /// Keywords recorded for visibility only.
    #[serde(default = "default_tracking")]
    pub tracking: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            blocking: default_blocking(),
            tracking: default_tracking(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilesConfig {
    /// File extensions eligible for scanning, dot included.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names pruned from tree walks. Hidden directories are always
    /// pruned in addition to this list.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_blocking() -> Vec<String> {
    vec!["PARANOID".to_string()]
}

fn default_tracking() -> Vec<String> {
    vec!["TODO".to_string(), "FIXME".to_string(), "BUG".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec![".js".to_string(), ".ts".to_string()]
}

fn default_exclude_dirs() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "target".to_string(),
        "dist".to_string(),
        "build".to_string(),
        "vendor".to_string(),
    ]
}
