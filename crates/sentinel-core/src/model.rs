use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which configured word list produced a finding. Blocking findings veto
/// commits; tracking findings are recorded for visibility only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blocking,
    Tracking,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Blocking => write!(f, "BLOCKING"),
            Category::Tracking => write!(f, "TRACKING"),
        }
    }
}

/// One detected marker comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Finding {
    pub path: PathBuf,
    /// 1-based line index.
    pub line_number: usize,
    /// Trimmed content of the matched line.
    pub text: String,
    /// The configured keyword that triggered the match.
    pub word: String,
    pub category: Category,
}

impl Finding {
    pub fn is_blocking(&self) -> bool {
        self.category == Category::Blocking
    }

    /// Basename for report listings.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
