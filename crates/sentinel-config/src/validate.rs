use crate::config::Config;
use anyhow::{bail, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    for (list, word) in config
        .words
        .blocking
        .iter()
        .map(|w| ("words.blocking", w))
        .chain(config.words.tracking.iter().map(|w| ("words.tracking", w)))
    {
        if word.trim().is_empty() {
            bail!("Invalid config field '{}': keywords must not be empty", list);
        }
        if word.chars().any(char::is_whitespace) {
            bail!(
                "Invalid config field '{}': keyword '{}' must not contain whitespace",
                list,
                word
            );
        }
    }

    for ext in &config.files.extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            bail!(
                "Invalid config field 'files.extensions': '{}' must start with '.' followed by the extension (e.g. \".ts\")",
                ext
            );
        }
    }

    for dir in &config.files.exclude_dirs {
        if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
            bail!(
                "Invalid config field 'files.exclude_dirs': '{}' must be a bare directory name",
                dir
            );
        }
    }

    Ok(())
}
