use anyhow::Result;
use sentinel_config::{load_config, Config};
use std::path::PathBuf;

/// Resolves and loads the effective configuration. Re-read at the start of
/// every operation so edits take effect without restart.
///
/// A missing default `./sentinel.toml` yields the documented defaults; a
/// missing explicitly-given path is an error.
pub fn load_effective_config(explicit_path: Option<&PathBuf>) -> Result<Config> {
    let config_file = explicit_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("sentinel.toml"));

    if explicit_path.is_some() && !config_file.exists() {
        anyhow::bail!("Config file not found: {:?}", config_file);
    }

    load_config(&config_file)
}
