use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Validates the configuration file. Returns true (policy failure, exit 1)
/// when the file is present but invalid.
pub fn check(config_path: Option<&PathBuf>) -> Result<bool> {
    let path = config_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("sentinel.toml"));

    if !path.exists() {
        println!(
            "{}",
            format!(
                "No config file at {:?}; built-in defaults are in effect.",
                path
            )
            .yellow()
        );
        return Ok(false);
    }

    match sentinel_config::load_config(&path) {
        Ok(config) => {
            println!("{}", format!("Configuration OK ({:?})", path).green());
            println!(
                "  {} blocking word(s), {} tracking word(s), {} watched extension(s)",
                config.words.blocking.len(),
                config.words.tracking.len(),
                config.files.extensions.len()
            );
            Ok(false)
        }
        Err(e) => {
            eprintln!("{}", format!("Configuration invalid: {:#}", e).red());
            Ok(true)
        }
    }
}
