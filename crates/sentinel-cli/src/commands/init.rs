use anyhow::Result;
use colored::Colorize;
use sentinel_config::{save_config, Config};
use std::path::Path;

pub fn init(force: bool) -> Result<()> {
    let path = Path::new("sentinel.toml");

    if path.exists() && !force {
        anyhow::bail!("sentinel.toml already exists! Use --force to overwrite.");
    }

    save_config(&Config::default(), path)?;

    println!(
        "{}",
        format!("Successfully created {}", path.display())
            .green()
            .bold()
    );
    println!(
        "{}",
        "Tip: run `sentinel hook install` to add the pre-commit backstop.".dimmed()
    );
    Ok(())
}
