use anyhow::{Context, Result};
use colored::Colorize;
use sentinel_core::{generate_hook, hook_status, install_hook, remove_hook, HookStatus};
use std::path::PathBuf;

fn resolve_root(repo: Option<&PathBuf>) -> Result<PathBuf> {
    match repo {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("Failed to resolve current directory"),
    }
}

pub fn install(repo: Option<&PathBuf>, config_path: Option<&PathBuf>) -> Result<()> {
    let root = resolve_root(repo)?;
    let config = crate::config_loader::load_effective_config(config_path)?;

    let path = install_hook(&root, &config.words.blocking)?;
    println!(
        "{}",
        format!("Pre-commit hook installed at {}", path.display())
            .green()
            .bold()
    );
    println!(
        "Blocking words: {}",
        config.words.blocking.join(", ").cyan()
    );
    Ok(())
}

pub fn remove(repo: Option<&PathBuf>) -> Result<()> {
    let root = resolve_root(repo)?;
    match remove_hook(&root) {
        Ok(path) => {
            println!(
                "{}",
                format!("Pre-commit hook removed from {}", path.display()).green()
            );
            Ok(())
        }
        Err(sentinel_core::HookError::NotInstalled(path)) => {
            println!(
                "{}",
                format!("No pre-commit hook installed at {}", path.display()).yellow()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn show(config_path: Option<&PathBuf>) -> Result<()> {
    let config = crate::config_loader::load_effective_config(config_path)?;
    print!("{}", generate_hook(&config.words.blocking));
    Ok(())
}

pub fn status(repo: Option<&PathBuf>) -> Result<()> {
    let root = resolve_root(repo)?;
    match hook_status(&root)? {
        HookStatus::NotInstalled => println!("{}", "No pre-commit hook installed.".yellow()),
        HookStatus::Ours => println!("{}", "todo-sentinel pre-commit hook is installed.".green()),
        HookStatus::Foreign => println!(
            "{}",
            "A pre-commit hook exists but was not created by todo-sentinel.".red()
        ),
    }
    Ok(())
}
