use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "Marker-comment scanner and commit guard", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ./sentinel.toml)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan files for marker comments
    Scan {
        /// Paths to scan
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
        /// Scan staged files only
        #[arg(long)]
        staged: bool,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Exit 1 if any blocking comment is found
        #[arg(long)]
        fail_on_blocking: bool,
    },
    /// Commit through the gate: vetoed if staged files carry blocking comments
    Commit {
        /// Commit message
        #[arg(long, short)]
        message: String,
        /// Repository path (default: current directory)
        #[arg(long)]
        repo: Option<PathBuf>,
    },
    /// Manage the pre-commit hook backstop
    #[command(subcommand)]
    Hook(HookCommand),
    /// Initialize a new configuration file
    Init {
        /// Overwrite an existing sentinel.toml
        #[arg(long)]
        force: bool,
    },
    /// Configuration helpers
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum HookCommand {
    /// Install or refresh the pre-commit hook
    Install {
        /// Repository path (default: current directory)
        #[arg(long)]
        repo: Option<PathBuf>,
    },
    /// Remove the hook (refuses hooks not created by todo-sentinel)
    Remove {
        /// Repository path (default: current directory)
        #[arg(long)]
        repo: Option<PathBuf>,
    },
    /// Print the generated hook script
    Show,
    /// Report whether a hook is installed and who owns it
    Status {
        /// Repository path (default: current directory)
        #[arg(long)]
        repo: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Validate the configuration file
    Check {
        /// Config file to check (defaults to the global --config / ./sentinel.toml)
        config_path: Option<PathBuf>,
    },
}
