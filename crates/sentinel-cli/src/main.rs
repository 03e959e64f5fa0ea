mod cli;
mod commands;
mod config_loader;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, HookCommand};
use colored::Colorize;

use std::process::exit;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Rayon worker threads can keep the process alive on interrupt; force a
    // clean exit instead.
    ctrlc::set_handler(move || {
        eprintln!("\n{} Received Ctrl+C, exiting.", "!".yellow());
        std::process::exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match &cli.command {
        Some(Commands::Scan {
            paths,
            staged,
            format,
            fail_on_blocking,
        }) => commands::scan::scan(
            paths,
            cli.config.as_ref(),
            *staged,
            format,
            *fail_on_blocking,
            cli.quiet,
        ),
        Some(Commands::Commit { message, repo }) => {
            commands::commit::commit(message, repo.as_ref(), cli.config.as_ref(), cli.quiet)
        }
        Some(Commands::Hook(cmd)) => match cmd {
            HookCommand::Install { repo } => {
                commands::hook::install(repo.as_ref(), cli.config.as_ref()).map(|_| false)
            }
            HookCommand::Remove { repo } => {
                commands::hook::remove(repo.as_ref()).map(|_| false)
            }
            HookCommand::Show => commands::hook::show(cli.config.as_ref()).map(|_| false),
            HookCommand::Status { repo } => {
                commands::hook::status(repo.as_ref()).map(|_| false)
            }
        },
        Some(Commands::Init { force }) => commands::init::init(*force).map(|_| false),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommand::Check { config_path } => {
                let path = config_path.clone().or_else(|| cli.config.clone());
                commands::config::check(path.as_ref())
            }
        },
        None => {
            // If no subcommand is provided, print help
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            exit(0);
        }
    };

    match result {
        Ok(policy_failure) => {
            if policy_failure {
                exit(1);
            } else {
                exit(0);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(2);
        }
    }
}
