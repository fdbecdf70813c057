use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod prompt;
mod scripts;
mod utils;

use cli::{Cli, Commands};
use prompt::TerminalPrompt;
use scripts::ScriptError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err));
        }
    };

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.options.resolve_config()?;
    let mut prompt = TerminalPrompt::terminal();

    match cli.command {
        None => commands::menu::execute(&config, &mut prompt).await,
        Some(Commands::Create(args)) => commands::create::execute(&config, args, &mut prompt),
        Some(Commands::Run(args)) => commands::run::execute(&config, args, &mut prompt).await,
        Some(Commands::List) => commands::list::execute(&config, &mut prompt),
    }
}

/// 1 for menu and other top-level failures, a per-kind code for script errors.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ScriptError>()
        .map(ScriptError::exit_code)
        .unwrap_or(1)
}

/// 0 for `--help`/`--version`, 1 for any usage error.
fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
