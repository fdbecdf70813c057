use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{create, run};
use crate::config::{Config, InstallScope};
use crate::scripts::ScriptLayout;

#[derive(Parser)]
#[command(name = "docker-scripts")]
#[command(about = "A CLI tool for docker scripts: create and run docker compose start/stop wrappers")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    /// Without a subcommand an interactive menu is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Default)]
pub struct GlobalOptions {
    /// Custom config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Install scope for generated scripts (overrides config)
    #[arg(long, value_enum, global = true)]
    pub scope: Option<InstallScope>,

    /// Generate a start/stop pair or one combined script (overrides config)
    #[arg(long, value_enum, global = true)]
    pub layout: Option<ScriptLayout>,

    /// Use this directory as the script folder
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,
}

impl GlobalOptions {
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.clone())?;

        if let Some(scope) = self.scope {
            config = config.with_scope(scope);
        }
        if let Some(layout) = self.layout {
            config = config.with_layout(layout);
        }
        if let Some(dir) = &self.store_dir {
            config = config.with_store_dir(dir.clone());
        }

        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a script to run/stop docker containers with compose
    Create(create::Args),

    /// Run a script to start/stop docker containers
    Run(run::Args),

    /// List generated scripts
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["docker-scripts"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn create_accepts_all_fields_as_flags() {
        let cli = Cli::try_parse_from([
            "docker-scripts",
            "create",
            "--name",
            "proj1",
            "--app",
            "webapp",
            "--folder",
            "/srv/app",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.name.as_deref(), Some("proj1"));
                assert_eq!(args.app.as_deref(), Some("webapp"));
                assert_eq!(args.folder.as_deref(), Some("/srv/app"));
            }
            _ => panic!("expected create subcommand"),
        }
    }

    #[test]
    fn run_takes_optional_index() {
        let cli = Cli::try_parse_from(["docker-scripts", "run", "2"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.index, Some(2)),
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docker-scripts",
            "list",
            "--layout",
            "combined",
            "--scope",
            "user",
        ])
        .unwrap();

        assert_eq!(cli.options.layout, Some(ScriptLayout::Combined));
        assert_eq!(cli.options.scope, Some(InstallScope::User));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["docker-scripts", "destroy"]).is_err());
    }

    #[test]
    fn resolve_config_applies_overrides() {
        let options = GlobalOptions {
            config: Some(PathBuf::from("/nonexistent/config.yaml")),
            scope: Some(InstallScope::System),
            layout: Some(ScriptLayout::Combined),
            store_dir: Some(PathBuf::from("/tmp/scripts")),
        };

        let config = options.resolve_config().unwrap();

        assert_eq!(config.scope, InstallScope::System);
        assert_eq!(config.layout, ScriptLayout::Combined);
        assert_eq!(config.store_dir, Some(PathBuf::from("/tmp/scripts")));
    }
}
