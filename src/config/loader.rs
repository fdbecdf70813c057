use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::scripts::{ScriptLayout, ScriptStore};
use crate::utils::is_elevated;

/// Where generated scripts are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InstallScope {
    /// System-wide when running as root, per-user otherwise
    #[default]
    Auto,
    User,
    System,
}

impl InstallScope {
    /// Collapse `Auto` into a concrete scope for the given privilege level.
    pub fn resolve(self, elevated: bool) -> InstallScope {
        match self {
            InstallScope::Auto if elevated => InstallScope::System,
            InstallScope::Auto => InstallScope::User,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: ScriptLayout,
    pub scope: InstallScope,
    pub user_dir_name: String,
    pub system_dir: PathBuf,
    pub store_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: ScriptLayout::Split,
            scope: InstallScope::Auto,
            user_dir_name: "docker-scripts".to_string(),
            system_dir: PathBuf::from("/usr/local/bin"),
            store_dir: None,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = config_path.unwrap_or_else(Self::default_config_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn default_config_path() -> PathBuf {
        if let Some(config_path) = std::env::var_os("DOCKER_SCRIPTS_CONFIG") {
            PathBuf::from(config_path)
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("docker-scripts")
                .join("config.yaml")
        }
    }

    pub fn with_layout(mut self, layout: ScriptLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_scope(mut self, scope: InstallScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_store_dir(mut self, store_dir: PathBuf) -> Self {
        self.store_dir = Some(store_dir);
        self
    }

    /// Resolve the store directory for an explicit privilege level and home.
    pub fn store_dir_for(&self, elevated: bool, home: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }

        match self.scope.resolve(elevated) {
            InstallScope::System => Ok(self.system_dir.clone()),
            _ => {
                let home = home.context("Failed to determine user home directory")?;
                Ok(home.join(&self.user_dir_name))
            }
        }
    }

    /// Script store for this process, resolved once per invocation.
    pub fn script_store(&self) -> Result<ScriptStore> {
        let home = dirs::home_dir();
        let dir = self.store_dir_for(is_elevated(), home.as_deref())?;
        tracing::debug!("Using script folder {:?}", dir);
        Ok(ScriptStore::new(dir))
    }
}
