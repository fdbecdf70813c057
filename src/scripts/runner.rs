use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use super::{ScriptError, ScriptStore};

/// Resolve a 1-based menu answer against the current listing.
pub fn select<'a>(scripts: &'a [String], choice: &str) -> Result<&'a str, ScriptError> {
    let invalid = || ScriptError::InvalidSelection {
        choice: choice.to_string(),
        count: scripts.len(),
    };

    let index: usize = choice.trim().parse().map_err(|_| invalid())?;
    if index == 0 || index > scripts.len() {
        return Err(invalid());
    }
    Ok(scripts[index - 1].as_str())
}

/// Execute a script with the terminal's stdio and wait for it to exit.
///
/// The script's own exit status is returned, not treated as an error. Only
/// a failure to launch it is.
pub async fn run_script(path: &Path) -> Result<ExitStatus, ScriptError> {
    tracing::info!("Running script {:?}", path);

    let status = Command::new(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| ScriptError::Execution {
            path: path.to_path_buf(),
            source,
        })?;

    if !status.success() {
        tracing::warn!("Script {:?} exited with {}", path, status);
    }
    Ok(status)
}

/// List the store afresh, pick `choice` and run it.
pub async fn run_choice(
    store: &ScriptStore,
    choice: &str,
) -> Result<(PathBuf, ExitStatus), ScriptError> {
    let scripts = store.list()?;
    let path = store.script_path(select(&scripts, choice)?);
    let status = run_script(&path).await?;
    Ok((path, status))
}
