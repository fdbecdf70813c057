use anyhow::Result;
use clap::Args as ClapArgs;

use crate::config::Config;
use crate::prompt::Prompt;
use crate::scripts::{run_choice, run_script, select};

#[derive(ClapArgs, Default)]
pub struct Args {
    /// 1-based script number from `list` (prompted if omitted)
    pub index: Option<usize>,
}

pub async fn execute(config: &Config, args: Args, prompt: &mut impl Prompt) -> Result<()> {
    let store = config.script_store()?;

    let (path, status) = match args.index {
        Some(index) => run_choice(&store, &index.to_string()).await?,
        None => {
            let scripts = store.list()?;
            if scripts.is_empty() {
                prompt.say(&format!(
                    "No scripts found in {}. Run 'docker-scripts create' first.",
                    store.dir().display()
                ))?;
                return Ok(());
            }

            prompt.say("Select a script to run")?;
            for (i, script) in scripts.iter().enumerate() {
                prompt.say(&format!("{}. {}", i + 1, script))?;
            }
            let choice = prompt.ask("Enter your choice: ")?;

            let path = store.script_path(select(&scripts, &choice)?);
            let status = run_script(&path).await?;
            (path, status)
        }
    };

    if !status.success() {
        prompt.say(&format!("Script {} exited with {}", path.display(), status))?;
    }
    Ok(())
}
