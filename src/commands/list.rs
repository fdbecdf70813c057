use anyhow::Result;

use crate::config::Config;
use crate::prompt::Prompt;

pub fn execute(config: &Config, prompt: &mut impl Prompt) -> Result<()> {
    let store = config.script_store()?;
    let scripts = store.list()?;

    if scripts.is_empty() {
        prompt.say(&format!("No scripts found in {}.", store.dir().display()))?;
        return Ok(());
    }

    prompt.say(&format!("Scripts in {}:", store.dir().display()))?;
    for (i, script) in scripts.iter().enumerate() {
        prompt.say(&format!("{}. {}", i + 1, script))?;
    }
    Ok(())
}
