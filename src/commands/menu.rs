use anyhow::{bail, Result};

use crate::commands::{create, run};
use crate::config::Config;
use crate::prompt::Prompt;

/// Interactive entry point used when no subcommand is given.
pub async fn execute(config: &Config, prompt: &mut impl Prompt) -> Result<()> {
    prompt.say("Welcome to Docker Scripts")?;
    prompt.say("Please select an option to continue")?;
    prompt.say("1. Create a script")?;
    prompt.say("2. Run a script")?;
    prompt.say("3. Exit")?;

    let choice = prompt.ask("Enter your choice: ")?;
    match choice.as_str() {
        "1" => create::execute(config, create::Args::default(), prompt),
        "2" => run::execute(config, run::Args::default(), prompt).await,
        "3" => {
            prompt.say("Exiting...")?;
            Ok(())
        }
        _ => bail!("Invalid choice. Exiting..."),
    }
}
