use anyhow::Result;
use clap::Args as ClapArgs;

use crate::config::Config;
use crate::prompt::Prompt;
use crate::scripts::{create_scripts, ScriptLayout, ScriptRequest};

#[derive(ClapArgs, Default)]
pub struct Args {
    /// Script name used to derive the file name (prompted if omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Compose app/service name (prompted if omitted)
    #[arg(short, long)]
    pub app: Option<String>,

    /// Project folder holding the compose file (prompted if omitted)
    #[arg(short, long)]
    pub folder: Option<String>,
}

fn answer(prompt: &mut impl Prompt, given: Option<String>, question: &str) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => prompt.ask(question),
    }
}

/// Gather the three fields, asking only for those not passed as flags.
pub fn collect_request(args: Args, prompt: &mut impl Prompt) -> Result<ScriptRequest> {
    let name = answer(
        prompt,
        args.name,
        "Enter the name of the script (example: project1): ",
    )?;
    let app_name = answer(
        prompt,
        args.app,
        "Enter the app name (example: project_1): ",
    )?;
    let app_folder = answer(
        prompt,
        args.folder,
        "Enter the location of the project folder (example: /var/www/code): ",
    )?;

    Ok(ScriptRequest::new(name, app_name, app_folder))
}

pub fn execute(config: &Config, args: Args, prompt: &mut impl Prompt) -> Result<()> {
    let request = collect_request(args, prompt)?;
    request.validate()?;

    let what = match config.layout {
        ScriptLayout::Split => "start/stop scripts",
        ScriptLayout::Combined => "script",
    };
    prompt.say(&format!("Creating {} for: {}", what, request.name))?;

    let store = config.script_store()?;
    let paths = create_scripts(&store, config.layout, &request)?;

    for path in &paths {
        prompt.say(&format!("  {}", path.display()))?;
    }
    prompt.say(&format!("Script {} created successfully.", request.name))?;
    Ok(())
}
