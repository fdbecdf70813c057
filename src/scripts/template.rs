use minijinja::Environment;

use super::{ScriptError, ScriptKind, ScriptRequest};
use crate::utils::shell_quote;

pub const START_TEMPLATE: &str = include_str!("../../templates/start.sh.tmpl");
pub const STOP_TEMPLATE: &str = include_str!("../../templates/stop.sh.tmpl");
pub const COMBINED_TEMPLATE: &str = include_str!("../../templates/combined.sh.tmpl");

fn template_source(kind: ScriptKind) -> &'static str {
    match kind {
        ScriptKind::Start => START_TEMPLATE,
        ScriptKind::Stop => STOP_TEMPLATE,
        ScriptKind::Combined => COMBINED_TEMPLATE,
    }
}

fn shell_quote_filter(value: String) -> String {
    shell_quote(&value)
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("shell_quote", shell_quote_filter);
    env
}

fn render(kind: ScriptKind, app_folder: &str, app_name: &str) -> Result<String, ScriptError> {
    let to_error = |source: minijinja::Error| ScriptError::Template {
        template: kind.label(),
        source,
    };

    let mut env = environment();
    env.add_template(kind.label(), template_source(kind))
        .map_err(to_error)?;
    let template = env.get_template(kind.label()).map_err(to_error)?;

    template
        .render(minijinja::context! {
            app_folder => app_folder,
            app_name => app_name,
        })
        .map_err(to_error)
}

/// Start/attach script: cd into the folder, then exec a shell in the app
/// container, starting the compose services first when nothing is up.
pub fn render_start_script(app_folder: &str, app_name: &str) -> Result<String, ScriptError> {
    render(ScriptKind::Start, app_folder, app_name)
}

/// Stop script: cd into the folder and stop compose services if any are up.
pub fn render_stop_script(app_folder: &str) -> Result<String, ScriptError> {
    render(ScriptKind::Stop, app_folder, "")
}

pub fn render_combined_script(app_folder: &str, app_name: &str) -> Result<String, ScriptError> {
    render(ScriptKind::Combined, app_folder, app_name)
}

pub fn render_for(kind: ScriptKind, request: &ScriptRequest) -> Result<String, ScriptError> {
    match kind {
        ScriptKind::Start => render_start_script(&request.app_folder, &request.app_name),
        ScriptKind::Stop => render_stop_script(&request.app_folder),
        ScriptKind::Combined => render_combined_script(&request.app_folder, &request.app_name),
    }
}
