mod creator;
mod error;
mod model;
mod runner;
mod store;
pub mod template;

pub use creator::create_scripts;
pub use error::ScriptError;
pub use model::{ScriptKind, ScriptLayout, ScriptRequest, SCRIPT_EXTENSION};
pub use runner::{run_choice, run_script, select};
pub use store::ScriptStore;
