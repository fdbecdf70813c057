use serde::Deserialize;

use super::ScriptError;

pub const SCRIPT_EXTENSION: &str = "sh";

/// Whether one script per name is generated or a start/stop pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScriptLayout {
    #[default]
    Split,
    Combined,
}

impl ScriptLayout {
    pub fn kinds(&self) -> &'static [ScriptKind] {
        match self {
            ScriptLayout::Split => &[ScriptKind::Start, ScriptKind::Stop],
            ScriptLayout::Combined => &[ScriptKind::Combined],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Start,
    Stop,
    Combined,
}

impl ScriptKind {
    pub fn file_name(&self, name: &str) -> String {
        match self {
            ScriptKind::Start => format!("start_{}.{}", name, SCRIPT_EXTENSION),
            ScriptKind::Stop => format!("stop_{}.{}", name, SCRIPT_EXTENSION),
            ScriptKind::Combined => format!("{}.{}", name, SCRIPT_EXTENSION),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScriptKind::Start => "start",
            ScriptKind::Stop => "stop",
            ScriptKind::Combined => "combined",
        }
    }
}

/// The three answers collected before a script is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequest {
    pub name: String,
    pub app_name: String,
    pub app_folder: String,
}

impl ScriptRequest {
    pub fn new(
        name: impl Into<String>,
        app_name: impl Into<String>,
        app_folder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            app_name: app_name.into(),
            app_folder: app_folder.into(),
        }
    }

    /// All fields must be present, and the name must stay a single file name
    /// so the derived script lands inside the store.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.name.is_empty() || self.app_name.is_empty() || self.app_folder.is_empty() {
            return Err(ScriptError::Validation(
                "all fields must be provided".to_string(),
            ));
        }

        if self.name == "."
            || self.name == ".."
            || self.name.chars().any(|c| c == '/' || c == '\\' || c.is_control())
        {
            return Err(ScriptError::Validation(format!(
                "script name {:?} must be a plain file name",
                self.name
            )));
        }

        Ok(())
    }
}
