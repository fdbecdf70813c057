use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to write {path:?}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to make {path:?} executable")]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Script folder {path:?} is not readable")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid choice {choice}: expected a number between 1 and {count}")]
    InvalidSelection { choice: String, count: usize },

    #[error("Failed to run {path:?}")]
    Execution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {template} template")]
    Template {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

impl ScriptError {
    /// Process exit status reported for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScriptError::Validation(_) => 2,
            ScriptError::Store { .. } | ScriptError::Template { .. } => 3,
            ScriptError::Permission { .. } => 4,
            ScriptError::NotFound { .. } => 5,
            ScriptError::InvalidSelection { .. } => 6,
            ScriptError::Execution { .. } => 7,
        }
    }
}
