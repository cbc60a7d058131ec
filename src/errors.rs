use thiserror::Error;

use crate::config::ConfigError;

/// Problems with a single console command. These never halt a session:
/// their `Display` text is what lands in the transcript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Unknown node '{0}'")]
    UnknownNode(String),

    #[error("Unknown mode '{0}'")]
    UnknownMode(String),

    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("Theme '{0}' is reserved for hacker and elite modes")]
    ReservedTheme(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] CommandError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error (JSON): {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
