use std::path::PathBuf;

use crate::game::Marker;

/// Recoverable errors from committing a move. Both carry the offending token
/// so the turn loop can report it and re-prompt the same actor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the move {0} is invalid.")]
    InvalidMove(String),

    #[error("the move {0} is illegal.")]
    IllegalMove(String),
}

impl MoveError {
    /// The raw token that was rejected.
    pub fn token(&self) -> &str {
        match self {
            MoveError::InvalidMove(token) | MoveError::IllegalMove(token) => token,
        }
    }
}

/// Errors raised by a move source while producing a token.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("input closed before {0} entered a move")]
    InputClosed(Marker),

    #[error("no legal move available for {0}")]
    NoLegalMove(Marker),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end a turn loop early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to render TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
