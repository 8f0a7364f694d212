//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Grid has no cells")]
    EmptyGrid,

    #[error("Failed to load {origin}: {reason}")]
    Load { origin: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn load(origin: impl Into<String>, reason: impl ToString) -> Self {
        Error::Load {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
