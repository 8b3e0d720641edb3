use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist or cannot be opened for reading
    #[error("Input not found: {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON, or its top-level value is not an object
    #[error("Malformed input {}: {message}", path.display())]
    MalformedInput { path: PathBuf, message: String },

    /// The destination cannot be created or written
    #[error("Cannot write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Builds a `MalformedInput` error for an in-memory document with no backing file.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedInput {
            path: PathBuf::from("<document>"),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON serialization error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(format!("YAML serialization error: {}", err))
    }
}
