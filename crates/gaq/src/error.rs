//! Error types for the gaq crate.

/// Errors that can occur when configuring the snippet builder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Account identifier does not look like `UA-XXXX-Y` or `MO-XXXX-Y`.
    #[error("Invalid Google Analytics account ID: {0:?}")]
    InvalidAccount(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Settings could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
