//! Error type shared by every loghist crate.

use thiserror::Error;

/// Errors surfaced by the loghist pipeline.
///
/// None of these are recovered from; the binary reports them and exits
/// non-zero.
#[derive(Debug, Error)]
pub enum HistError {
    /// Reading the input stream or writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file or an environment override could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A report entry could not be serialized.
    #[error("failed to encode report entry: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = HistError> = std::result::Result<T, E>;
