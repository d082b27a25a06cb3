use std::{num::ParseFloatError, path::PathBuf};

/// Reasons a start command is rejected. The process state is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("invalid flow speed {text:?}")]
    InvalidSpeed {
        text: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error("invalid initial level {text:?}")]
    InvalidLevel {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("tick interval must be positive, got {tick_interval_ms} ms")]
    InvalidTickInterval { tick_interval_ms: u64 },
}
