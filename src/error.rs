//! Error types for fkthemes-demo.

use std::io;

/// Errors from everything around the interpreter. The interpreter itself
/// never fails; bad commands become transcript lines.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config error: {0}")]
    ConfigEval(String),

    #[error("unknown theme \"{0}\"")]
    UnknownTheme(String),

    #[error("invalid key notation \"{0}\"")]
    InvalidKey(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DemoError>;
