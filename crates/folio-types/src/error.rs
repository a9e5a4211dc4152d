//! Error types for the FOLIO terminal.
//!
//! Command processing itself never fails; these errors cover the ambient
//! layers around it (configuration, platform services, the front-end).

use std::io;

/// Errors produced by the FOLIO crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
