//! Error types for the adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while decoding host documents or building menus.
///
/// None of these reach the HUD host directly: the category dispatcher turns
/// every build-time error into the sentinel error menu.
#[derive(Debug, Error)]
pub enum HudError {
    /// The host document does not describe a character.
    #[error("invalid character snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// A category builder panicked.
    #[error("building category `{category}` failed: {message}")]
    BuildPanicked {
        category: &'static str,
        message: String,
    },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("unsupported document extension: {0:?}")]
    UnsupportedExtension(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, HudError>;
