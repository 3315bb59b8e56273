//! Adapter configuration and host document loading.
//!
//! Documents (configuration files and character snapshots) are read as JSON
//! or TOML depending on the file extension.
//!
//! ```toml
//! [skill_labels]
//! acro = "Acrobacia"
//! luta = "Luta"
//! ```

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{HudError, Result};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = ".hud.toml";

/// Adapter-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudConfig {
    /// System-wide skill display names keyed by skill key. Takes precedence
    /// over the label stored on the character sheet.
    #[serde(default)]
    pub skill_labels: IndexMap<String, String>,
}

impl HudConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        load_or_default(path)
    }

    /// Display name for a skill, when the system table defines a non-empty one.
    pub fn skill_label(&self, key: &str) -> Option<&str> {
        self.skill_labels
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Read and decode a JSON or TOML document chosen by extension.
pub fn load_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HudError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    parse_document(&content, ext)
}

/// Like [`load_document`], but a missing file yields `T::default()`.
pub fn load_or_default<T: Default + DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("config {} not found, using defaults", path.display());
        return Ok(T::default());
    }
    load_document(path)
}

/// Decode document text according to its extension (`json`, `toml`/`tml`).
pub fn parse_document<T: DeserializeOwned>(content: &str, ext: &str) -> Result<T> {
    let value = match ext {
        "json" => serde_json::from_str(content)?,
        "toml" | "tml" => toml::from_str(content)?,
        _ => return Err(HudError::UnsupportedExtension(ext.to_string())),
    };
    Ok(value)
}
