//! Host configuration types.
//!
//! The host reads the same `.hud.toml` file as the adapter. Adapter settings
//! sit at the top level; the `[capabilities]` table selects which behaviors
//! the scripted character exposes.
//!
//! # Configuration File Format
//!
//! ```toml
//! [skill_labels]
//! luta = "Luta"
//!
//! [capabilities]
//! skill_roll = false
//! skill_roll_fallback = true
//! item_roll = false
//! ```

use serde::{Deserialize, Serialize};
use t20hud::HudConfig;

/// Root host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// Adapter settings.
    #[serde(flatten)]
    pub hud: HudConfig,
    #[serde(default)]
    pub capabilities: Capabilities,
}

/// Behaviors the scripted character offers the action dispatcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Capabilities {
    pub skill_roll: bool,
    /// Secondary skill roll, only reached when `skill_roll` is off.
    pub skill_roll_fallback: bool,
    pub attribute_roll: bool,
    pub initiative_roll: bool,
    pub item_roll: bool,
    pub item_use: bool,
    pub item_sheet: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            skill_roll: true,
            skill_roll_fallback: false,
            attribute_roll: true,
            initiative_roll: true,
            item_roll: true,
            item_use: true,
            item_sheet: true,
        }
    }
}
