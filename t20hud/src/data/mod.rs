//! Character snapshots and menu descriptions.
//!
//! - [`character`] - Read-only character snapshot decoded from host documents
//! - [`item`] - Owned items and their type tags
//! - [`menu`] - Menu nodes, tabs and leaves handed back to the host
//! - [`value`] - Lenient coercion of loosely-typed host fields

/// Character snapshot: attributes, skills and initiative.
pub mod character;

/// Owned items and their type tags.
pub mod item;

/// Menu structure returned to the HUD host.
pub mod menu;

/// Loosely-typed scalar fields.
pub mod value;

pub use character::{Attribute, Character, Skill};
pub use item::{Item, ItemKind};
pub use menu::{LeafItem, MenuItems, MenuNode, SubTab, Tab, Theme, ThemeColor};
