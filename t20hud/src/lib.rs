//! # t20hud
//!
//! Tormenta20 adapter for a token action HUD.
//!
//! The HUD host asks an adapter for the resource bars it should show, the
//! category layout, and the menu of each category. When the user activates a
//! menu entry, the host hands the entry id back and the adapter runs the
//! matching roll or item behavior on the character.
//!
//! ## Features
//!
//! - Default attribute bars and category layout for Tormenta20 sheets
//! - Six category menus: attacks, spells, abilities, skills, inventory, utility
//! - Tolerant reading of sheet data: Portuguese keys, English aliases, loose numbers
//! - Menu building that never fails: errors become an "Error" menu
//! - Capability-probing action dispatch with at most one behavior per activation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use t20hud::{Character, CategoryMeta, HudConfig, build_category};
//!
//! # async fn demo(doc: serde_json::Value) -> anyhow::Result<()> {
//! let character = Character::from_value(&doc)?;
//! let menu = build_category(&character, "skills", &CategoryMeta::new("Skills"), &HudConfig::default()).await;
//! println!("{}", serde_json::to_string_pretty(&menu)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`action`] - Mapping activated entries to character behaviors
//! - [`adapter`] - The system adapter handed to the host
//! - [`builders`] - One menu builder per category
//! - [`config`] - Optional user configuration
//! - [`data`] - Character snapshot and menu structures
//! - [`descriptors`] - Default attribute and layout descriptors
//! - [`dispatch`] - Category routing with failure containment

#[macro_use]
extern crate log;

/// Mapping activated menu entries to character behaviors.
pub mod action;

/// The system adapter handed to the HUD host.
pub mod adapter;

/// One menu builder per category.
pub mod builders;

pub mod config;

/// Character snapshot and menu data structures.
///
/// Sheet data is decoded tolerantly: every field is optional and numeric
/// fields accept strings.
pub mod data;

pub mod descriptors;

/// Category routing with failure containment.
pub mod dispatch;

pub mod error;

pub use action::{Actor, Dispatched, ItemHandle, TriggerContext, dispatch_action};
pub use adapter::{StyleHost, SystemAdapter, Tormenta20Adapter};
pub use config::HudConfig;
pub use data::{Character, MenuNode};
pub use dispatch::{Category, CategoryMeta, build_category, build_category_from_value};
pub use error::{HudError, Result};
pub use serde_json::Value;
