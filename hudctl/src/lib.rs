//! # hudctl
//!
//! A command-line host for the Tormenta20 action-HUD adapter.
//!
//! `hudctl` plays the part of the HUD: it asks the adapter for its
//! descriptors and menus, and activates menu entries on a scripted character.
//!
//! ## Features
//!
//! - **Descriptors**: Print the default attribute bars and category layout
//! - **Menus**: Build any category menu from a JSON or TOML character snapshot
//! - **Actions**: Activate a menu entry and report which behavior ran
//!
//! ## Modules
//!
//! - [`config`] - Host configuration (`.hud.toml`)
//! - [`ctx`] - Application context and state management
//! - [`host`] - Scripted character and style host

/// Host configuration types.
pub mod config;

/// Application context and state management.
pub mod ctx;

/// Scripted stand-ins for the HUD host's collaborators.
pub mod host;

#[macro_use]
extern crate log;
