//! Category routing and build-failure containment.
//!
//! The host asks for one category at a time. Routing goes through the closed
//! [`Category`] enum; unknown ids get an empty menu, and any failure while
//! building (a snapshot that does not decode, or a builder panic) is logged
//! and replaced by [`MenuNode::error`]. Nothing escapes to the host.

use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
    str::FromStr,
};

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    builders,
    config::HudConfig,
    data::{Character, MenuNode},
    error::HudError,
};

/// The six top-level categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Attacks,
    Spells,
    Abilities,
    Skills,
    Inventory,
    Utility,
}

impl Category {
    /// Every category, in layout order.
    pub const ALL: [Category; 6] = [
        Category::Attacks,
        Category::Spells,
        Category::Abilities,
        Category::Skills,
        Category::Inventory,
        Category::Utility,
    ];

    /// Id used in layout descriptors.
    pub fn id(self) -> &'static str {
        match self {
            Category::Attacks => "attacks",
            Category::Spells => "spells",
            Category::Abilities => "abilities",
            Category::Skills => "skills",
            Category::Inventory => "inventory",
            Category::Utility => "utility",
        }
    }

    /// Resolve a category id. The Tormenta20 system ids are accepted too.
    pub fn from_id(id: &str) -> Option<Self> {
        let category = match id {
            "attacks" | "ataque" => Category::Attacks,
            "spells" | "magia" => Category::Spells,
            "abilities" | "poder" => Category::Abilities,
            "skills" | "pericia" => Category::Skills,
            "inventory" | "inventario" => Category::Inventory,
            "utility" | "utilitario" => Category::Utility,
            _ => return None,
        };
        Some(category)
    }

    /// Run this category's builder.
    pub fn build(self, character: &Character, title: &str, config: &HudConfig) -> MenuNode {
        match self {
            Category::Attacks => builders::attacks::build(character, title),
            Category::Spells => builders::spells::build(character, title),
            Category::Abilities => builders::abilities::build(character, title),
            Category::Skills => builders::skills::build(character, title, config),
            Category::Inventory => builders::inventory::build(character, title),
            Category::Utility => builders::utility::build(character, title),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = HudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_id(s).ok_or_else(|| HudError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Host metadata of the category button that was opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    /// Button label, used as the menu title.
    #[serde(default)]
    pub label: String,
}

impl CategoryMeta {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Build the menu for `category_id`.
///
/// Async only so the host can await every adapter the same way; the work is
/// done synchronously.
pub async fn build_category(
    character: &Character,
    category_id: &str,
    meta: &CategoryMeta,
    config: &HudConfig,
) -> MenuNode {
    build_category_now(character, category_id, meta, config)
}

/// Build the menu for `category_id` straight from a host document.
///
/// A document that does not decode yields the error menu.
pub async fn build_category_from_value(
    document: &Value,
    category_id: &str,
    meta: &CategoryMeta,
    config: &HudConfig,
) -> MenuNode {
    let Some(category) = route(category_id) else {
        return MenuNode::empty(&meta.label);
    };
    match Character::from_value(document) {
        Ok(character) => contain(category, &character, meta, config),
        Err(e) => {
            error!("T20 HUD: cannot build `{category}`: {e}");
            MenuNode::error()
        }
    }
}

/// Synchronous core of [`build_category`].
pub fn build_category_now(
    character: &Character,
    category_id: &str,
    meta: &CategoryMeta,
    config: &HudConfig,
) -> MenuNode {
    match route(category_id) {
        Some(category) => contain(category, character, meta, config),
        None => MenuNode::empty(&meta.label),
    }
}

fn route(category_id: &str) -> Option<Category> {
    let category = Category::from_id(category_id);
    if category.is_none() {
        debug!("T20 HUD: unknown category `{category_id}`");
    }
    category
}

fn contain(
    category: Category,
    character: &Character,
    meta: &CategoryMeta,
    config: &HudConfig,
) -> MenuNode {
    guarded(category, || category.build(character, &meta.label, config))
}

fn guarded(category: Category, build: impl FnOnce() -> MenuNode) -> MenuNode {
    match panic::catch_unwind(AssertUnwindSafe(build)) {
        Ok(node) => node,
        Err(payload) => {
            let e = HudError::BuildPanicked {
                category: category.id(),
                message: panic_message(payload.as_ref()),
            };
            error!("T20 HUD: {e}");
            MenuNode::error()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
