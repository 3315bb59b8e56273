//! Category builders.
//!
//! Each builder is a pure function from a [`Character`](crate::data::Character) snapshot to the
//! [`MenuNode`](crate::data::MenuNode) of one category. Builders never fail:
//! missing or malformed data is defaulted while building.
//!
//! - [`attacks`] - Equipped weapons
//! - [`spells`] - Spells grouped by circle
//! - [`abilities`] - Powers
//! - [`skills`] - Skills grouped by governing attribute
//! - [`inventory`] - Carried items grouped by type
//! - [`utility`] - Initiative and attribute checks

use crate::data::{Item, LeafItem, value::signed};

pub mod abilities;
pub mod attacks;
pub mod inventory;
pub mod skills;
pub mod spells;
pub mod utility;

/// Leaf for an item-backed entry. The leaf id is the item id, so the action
/// dispatcher resolves it through the character's item collection.
pub(crate) fn item_leaf(item: &Item, cost: String) -> LeafItem {
    LeafItem {
        id: item.id.clone(),
        name: item.name.clone(),
        img: item.img.clone(),
        description: item.description(),
        cost,
    }
}

/// Bold signed modifier, e.g. `+3`.
pub(crate) fn bold_modifier(n: f64) -> String {
    format!(r#"<span style="font-weight:bold;">{}</span>"#, signed(n))
}
