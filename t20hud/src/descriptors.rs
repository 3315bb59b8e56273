//! Fixed attribute-bar and category-layout declarations.

use serde::Serialize;

use crate::dispatch::Category;

/// How the host draws a tracked attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeStyle {
    Bar,
    Badge,
}

/// A character attribute shown as a bar or badge on the HUD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDescriptor {
    /// Dotted path into the character document.
    pub path: &'static str,
    pub label: &'static str,
    /// CSS color.
    pub color: &'static str,
    pub style: AttributeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Submenu,
}

/// A top-level category button of the HUD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub id: Category,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_sidebar: bool,
}

impl CategoryDescriptor {
    const fn submenu(id: Category, label: &'static str, icon: &'static str, use_sidebar: bool) -> Self {
        Self {
            id,
            label,
            icon,
            kind: LayoutKind::Submenu,
            use_sidebar,
        }
    }
}

/// Attribute bars and badges displayed by default.
pub fn default_attributes() -> Vec<AttributeDescriptor> {
    vec![
        AttributeDescriptor {
            path: "system.attributes.pv",
            label: "PV",
            color: "#e61c34",
            style: AttributeStyle::Bar,
            icon: None,
        },
        AttributeDescriptor {
            path: "system.attributes.pm",
            label: "PM",
            color: "#2b6cb0",
            style: AttributeStyle::Bar,
            icon: None,
        },
        AttributeDescriptor {
            path: "system.attributes.defesa.value",
            label: "Defense",
            color: "#718096",
            style: AttributeStyle::Badge,
            icon: Some("fas fa-shield-alt"),
        },
    ]
}

/// Default top-level category layout.
pub fn default_layout() -> Vec<CategoryDescriptor> {
    vec![
        CategoryDescriptor::submenu(Category::Attacks, "Attacks", "fas fa-swords", false),
        CategoryDescriptor::submenu(Category::Spells, "Spells", "fas fa-magic", true),
        CategoryDescriptor::submenu(Category::Abilities, "Abilities", "fas fa-fist-raised", false),
        CategoryDescriptor::submenu(Category::Skills, "Skills", "fas fa-dice-d20", true),
        CategoryDescriptor::submenu(Category::Inventory, "Inventory", "fas fa-box-open", true),
        CategoryDescriptor::submenu(Category::Utility, "Util", "fas fa-cogs", false),
    ]
}
