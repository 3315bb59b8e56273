//! Menu description handed to the HUD host.
//!
//! A [`MenuNode`] is either a flat list of [`LeafItem`]s or an ordered list of
//! [`Tab`]s, each holding ordered [`SubTab`]s. The host expects tabbed menus as
//! three parallel maps (`items`, `tabLabels`, `subTabLabels`); they are derived
//! from the single tab list at serialization time, so their key sets always
//! agree and share one order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Key of the synthetic subtab used by single-level tab groups.
pub const MAIN_SUBTAB: &str = "main";

/// Theme modifier asking the host to hide its own tab strip.
pub const HIDE_TABS_CLASS: &str = "t20-hide-tabs";

/// A selectable, actionable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafItem {
    pub id: String,
    pub name: String,
    pub img: String,
    /// Rich text shown in the tooltip.
    pub description: String,
    /// Display fragment rendered next to the name.
    pub cost: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Red,
    Blue,
    Orange,
    Green,
    Gray,
}

impl ThemeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeColor::Red => "red",
            ThemeColor::Blue => "blue",
            ThemeColor::Orange => "orange",
            ThemeColor::Green => "green",
            ThemeColor::Gray => "gray",
        }
    }
}

/// Menu theme: a color plus the optional hide-native-tabs modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: ThemeColor,
    pub hide_native_tabs: bool,
}

impl Theme {
    pub const fn plain(color: ThemeColor) -> Self {
        Self {
            color,
            hide_native_tabs: false,
        }
    }

    /// Theme for menus that render their own tab strip.
    pub const fn with_own_tabs(color: ThemeColor) -> Self {
        Self {
            color,
            hide_native_tabs: true,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color.as_str())?;
        if self.hide_native_tabs {
            write!(f, " {HIDE_TABS_CLASS}")?;
        }
        Ok(())
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubTab {
    pub key: String,
    pub label: String,
    pub items: Vec<LeafItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub label: String,
    pub sub_tabs: Vec<SubTab>,
}

impl Tab {
    /// A tab with a single unlabeled `main` subtab.
    pub fn single(key: impl Into<String>, label: impl Into<String>, items: Vec<LeafItem>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sub_tabs: vec![SubTab {
                key: MAIN_SUBTAB.to_string(),
                label: String::new(),
                items,
            }],
        }
    }

    /// All leaves of the tab, in subtab order.
    pub fn leaves(&self) -> impl Iterator<Item = &LeafItem> {
        self.sub_tabs.iter().flat_map(|s| s.items.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItems {
    Flat(Vec<LeafItem>),
    Tabbed(Vec<Tab>),
}

/// Builder output for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub title: String,
    pub theme: Option<Theme>,
    pub items: MenuItems,
}

impl MenuNode {
    /// Title used by the sentinel node returned when a build fails.
    pub const ERROR_TITLE: &'static str = "Error";

    pub fn flat(title: impl Into<String>, theme: Theme, items: Vec<LeafItem>) -> Self {
        Self {
            title: title.into(),
            theme: Some(theme),
            items: MenuItems::Flat(items),
        }
    }

    pub fn tabbed(title: impl Into<String>, theme: Theme, tabs: Vec<Tab>) -> Self {
        Self {
            title: title.into(),
            theme: Some(theme),
            items: MenuItems::Tabbed(tabs),
        }
    }

    /// `{title, items: []}` with no theme.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            theme: None,
            items: MenuItems::Flat(Vec::new()),
        }
    }

    /// The sentinel node shown when building failed.
    pub fn error() -> Self {
        Self::empty(Self::ERROR_TITLE)
    }

    pub fn is_error(&self) -> bool {
        *self == Self::error()
    }

    pub fn has_tabs(&self) -> bool {
        matches!(self.items, MenuItems::Tabbed(_))
    }

    /// Tabs of a tabbed node, empty for flat nodes.
    pub fn tabs(&self) -> &[Tab] {
        match &self.items {
            MenuItems::Tabbed(tabs) => tabs,
            MenuItems::Flat(_) => &[],
        }
    }

    pub fn tab(&self, key: &str) -> Option<&Tab> {
        self.tabs().iter().find(|t| t.key == key)
    }

    /// Leaves of a flat node, empty for tabbed nodes.
    pub fn flat_items(&self) -> &[LeafItem] {
        match &self.items {
            MenuItems::Flat(items) => items,
            MenuItems::Tabbed(_) => &[],
        }
    }

    /// Every leaf of the node, tabs flattened in order.
    pub fn leaves(&self) -> Vec<&LeafItem> {
        match &self.items {
            MenuItems::Flat(items) => items.iter().collect(),
            MenuItems::Tabbed(tabs) => tabs.iter().flat_map(Tab::leaves).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireMenuNode<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_tabs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_sub_tabs: Option<bool>,
    items: WireItems<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tab_labels: Option<IndexMap<&'a str, &'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_tab_labels: Option<IndexMap<&'a str, IndexMap<&'a str, &'a str>>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireItems<'a> {
    Flat(&'a [LeafItem]),
    Tabbed(IndexMap<&'a str, IndexMap<&'a str, &'a [LeafItem]>>),
}

impl Serialize for MenuNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match &self.items {
            MenuItems::Flat(items) => WireMenuNode {
                title: &self.title,
                theme: self.theme,
                has_tabs: None,
                has_sub_tabs: None,
                items: WireItems::Flat(items),
                tab_labels: None,
                sub_tab_labels: None,
            },
            MenuItems::Tabbed(tabs) => {
                let items: IndexMap<_, IndexMap<_, _>> = tabs
                    .iter()
                    .map(|t| {
                        let subs: IndexMap<_, _> = t
                            .sub_tabs
                            .iter()
                            .map(|s| (s.key.as_str(), s.items.as_slice()))
                            .collect();
                        (t.key.as_str(), subs)
                    })
                    .collect();
                let tab_labels: IndexMap<_, _> = tabs
                    .iter()
                    .map(|t| (t.key.as_str(), t.label.as_str()))
                    .collect();
                let sub_tab_labels: IndexMap<_, IndexMap<_, _>> = tabs
                    .iter()
                    .map(|t| {
                        let subs: IndexMap<_, _> = t
                            .sub_tabs
                            .iter()
                            .map(|s| (s.key.as_str(), s.label.as_str()))
                            .collect();
                        (t.key.as_str(), subs)
                    })
                    .collect();
                WireMenuNode {
                    title: &self.title,
                    theme: self.theme,
                    has_tabs: Some(true),
                    has_sub_tabs: Some(true),
                    items: WireItems::Tabbed(items),
                    tab_labels: Some(tab_labels),
                    sub_tab_labels: Some(sub_tab_labels),
                }
            }
        };
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn leaf(id: &str) -> LeafItem {
        LeafItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            img: "icons/svg/item-bag.svg".to_string(),
            description: String::new(),
            cost: String::new(),
        }
    }

    #[test]
    fn test_theme_text() {
        assert_eq!(Theme::plain(ThemeColor::Gray).to_string(), "gray");
        assert_eq!(
            Theme::with_own_tabs(ThemeColor::Blue).to_string(),
            "blue t20-hide-tabs"
        );
    }

    #[test]
    fn test_error_node_wire_shape() {
        let v = serde_json::to_value(MenuNode::error()).unwrap();
        assert_eq!(v, json!({"title": "Error", "items": []}));
        assert!(MenuNode::error().is_error());
        assert!(!MenuNode::empty("Skills").is_error());
    }

    #[test]
    fn test_tabbed_wire_shape() {
        let node = MenuNode::tabbed(
            "Inventory",
            Theme::with_own_tabs(ThemeColor::Red),
            vec![
                Tab::single("armadura", "Armor", vec![leaf("a1")]),
                Tab::single("arma", "Weapons", vec![leaf("w1")]),
            ],
        );
        let v = serde_json::to_value(&node).unwrap();
        assert_eq!(
            v,
            json!({
                "title": "Inventory",
                "theme": "red t20-hide-tabs",
                "hasTabs": true,
                "hasSubTabs": true,
                "items": {
                    "armadura": {"main": [{"id": "a1", "name": "A1", "img": "icons/svg/item-bag.svg", "description": "", "cost": ""}]},
                    "arma": {"main": [{"id": "w1", "name": "W1", "img": "icons/svg/item-bag.svg", "description": "", "cost": ""}]}
                },
                "tabLabels": {"armadura": "Armor", "arma": "Weapons"},
                "subTabLabels": {"armadura": {"main": ""}, "arma": {"main": ""}}
            })
        );
    }

    #[test]
    fn test_wire_key_order() {
        let node = MenuNode::tabbed(
            "Spells",
            Theme::with_own_tabs(ThemeColor::Blue),
            vec![
                Tab::single("c0", "Cantrips", vec![]),
                Tab::single("c2", "2º tier", vec![]),
                Tab::single("c1", "1º tier", vec![]),
            ],
        );
        let text = serde_json::to_string(&node).unwrap();
        let pos = |needle: &str| text.find(needle).unwrap();
        // 序列化顺序与 tab 列表一致
        assert!(pos("\"c0\":{\"main\"") < pos("\"c2\":{\"main\""));
        assert!(pos("\"c2\":{\"main\"") < pos("\"c1\":{\"main\""));
        assert!(pos("\"c0\":\"Cantrips\"") < pos("\"c1\":\"1º tier\""));
    }
}
