use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{
    config::HudConfig,
    data::{Character, LeafItem, MenuNode, Skill, Tab, Theme, ThemeColor, value::signed},
};

pub const THEME: Theme = Theme::with_own_tabs(ThemeColor::Green);

/// Leaf id prefix of skill entries.
pub const SKILL_ID_PREFIX: &str = "skill-";

/// Tab holding every skill.
pub const ALL_TAB: &str = "all";

/// Tab for skills without a governing attribute.
pub const FALLBACK_TAB: &str = "nula";

/// Canonical tab order with labels. No other tab is ever emitted.
const TAB_ORDER: [(&str, &str); 8] = [
    (ALL_TAB, "All"),
    ("for", "STR"),
    ("des", "DEX"),
    ("con", "CON"),
    ("int", "INT"),
    ("sab", "WIS"),
    ("car", "CHA"),
    (FALLBACK_TAB, "General"),
];

const SKILL_ICON: &str = "icons/svg/d20-grey.svg";

/// Skills grouped by governing attribute, behind an "all" tab.
///
/// Every tab is sorted by display name. Tabs without skills are dropped,
/// except "all", which is always present.
pub fn build(character: &Character, title: &str, config: &HudConfig) -> MenuNode {
    let Some(skills) = &character.system.skills else {
        return MenuNode::empty(title);
    };

    let mut all = Vec::with_capacity(skills.len());
    let mut by_attribute: Vec<(&str, Vec<LeafItem>)> = Vec::new();

    for (key, skill) in skills {
        let leaf = skill_leaf(key, skill, config);
        let tag = skill
            .attribute
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK_TAB);
        match by_attribute.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, leaves)) => leaves.push(leaf.clone()),
            None => by_attribute.push((tag, vec![leaf.clone()])),
        }
        all.push(leaf);
    }

    let mut tabs = Vec::new();
    for (key, label) in TAB_ORDER {
        let leaves = if key == ALL_TAB {
            Some(std::mem::take(&mut all))
        } else {
            by_attribute
                .iter_mut()
                .find(|(t, _)| *t == key)
                .map(|(_, leaves)| std::mem::take(leaves))
        };
        if let Some(mut leaves) = leaves {
            leaves.sort_by(|a, b| locale_cmp(&a.name, &b.name));
            tabs.push(Tab::single(key, label, leaves));
        }
    }

    let dropped: Vec<_> = by_attribute
        .iter()
        .filter(|(t, _)| !TAB_ORDER.iter().any(|(k, _)| k == t))
        .map(|(t, _)| *t)
        .collect();
    if !dropped.is_empty() {
        debug!("T20 HUD: no skill tab for attributes {dropped:?}");
    }

    MenuNode::tabbed(title, THEME, tabs)
}

fn skill_leaf(key: &str, skill: &Skill, config: &HudConfig) -> LeafItem {
    let name = display_name(key, skill, config);
    LeafItem {
        id: format!("{SKILL_ID_PREFIX}{key}"),
        img: SKILL_ICON.to_string(),
        cost: format!(
            r#"<span style="font-weight:bold; color:#eee;">{}</span>"#,
            signed(skill.value())
        ),
        description: format!("Roll {name}"),
        name,
    }
}

/// Configured label, else the sheet label, else the key with a capital.
fn display_name(key: &str, skill: &Skill, config: &HudConfig) -> String {
    if let Some(label) = config.skill_label(key) {
        return label.to_string();
    }
    if let Some(label) = skill.label.as_deref().filter(|l| !l.is_empty()) {
        return label.to_string();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accent- and case-insensitive ordering, ties broken by the exact text.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
