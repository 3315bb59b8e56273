use crate::{
    builders::bold_modifier,
    data::{Character, LeafItem, MenuNode, Theme, ThemeColor},
};

pub const THEME: Theme = Theme::plain(ThemeColor::Gray);

/// Reserved leaf id of the initiative entry.
pub const INITIATIVE_ID: &str = "roll-initiative";

/// Leaf id prefix of attribute checks.
pub const ATTRIBUTE_ID_PREFIX: &str = "attr-";

/// Primary attributes in display order.
pub const PRIMARY_ATTRIBUTES: [(&str, &str); 6] = [
    ("for", "Strength"),
    ("des", "Dexterity"),
    ("con", "Constitution"),
    ("int", "Intelligence"),
    ("sab", "Wisdom"),
    ("car", "Charisma"),
];

/// Initiative roll followed by a check for each primary attribute the
/// character has.
pub fn build(character: &Character, title: &str) -> MenuNode {
    let mut items = vec![LeafItem {
        id: INITIATIVE_ID.to_string(),
        name: "Initiative".to_string(),
        img: "icons/svg/clockwork.svg".to_string(),
        description: "Roll Initiative".to_string(),
        cost: bold_modifier(character.initiative()),
    }];

    items.extend(PRIMARY_ATTRIBUTES.iter().filter_map(|(key, label)| {
        let attribute = character.attribute(key)?;
        Some(LeafItem {
            id: format!("{ATTRIBUTE_ID_PREFIX}{key}"),
            name: label.to_string(),
            img: "icons/svg/d20-highlight.svg".to_string(),
            description: format!("{label} check"),
            cost: bold_modifier(attribute.modifier()),
        })
    }));

    MenuNode::flat(title, THEME, items)
}
