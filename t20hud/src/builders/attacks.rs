use crate::{
    builders::item_leaf,
    data::{Character, Item, ItemKind, MenuNode, Theme, ThemeColor},
};

pub const THEME: Theme = Theme::plain(ThemeColor::Red);

/// Equipped weapons, in sheet order.
pub fn build(character: &Character, title: &str) -> MenuNode {
    let items = character
        .items
        .iter()
        .filter(|i| i.kind == ItemKind::Weapon && i.is_equipped())
        .map(|i| item_leaf(i, damage_summary(i)))
        .collect();
    MenuNode::flat(title, THEME, items)
}

/// Damage step and type, empty unless both are present.
fn damage_summary(item: &Item) -> String {
    let Some(damage) = &item.system.damage else {
        return String::new();
    };
    match (&damage.step, &damage.kind) {
        (Some(step), Some(kind)) => format!(
            r#"<span style="font-size:0.8em; color:#aaa;">{} {}</span>"#,
            step.text(),
            kind.text()
        ),
        _ => String::new(),
    }
}
