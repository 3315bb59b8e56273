use crate::{
    builders::item_leaf,
    data::{Character, Item, ItemKind, LeafItem, MenuNode, Tab, Theme, ThemeColor, value::format_number},
};

pub const THEME: Theme = Theme::with_own_tabs(ThemeColor::Red);

/// Carried items, one tab per item type.
///
/// Tabs appear in the order their type is first met in the sheet, unlike the
/// fixed order used by the skills menu.
pub fn build(character: &Character, title: &str) -> MenuNode {
    let mut groups: Vec<(&ItemKind, Vec<LeafItem>)> = Vec::new();

    for item in character.items.iter().filter(|i| i.kind.is_inventory()) {
        let leaf = item_leaf(item, quantity_badge(item));
        match groups.iter_mut().find(|(kind, _)| **kind == item.kind) {
            Some((_, leaves)) => leaves.push(leaf),
            None => groups.push((&item.kind, vec![leaf])),
        }
    }

    let tabs = groups
        .into_iter()
        .map(|(kind, leaves)| {
            let label = kind.inventory_label().unwrap_or(kind.tag());
            Tab::single(kind.tag(), label, leaves)
        })
        .collect();

    MenuNode::tabbed(title, THEME, tabs)
}

fn quantity_badge(item: &Item) -> String {
    let quantity = item.quantity();
    if quantity > 1.0 {
        format!("x{}", format_number(quantity))
    } else {
        String::new()
    }
}
