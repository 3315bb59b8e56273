use crate::{
    builders::item_leaf,
    data::{Character, MenuNode, Theme, ThemeColor},
};

pub const THEME: Theme = Theme::plain(ThemeColor::Orange);

/// Powers of both kinds, in sheet order.
pub fn build(character: &Character, title: &str) -> MenuNode {
    let items = character
        .items
        .iter()
        .filter(|i| i.kind.is_ability())
        .map(|i| item_leaf(i, String::new()))
        .collect();
    MenuNode::flat(title, THEME, items)
}
