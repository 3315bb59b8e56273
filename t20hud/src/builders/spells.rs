use crate::{
    builders::item_leaf,
    data::{
        Character, Item, ItemKind, LeafItem, MenuNode, Tab, Theme, ThemeColor,
        value::format_number,
    },
};

pub const THEME: Theme = Theme::with_own_tabs(ThemeColor::Blue);

/// Spells grouped into one tab per circle, lowest circle first.
///
/// Leaves keep sheet order inside their tab. A character without spells gets
/// a flat empty list instead of empty tab scaffolding.
pub fn build(character: &Character, title: &str) -> MenuNode {
    let mut circles: Vec<(f64, Vec<LeafItem>)> = Vec::new();

    for spell in character.items.iter().filter(|i| i.kind == ItemKind::Spell) {
        let circle = spell.circle();
        let leaf = item_leaf(spell, mana_cost(spell));
        match circles.iter_mut().find(|(c, _)| *c == circle) {
            Some((_, leaves)) => leaves.push(leaf),
            None => circles.push((circle, vec![leaf])),
        }
    }

    if circles.is_empty() {
        return MenuNode::flat(title, Theme::plain(ThemeColor::Blue), Vec::new());
    }

    circles.sort_by(|a, b| a.0.total_cmp(&b.0));

    let tabs = circles
        .into_iter()
        .map(|(circle, leaves)| {
            let circle = format_number(circle);
            Tab::single(format!("c{circle}"), circle_label(&circle), leaves)
        })
        .collect();

    MenuNode::tabbed(title, THEME, tabs)
}

fn circle_label(circle: &str) -> String {
    if circle == "0" {
        "Cantrips".to_string()
    } else {
        format!("{circle}º tier")
    }
}

fn mana_cost(spell: &Item) -> String {
    match spell.mana_cost() {
        Some(cost) => format!(r#"<span style="color:#4ecdc4">{} PM</span>"#, cost.text()),
        None => String::new(),
    }
}
