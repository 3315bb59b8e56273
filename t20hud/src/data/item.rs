use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::value::{LooseValue, lenient, loose_text};

/// An owned item of a character snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Host document id, used as the leaf id of item-backed menu entries.
    pub id: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: String,
    /// Image reference.
    #[serde(default, deserialize_with = "loose_text")]
    pub img: String,
    /// Type tag deciding which builders pick the item up.
    #[serde(default, rename = "type")]
    pub kind: ItemKind,
    /// Type-specific fields.
    #[serde(default, deserialize_with = "lenient")]
    pub system: ItemSystem,
}

impl Item {
    /// Rich-text description, empty when absent.
    pub fn description(&self) -> String {
        self.system
            .description
            .as_ref()
            .and_then(|d| d.value.clone())
            .unwrap_or_default()
    }

    /// Whether the item is flagged as equipped.
    pub fn is_equipped(&self) -> bool {
        self.system
            .equipped
            .as_ref()
            .is_some_and(LooseValue::is_truthy)
    }

    /// Stack size, reading the legacy `qtd` field when `quantidade` is absent.
    pub fn quantity(&self) -> f64 {
        self.system
            .quantity
            .as_ref()
            .or(self.system.legacy_quantity.as_ref())
            .map(LooseValue::number)
            .unwrap_or(1.0)
    }

    /// Spell circle, `0` when missing or unset.
    pub fn circle(&self) -> f64 {
        self.system
            .circle
            .as_ref()
            .filter(|c| c.is_truthy())
            .map(LooseValue::number)
            .unwrap_or(0.0)
    }

    /// Mana cost of a spell, the first set value of `pm` and `custo`.
    pub fn mana_cost(&self) -> Option<&LooseValue> {
        [self.system.pm.as_ref(), self.system.cost.as_ref()]
            .into_iter()
            .flatten()
            .find(|v| v.is_truthy())
    }
}

/// Item type tags known to the Tormenta20 system.
///
/// Tags are stored as the Portuguese wire names; English names are accepted
/// when reading. Unknown tags are kept verbatim in [`ItemKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LooseValue", into = "String")]
pub enum ItemKind {
    Weapon,
    Spell,
    Ability,
    /// Distinction powers, a second ability variant.
    DistinctionAbility,
    Consumable,
    Treasure,
    Armor,
    Equipment,
    Other(String),
}

impl ItemKind {
    /// Wire tag of this kind.
    pub fn tag(&self) -> &str {
        match self {
            ItemKind::Weapon => "arma",
            ItemKind::Spell => "magia",
            ItemKind::Ability => "poder",
            ItemKind::DistinctionAbility => "poder-distincao",
            ItemKind::Consumable => "consumivel",
            ItemKind::Treasure => "tesouro",
            ItemKind::Armor => "armadura",
            ItemKind::Equipment => "equipamento",
            ItemKind::Other(tag) => tag,
        }
    }

    pub fn is_ability(&self) -> bool {
        matches!(self, ItemKind::Ability | ItemKind::DistinctionAbility)
    }

    /// Whether the kind belongs in the inventory.
    pub fn is_inventory(&self) -> bool {
        matches!(
            self,
            ItemKind::Equipment
                | ItemKind::Consumable
                | ItemKind::Treasure
                | ItemKind::Weapon
                | ItemKind::Armor
        )
    }

    /// Inventory tab label.
    pub fn inventory_label(&self) -> Option<&'static str> {
        match self {
            ItemKind::Equipment => Some("Equip."),
            ItemKind::Consumable => Some("Consum."),
            ItemKind::Treasure => Some("Treasure"),
            ItemKind::Weapon => Some("Weapons"),
            ItemKind::Armor => Some("Armor"),
            _ => None,
        }
    }
}

impl From<String> for ItemKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "arma" | "weapon" => ItemKind::Weapon,
            "magia" | "spell" => ItemKind::Spell,
            "poder" | "ability" => ItemKind::Ability,
            "poder-distincao" | "distinction" => ItemKind::DistinctionAbility,
            "consumivel" | "consumable" => ItemKind::Consumable,
            "tesouro" | "treasure" => ItemKind::Treasure,
            "armadura" | "armor" => ItemKind::Armor,
            "equipamento" | "equipment" => ItemKind::Equipment,
            _ => ItemKind::Other(tag),
        }
    }
}

impl From<LooseValue> for ItemKind {
    fn from(tag: LooseValue) -> Self {
        ItemKind::from(tag.text())
    }
}

/// An untagged item matches no builder.
impl Default for ItemKind {
    fn default() -> Self {
        ItemKind::Other(String::new())
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.tag().to_string()
    }
}

/// Type-specific item fields. Every field is optional; builders default
/// whatever is missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemSystem {
    #[serde(default, rename = "equipado", alias = "equipped")]
    pub equipped: Option<LooseValue>,
    #[serde(
        default,
        rename = "dano",
        alias = "damage",
        deserialize_with = "lenient"
    )]
    pub damage: Option<Damage>,
    #[serde(default, rename = "circulo", alias = "circle")]
    pub circle: Option<LooseValue>,
    #[serde(default)]
    pub pm: Option<LooseValue>,
    #[serde(default, rename = "custo", alias = "cost")]
    pub cost: Option<LooseValue>,
    #[serde(default, rename = "quantidade", alias = "quantity")]
    pub quantity: Option<LooseValue>,
    #[serde(default, rename = "qtd")]
    pub legacy_quantity: Option<LooseValue>,
    #[serde(default)]
    pub description: Option<RichText>,
}

/// Weapon damage: dice step and damage type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Damage {
    #[serde(default, rename = "passo", alias = "step")]
    pub step: Option<LooseValue>,
    #[serde(default, rename = "tipo", alias = "type")]
    pub kind: Option<LooseValue>,
}

/// Rich-text field wrapper as stored by the host. Only the `value` of an
/// object counts; a bare string or any other shape reads as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RichText {
    pub value: Option<String>,
}

impl From<Value> for RichText {
    fn from(field: Value) -> Self {
        let value = field
            .get("value")
            .map(|v| LooseValue(v.clone()))
            .filter(LooseValue::is_truthy)
            .map(|v| v.text());
        RichText { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ItemKind::from("arma".to_string()), ItemKind::Weapon);
        assert_eq!(ItemKind::from("armor".to_string()), ItemKind::Armor);
        assert_eq!(
            ItemKind::from("classe".to_string()),
            ItemKind::Other("classe".to_string())
        );
        assert_eq!(ItemKind::DistinctionAbility.tag(), "poder-distincao");
        assert!(!ItemKind::Spell.is_inventory());
        assert!(ItemKind::Weapon.is_inventory());
    }

    #[test]
    fn test_quantity_fallbacks() {
        let i = item(json!({"id": "a", "type": "consumivel", "system": {"qtd": "3"}}));
        assert_eq!(i.quantity(), 3.0);

        let i = item(json!({"id": "a", "type": "consumivel", "system": {"quantidade": 2, "qtd": 9}}));
        assert_eq!(i.quantity(), 2.0);

        let i = item(json!({"id": "a", "type": "consumivel"}));
        assert_eq!(i.quantity(), 1.0);
    }

    #[test]
    fn test_spell_fields() {
        let i = item(json!({"id": "s", "type": "magia", "system": {"circulo": "", "pm": 0, "custo": "2"}}));
        assert_eq!(i.circle(), 0.0);
        assert_eq!(i.mana_cost().map(LooseValue::text), Some("2".to_string()));

        let i = item(json!({"id": "s", "type": "magia", "system": {"circulo": 3}}));
        assert_eq!(i.circle(), 3.0);
        assert!(i.mana_cost().is_none());
    }

    #[test]
    fn test_description_and_equipped() {
        let i = item(json!({
            "id": "w",
            "type": "arma",
            "system": {"equipado": true, "description": {"value": "<p>Sharp</p>"}}
        }));
        assert!(i.is_equipped());
        assert_eq!(i.description(), "<p>Sharp</p>");

        let i = item(json!({"id": "w", "type": "arma", "system": {"description": {"value": null}}}));
        assert!(!i.is_equipped());
        assert_eq!(i.description(), "");

        let i = item(json!({"id": "w", "type": "arma", "system": {"description": "<p>Bare</p>"}}));
        assert_eq!(i.description(), "");
    }

    #[test]
    fn test_loose_header_fields() {
        let i = item(json!({"id": "w1", "name": "Espada", "img": null, "type": "arma", "system": null}));
        assert_eq!(i.img, "");
        assert_eq!(i.kind, ItemKind::Weapon);
        assert_eq!(i.system, ItemSystem::default());

        let i = item(json!({"id": "x", "name": 3}));
        assert_eq!(i.name, "3");
        assert_eq!(i.kind, ItemKind::default());
        assert!(!i.kind.is_inventory());

        let i = item(json!({"id": "w", "type": "arma", "system": {"dano": "1d8", "equipado": 1}}));
        assert!(i.system.damage.is_none());
        assert!(i.is_equipped());
    }
}
