use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

use crate::{
    data::{
        item::Item,
        value::{LooseValue, lenient, lenient_map, loose_opt_text, loose_text, number_or_zero},
    },
    error::{HudError, Result},
};

/// Read-only snapshot of a Tormenta20 character, in the host's document shape.
///
/// Attribute and skill maps keep the order of the source document. Fields
/// of the wrong shape fall back to their defaults; only an item without an
/// id or an `items` field that is not a list rejects the whole snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Character {
    #[serde(default, deserialize_with = "loose_text")]
    pub id: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: String,
    /// Owned items, in sheet order.
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "lenient")]
    pub system: CharacterSystem,
}

impl Character {
    /// Decode a snapshot from a host document.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(HudError::Snapshot(serde_json::Error::custom(
                "a character snapshot must be an object",
            )));
        }
        Character::deserialize(value).map_err(HudError::Snapshot)
    }

    /// Look up an owned item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.system.attributes.as_ref()?.get(key)?.as_ref()
    }

    /// Initiative modifier, `0` when missing.
    pub fn initiative(&self) -> f64 {
        number_or_zero(self.system.initiative.as_ref().and_then(|i| i.value.as_ref()))
    }
}

/// Character-level fields under `system`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterSystem {
    /// Attributes keyed by their short tag (`for`, `des`, ...). A falsy
    /// entry (`null`, `0`, `""`) is treated as absent.
    #[serde(
        default,
        rename = "atributos",
        alias = "attributes",
        deserialize_with = "attribute_table"
    )]
    pub attributes: Option<IndexMap<String, Option<Attribute>>>,
    /// Skills keyed by skill key. `None` when the sheet has no skill table.
    #[serde(
        default,
        rename = "pericias",
        alias = "skills",
        deserialize_with = "lenient_map"
    )]
    pub skills: Option<IndexMap<String, Skill>>,
    #[serde(
        default,
        rename = "iniciativa",
        alias = "initiative",
        deserialize_with = "lenient"
    )]
    pub initiative: Option<Initiative>,
}

fn attribute_table<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<IndexMap<String, Option<Attribute>>>, D::Error> {
    let table: Option<IndexMap<String, LooseValue>> = lenient_map(deserializer)?;
    Ok(table.map(|entries| {
        entries
            .into_iter()
            .map(|(key, entry)| (key, entry.is_truthy().then(|| Attribute::from(entry.0))))
            .collect()
    }))
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub value: Option<LooseValue>,
    #[serde(default)]
    pub r#mod: Option<LooseValue>,
}

/// Reads `value` and `mod` off an object, skipping `null`s. Anything else
/// has neither.
impl From<Value> for Attribute {
    fn from(entry: Value) -> Self {
        let field = |key: &str| entry.get(key).filter(|v| !v.is_null()).cloned().map(LooseValue);
        Attribute {
            value: field("value"),
            r#mod: field("mod"),
        }
    }
}

impl Attribute {
    /// Modifier shown on the sheet: `value`, else `mod`, else `0`.
    pub fn modifier(&self) -> f64 {
        self.value
            .as_ref()
            .or(self.r#mod.as_ref())
            .map(LooseValue::number)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub value: Option<LooseValue>,
    #[serde(default, deserialize_with = "loose_opt_text")]
    pub label: Option<String>,
    /// Governing attribute tag.
    #[serde(
        default,
        rename = "atributo",
        alias = "attribute",
        deserialize_with = "loose_opt_text"
    )]
    pub attribute: Option<String>,
}

impl Skill {
    pub fn value(&self) -> f64 {
        number_or_zero(self.value.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Initiative {
    #[serde(default)]
    pub value: Option<LooseValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_host_document() {
        let c = Character::from_value(&json!({
            "name": "Aldric",
            "items": [{"id": "i1", "name": "Espada", "type": "arma"}],
            "system": {
                "atributos": {"for": {"value": 3}, "des": {"mod": -1}, "con": null},
                "pericias": {"luta": {"value": "5", "atributo": "for"}},
                "iniciativa": {"value": 2}
            }
        }))
        .unwrap();

        assert_eq!(c.item("i1").map(|i| i.name.as_str()), Some("Espada"));
        assert!(c.item("missing").is_none());
        assert_eq!(c.attribute("for").map(Attribute::modifier), Some(3.0));
        assert_eq!(c.attribute("des").map(Attribute::modifier), Some(-1.0));
        assert!(c.attribute("con").is_none());
        assert!(c.attribute("sab").is_none());
        assert_eq!(c.initiative(), 2.0);
        assert_eq!(c.system.skills.unwrap()["luta"].value(), 5.0);
    }

    #[test]
    fn test_value_shadows_mod() {
        // value 存在但无效时不回退到 mod
        let attr: Attribute = serde_json::from_value(json!({"value": "x", "mod": 4})).unwrap();
        assert_eq!(attr.modifier(), 0.0);

        let attr: Attribute = serde_json::from_value(json!({"value": null, "mod": 4})).unwrap();
        assert_eq!(attr.modifier(), 4.0);
    }

    #[test]
    fn test_invalid_snapshot() {
        let err = Character::from_value(&json!({"items": "nope"})).unwrap_err();
        assert!(matches!(err, HudError::Snapshot(_)));

        for document in [json!([]), json!(null), json!("Aldric")] {
            let err = Character::from_value(&document).unwrap_err();
            assert!(matches!(err, HudError::Snapshot(_)), "{document}");
        }
    }

    #[test]
    fn test_malformed_fields_default() {
        let c = Character::from_value(&json!({
            "id": 42,
            "name": null,
            "items": [{
                "id": "w1",
                "name": null,
                "img": null,
                "type": "arma",
                "system": {"equipado": true, "description": "plain text", "dano": 7}
            }],
            "system": {
                "atributos": {"for": 3, "des": 0, "int": {"value": 1}},
                "pericias": {"luta": {"value": 4, "label": 12, "atributo": null}, "oficio": "x"},
                "iniciativa": "fast"
            }
        }))
        .unwrap();

        assert_eq!(c.id, "42");
        assert_eq!(c.name, "");
        let sword = c.item("w1").unwrap();
        assert_eq!((sword.name.as_str(), sword.img.as_str()), ("", ""));
        assert!(sword.is_equipped());
        assert_eq!(sword.description(), "");
        assert!(sword.system.damage.is_none());

        // 标量属性存在但没有 value/mod
        assert_eq!(c.attribute("for").map(Attribute::modifier), Some(0.0));
        assert!(c.attribute("des").is_none());
        assert_eq!(c.attribute("int").map(Attribute::modifier), Some(1.0));

        let skills = c.system.skills.as_ref().unwrap();
        assert_eq!(skills["luta"].label.as_deref(), Some("12"));
        assert!(skills["luta"].attribute.is_none());
        assert_eq!(skills["oficio"], Skill::default());
        assert_eq!(c.initiative(), 0.0);
    }

    #[test]
    fn test_malformed_system_block() {
        let c = Character::from_value(&json!({"name": "Aldric", "system": "broken"})).unwrap();
        assert_eq!(c.name, "Aldric");
        assert_eq!(c.system, CharacterSystem::default());
    }
}
