//! Stand-ins for the HUD host's collaborators.
//!
//! [`ScriptedActor`] exposes the behaviors enabled in [`Capabilities`] on top
//! of a decoded character. Each behavior appends a line to a shared
//! [`Journal`] when it completes, so the CLI can report what ran.

use std::sync::{Arc, Mutex};

use futures::FutureExt;
use t20hud::{
    Actor, Character, ItemHandle, StyleHost,
    action::{Completion, InitiativeOptions},
    data::value::signed,
};

use crate::config::Capabilities;

/// Lines written by completed behaviors.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    fn push(&self, line: String) {
        if let Ok(mut lines) = self.0.lock() {
            lines.push(line);
        }
    }

    /// Take every line written so far.
    pub fn drain(&self) -> Vec<String> {
        self.0
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }

    fn complete(&self, line: String) -> Completion {
        let journal = self.clone();
        async move {
            journal.push(line);
            anyhow::Ok(())
        }
        .boxed()
    }
}

/// A character whose behaviors only write to the journal.
pub struct ScriptedActor {
    character: Character,
    capabilities: Capabilities,
    items: Vec<ScriptedItem>,
    journal: Journal,
}

impl ScriptedActor {
    pub fn new(character: Character, capabilities: Capabilities) -> Self {
        let journal = Journal::default();
        let items = character
            .items
            .iter()
            .map(|item| ScriptedItem {
                id: item.id.clone(),
                name: item.name.clone(),
                capabilities,
                journal: journal.clone(),
            })
            .collect();
        Self {
            character,
            capabilities,
            items,
            journal,
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    fn skill_line(&self, key: &str, via: &str) -> Option<Completion> {
        let skill = self.character.system.skills.as_ref()?.get(key)?;
        let label = skill.label.as_deref().unwrap_or(key);
        Some(
            self.journal
                .complete(format!("{via} {label} {}", signed(skill.value()))),
        )
    }
}

impl Actor for ScriptedActor {
    fn roll_skill(&self, key: &str) -> Option<Completion> {
        if !self.capabilities.skill_roll {
            return None;
        }
        self.skill_line(key, "skill roll")
    }

    fn roll_skill_fallback(&self, key: &str) -> Option<Completion> {
        if !self.capabilities.skill_roll_fallback {
            return None;
        }
        self.skill_line(key, "skill roll (fallback)")
    }

    fn roll_attribute(&self, key: &str) -> Option<Completion> {
        if !self.capabilities.attribute_roll {
            return None;
        }
        let attribute = self.character.attribute(key)?;
        Some(
            self.journal
                .complete(format!("attribute check {key} {}", signed(attribute.modifier()))),
        )
    }

    fn roll_initiative(&self, options: InitiativeOptions) -> Option<Completion> {
        if !self.capabilities.initiative_roll {
            return None;
        }
        Some(self.journal.complete(format!(
            "initiative {} (create combatants: {})",
            signed(self.character.initiative()),
            options.create_combatants
        )))
    }

    fn item(&self, id: &str) -> Option<&dyn ItemHandle> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item as &dyn ItemHandle)
    }
}

struct ScriptedItem {
    id: String,
    name: String,
    capabilities: Capabilities,
    journal: Journal,
}

impl ItemHandle for ScriptedItem {
    fn roll(&self) -> Option<Completion> {
        self.capabilities
            .item_roll
            .then(|| self.journal.complete(format!("roll {}", self.name)))
    }

    fn use_item(&self) -> Option<Completion> {
        self.capabilities
            .item_use
            .then(|| self.journal.complete(format!("use {}", self.name)))
    }

    fn open_sheet(&self) -> Option<Completion> {
        self.capabilities
            .item_sheet
            .then(|| self.journal.complete(format!("open sheet of {}", self.name)))
    }
}

/// Style host that only logs what it is given.
#[derive(Debug, Default)]
pub struct LogStyleHost {
    installed: Vec<String>,
}

impl LogStyleHost {
    /// Ids of the style blocks currently installed.
    pub fn installed(&self) -> &[String] {
        &self.installed
    }
}

impl StyleHost for LogStyleHost {
    fn replace_style(&mut self, id: &str, css: &str) {
        if self.installed.iter().any(|s| s == id) {
            debug!("replacing style block `{id}`");
        } else {
            self.installed.push(id.to_string());
        }
        trace!("style `{id}`: {} bytes", css.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use t20hud::{Dispatched, TriggerContext, action::Behavior, dispatch_action};

    fn character() -> Character {
        Character::from_value(&json!({
            "items": [{"id": "w1", "name": "Espada", "type": "arma"}],
            "system": {
                "atributos": {"for": {"value": 2}},
                "pericias": {"luta": {"value": 5, "label": "Luta"}},
                "iniciativa": {"value": -1}
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_default_capabilities() {
        let actor = ScriptedActor::new(character(), Capabilities::default());
        let trigger = TriggerContext::default();
        for id in ["skill-luta", "attr-for", "roll-initiative", "w1"] {
            dispatch_action(&actor, id, &trigger).await.unwrap();
        }
        assert_eq!(
            actor.journal().drain(),
            [
                "skill roll Luta +5",
                "attribute check for +2",
                "initiative -1 (create combatants: true)",
                "roll Espada",
            ]
        );
        assert!(actor.journal().drain().is_empty());
    }

    #[tokio::test]
    async fn test_disabled_capabilities() {
        let capabilities = Capabilities {
            skill_roll: false,
            skill_roll_fallback: true,
            item_roll: false,
            item_use: false,
            initiative_roll: false,
            ..Capabilities::default()
        };
        let actor = ScriptedActor::new(character(), capabilities);
        let trigger = TriggerContext::default();

        let out = dispatch_action(&actor, "skill-luta", &trigger).await.unwrap();
        assert_eq!(out, Dispatched::Invoked(Behavior::SkillRollFallback("luta".into())));
        let out = dispatch_action(&actor, "w1", &trigger).await.unwrap();
        assert_eq!(out, Dispatched::Invoked(Behavior::ItemSheet("w1".into())));
        let out = dispatch_action(&actor, "roll-initiative", &trigger).await.unwrap();
        assert_eq!(out, Dispatched::NoOp);
        let out = dispatch_action(&actor, "skill-furt", &trigger).await.unwrap();
        assert_eq!(out, Dispatched::NoOp);

        assert_eq!(
            actor.journal().drain(),
            ["skill roll (fallback) Luta +5", "open sheet of Espada"]
        );
    }

    #[test]
    fn test_style_host_replaces() {
        let mut host = LogStyleHost::default();
        host.replace_style("a", "x");
        host.replace_style("a", "y");
        host.replace_style("b", "z");
        assert_eq!(host.installed(), ["a", "b"]);
    }
}
