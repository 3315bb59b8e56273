//! Resolving selected menu entries back into character behaviors.
//!
//! The host reports the id of the leaf the user activated. [`dispatch_action`]
//! maps that id to at most one behavior on the character, probing the
//! [`Actor`] capability interface at call time. A missing capability is a
//! no-op, never an error.

use futures::future::BoxFuture;

use crate::builders::{
    skills::SKILL_ID_PREFIX,
    utility::{ATTRIBUTE_ID_PREFIX, INITIATIVE_ID},
};

/// Completion of a behavior started on the host.
pub type Completion = BoxFuture<'static, anyhow::Result<()>>;

/// Options passed to the initiative roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitiativeOptions {
    /// Add the character to the active combat if it is not in it yet.
    pub create_combatants: bool,
}

/// Behaviors a character may expose.
///
/// Every member is optional: the default implementation returns `None`,
/// meaning the capability does not exist. Implementations must only start
/// the behavior when they return `Some`.
pub trait Actor {
    /// Primary skill roll.
    fn roll_skill(&self, _key: &str) -> Option<Completion> {
        None
    }

    /// Secondary skill roll, tried when the primary one is missing.
    fn roll_skill_fallback(&self, _key: &str) -> Option<Completion> {
        None
    }

    fn roll_attribute(&self, _key: &str) -> Option<Completion> {
        None
    }

    fn roll_initiative(&self, _options: InitiativeOptions) -> Option<Completion> {
        None
    }

    /// Owned item by id.
    fn item(&self, _id: &str) -> Option<&dyn ItemHandle> {
        None
    }
}

/// Behaviors an owned item may expose. Every member is optional.
pub trait ItemHandle {
    fn roll(&self) -> Option<Completion> {
        None
    }

    fn use_item(&self) -> Option<Completion> {
        None
    }

    /// Open the item's detail view.
    fn open_sheet(&self) -> Option<Completion> {
        None
    }
}

/// Where the activation came from. Forwarded for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerContext {
    /// Free-form description of the input event (e.g. `"click"`).
    pub event: Option<String>,
}

/// The behavior a leaf id resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    SkillRoll(String),
    SkillRollFallback(String),
    AttributeRoll(String),
    Initiative(InitiativeOptions),
    ItemRoll(String),
    ItemUse(String),
    ItemSheet(String),
}

/// Outcome of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// The behavior was started and completed.
    Invoked(Behavior),
    /// Nothing matched, or the required capability is missing.
    NoOp,
}

/// A parsed leaf id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Skill(&'a str),
    Attribute(&'a str),
    Initiative,
    Item(&'a str),
}

impl<'a> Selection<'a> {
    pub fn parse(id: &'a str) -> Self {
        if let Some(key) = id.strip_prefix(SKILL_ID_PREFIX) {
            Selection::Skill(key)
        } else if let Some(key) = id.strip_prefix(ATTRIBUTE_ID_PREFIX) {
            Selection::Attribute(key)
        } else if id == INITIATIVE_ID {
            Selection::Initiative
        } else {
            Selection::Item(id)
        }
    }
}

/// Pick the behavior for `item_id` and start it, without awaiting.
///
/// Returns `None` when nothing applies.
pub fn resolve(actor: &dyn Actor, item_id: &str) -> Option<(Behavior, Completion)> {
    match Selection::parse(item_id) {
        Selection::Skill(key) => actor
            .roll_skill(key)
            .map(|c| (Behavior::SkillRoll(key.to_string()), c))
            .or_else(|| {
                actor
                    .roll_skill_fallback(key)
                    .map(|c| (Behavior::SkillRollFallback(key.to_string()), c))
            }),
        Selection::Attribute(key) => actor
            .roll_attribute(key)
            .map(|c| (Behavior::AttributeRoll(key.to_string()), c)),
        Selection::Initiative => {
            let options = InitiativeOptions {
                create_combatants: true,
            };
            actor
                .roll_initiative(options)
                .map(|c| (Behavior::Initiative(options), c))
        }
        Selection::Item(id) => {
            let item = actor.item(id)?;
            let id = id.to_string();
            if let Some(c) = item.roll() {
                Some((Behavior::ItemRoll(id), c))
            } else if let Some(c) = item.use_item() {
                Some((Behavior::ItemUse(id), c))
            } else {
                item.open_sheet().map(|c| (Behavior::ItemSheet(id), c))
            }
        }
    }
}

/// Run the behavior behind a selected leaf and forward its completion.
///
/// At most one behavior is triggered. Unknown ids and missing capabilities
/// resolve to [`Dispatched::NoOp`]; the only error returned is the one the
/// behavior itself completes with.
pub async fn dispatch_action(
    actor: &dyn Actor,
    item_id: &str,
    trigger: &TriggerContext,
) -> anyhow::Result<Dispatched> {
    let Some((behavior, completion)) = resolve(actor, item_id) else {
        debug!("T20 HUD: nothing to do for `{item_id}` ({trigger:?})");
        return Ok(Dispatched::NoOp);
    };
    debug!("T20 HUD: `{item_id}` -> {behavior:?} ({trigger:?})");
    completion.await?;
    Ok(Dispatched::Invoked(behavior))
}
