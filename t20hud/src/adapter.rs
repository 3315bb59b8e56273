//! The Tormenta20 system adapter handed to the HUD host.

use std::future::Future;

use serde_json::Value;

use crate::{
    action::{self, Actor, Dispatched, TriggerContext},
    config::HudConfig,
    data::{Character, MenuNode},
    descriptors::{self, AttributeDescriptor, CategoryDescriptor},
    dispatch::{self, CategoryMeta},
};

/// Id of the style block registered by the adapter.
pub const STYLE_ID: &str = "sah-t20-custom-style";

/// Style rules backing the `t20-hide-tabs` theme modifier and the tooltip size.
pub const CUSTOM_CSS: &str = r#"
.ib-sub-menu.t20-hide-tabs #ib-tabs-container { display: none !important; }
.ib-sub-menu.t20-hide-tabs .ib-scroll-area { margin-top: 5px; }
div#ib-rich-tooltip {
    max-width: 500px !important;
    width: 100% !important;
    max-height: 100% !important;
}
div#ib-rich-tooltip .editor-content {
    font-size: 1.2rem !important;
}
"#;

/// Host-side style registry.
pub trait StyleHost {
    /// Install `css` under `id`, replacing any block already registered with
    /// that id.
    fn replace_style(&mut self, id: &str, css: &str);
}

/// Interface every game-system adapter offers the HUD host.
pub trait SystemAdapter {
    /// Game system handled by the adapter.
    fn system_id(&self) -> &'static str;

    fn default_attributes(&self) -> Vec<AttributeDescriptor>;

    fn default_layout(&self) -> Vec<CategoryDescriptor>;

    /// Menu for one category. Never fails: failures become the error menu.
    fn build_category(
        &self,
        character: &Character,
        category_id: &str,
        meta: &CategoryMeta,
    ) -> impl Future<Output = MenuNode>;

    /// Run the behavior behind a selected leaf.
    fn use_item(
        &self,
        actor: &dyn Actor,
        item_id: &str,
        trigger: &TriggerContext,
    ) -> impl Future<Output = anyhow::Result<Dispatched>>;
}

/// Adapter for the Tormenta20 system.
#[derive(Debug, Clone)]
pub struct Tormenta20Adapter {
    config: HudConfig,
}

impl Tormenta20Adapter {
    pub const SYSTEM_ID: &'static str = "tormenta20";

    /// Create the adapter and register its style block with the host.
    pub fn new(config: HudConfig, styles: &mut dyn StyleHost) -> Self {
        styles.replace_style(STYLE_ID, CUSTOM_CSS);
        info!("T20 HUD: adapter ready for `{}`", Self::SYSTEM_ID);
        Self { config }
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Like [`SystemAdapter::build_category`], from an undecoded host document.
    pub async fn build_category_from_value(
        &self,
        document: &Value,
        category_id: &str,
        meta: &CategoryMeta,
    ) -> MenuNode {
        dispatch::build_category_from_value(document, category_id, meta, &self.config).await
    }
}

impl SystemAdapter for Tormenta20Adapter {
    fn system_id(&self) -> &'static str {
        Self::SYSTEM_ID
    }

    fn default_attributes(&self) -> Vec<AttributeDescriptor> {
        descriptors::default_attributes()
    }

    fn default_layout(&self) -> Vec<CategoryDescriptor> {
        descriptors::default_layout()
    }

    async fn build_category(
        &self,
        character: &Character,
        category_id: &str,
        meta: &CategoryMeta,
    ) -> MenuNode {
        dispatch::build_category(character, category_id, meta, &self.config).await
    }

    async fn use_item(
        &self,
        actor: &dyn Actor,
        item_id: &str,
        trigger: &TriggerContext,
    ) -> anyhow::Result<Dispatched> {
        action::dispatch_action(actor, item_id, trigger).await
    }
}
