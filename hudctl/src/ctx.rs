//! Application context and state management.
//!
//! This module provides the [`AppContext`] type which holds the loaded host
//! configuration and the adapter built from it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use t20hud::{
    CategoryMeta, Character, Dispatched, MenuNode, SystemAdapter, Tormenta20Adapter,
    TriggerContext, Value,
    config::{load_document, load_or_default},
    dispatch::Category,
};

use crate::{
    config::HostConfig,
    host::{LogStyleHost, ScriptedActor},
};

/// The main application context holding all state.
pub struct AppContext {
    /// Path the configuration was looked up at.
    pub config_path: PathBuf,
    pub config: HostConfig,
    pub adapter: Tormenta20Adapter,
    pub styles: LogStyleHost,
}

impl AppContext {
    /// Loads the configuration at `config_path` (defaults when missing) and
    /// creates the adapter.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load(config_path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.into();
        let config: HostConfig = load_or_default(&config_path)
            .with_context(|| format!("can not load config {}", config_path.display()))?;
        Ok(Self::with_config(config_path, config))
    }

    pub fn with_config(config_path: PathBuf, config: HostConfig) -> Self {
        let mut styles = LogStyleHost::default();
        let adapter = Tormenta20Adapter::new(config.hud.clone(), &mut styles);
        Self {
            config_path,
            config,
            adapter,
            styles,
        }
    }

    /// Reads a character snapshot document (JSON or TOML).
    pub fn load_character(&self, path: &Path) -> anyhow::Result<Character> {
        let document: Value = load_document(path)
            .with_context(|| format!("can not read snapshot {}", path.display()))?;
        let character = Character::from_value(&document)
            .with_context(|| format!("invalid snapshot {}", path.display()))?;
        info!(
            "loaded `{}` with {} items",
            character.name,
            character.items.len()
        );
        Ok(character)
    }

    /// Menu for `category` built from the snapshot at `path`.
    ///
    /// Snapshots that do not decode produce the error menu rather than an
    /// error, as they would in the HUD.
    pub async fn menu(&self, path: &Path, category: &str) -> anyhow::Result<MenuNode> {
        let document: Value = load_document(path)
            .with_context(|| format!("can not read snapshot {}", path.display()))?;
        let meta = CategoryMeta::new(self.category_label(category));
        Ok(self
            .adapter
            .build_category_from_value(&document, category, &meta)
            .await)
    }

    /// Activates `item_id` on a scripted character and returns the outcome
    /// together with the lines the behavior wrote.
    pub async fn use_item(
        &self,
        path: &Path,
        item_id: &str,
    ) -> anyhow::Result<(Dispatched, Vec<String>)> {
        let character = self.load_character(path)?;
        let actor = ScriptedActor::new(character, self.config.capabilities);
        let trigger = TriggerContext {
            event: Some("cli".to_string()),
        };
        let outcome = self.adapter.use_item(&actor, item_id, &trigger).await?;
        Ok((outcome, actor.journal().drain()))
    }

    /// Layout label of `category` (any accepted alias), or the id itself for
    /// unknown categories.
    pub fn category_label(&self, category: &str) -> String {
        Category::from_id(category)
            .and_then(|id| {
                self.adapter
                    .default_layout()
                    .into_iter()
                    .find(|d| d.id == id)
            })
            .map(|d| d.label.to_string())
            .unwrap_or_else(|| category.to_string())
    }

    /// Prints a one-line summary of the active configuration to stderr, so
    /// stdout carries only the command's output.
    pub fn print_summary(&self) {
        let source = if self.config_path.exists() {
            self.config_path.display().to_string()
        } else {
            "defaults".to_string()
        };
        eprintln!(
            "{}",
            format!(
                "{} adapter, config: {source}, styles: {}",
                self.adapter.system_id(),
                self.styles.installed().join(", ")
            )
            .bold()
            .purple()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use pretty_assertions::assert_eq;
    use t20hud::action::Behavior;

    fn snapshot(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hudctl-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let ctx = AppContext::load("/nonexistent/.hud.toml").unwrap();
        assert_eq!(ctx.config, HostConfig::default());
        assert_eq!(ctx.styles.installed(), ["sah-t20-custom-style"]);
        assert_eq!(ctx.category_label("skills"), "Skills");
        assert_eq!(ctx.category_label("macros"), "macros");
    }

    #[test]
    fn test_config_file_is_loaded() {
        let path = snapshot("hud.toml", "[capabilities]\nskill_roll_fallback = true\n");
        let ctx = AppContext::load(&path).unwrap();
        assert!(ctx.config.capabilities.skill_roll_fallback);
        fs::remove_file(&path).unwrap();

        let path = snapshot("bad.toml", "capabilities = 3");
        assert!(AppContext::load(&path).is_err());
        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_localized_category_ids() {
        let ctx = AppContext::with_config(PathBuf::from(".hud.toml"), HostConfig::default());
        assert_eq!(ctx.category_label("pericia"), "Skills");
        assert_eq!(ctx.category_label("inventario"), "Inventory");

        let path = snapshot("empty.json", "{}");
        let node = ctx.menu(&path, "utilitario").await.unwrap();
        assert_eq!(node.title, "Utility");
        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_menu_from_toml_snapshot() {
        let path = snapshot(
            "hero.toml",
            r#"
name = "Hero"

[[items]]
id = "w1"
name = "Espada"
type = "arma"
system = { equipado = true }
"#,
        );
        let ctx = AppContext::with_config(PathBuf::from(".hud.toml"), HostConfig::default());
        let node = ctx.menu(&path, "attacks").await.unwrap();
        assert_eq!(node.title, "Attacks");
        assert_eq!(node.flat_items()[0].name, "Espada");

        let (outcome, lines) = ctx.use_item(&path, "w1").await.unwrap();
        assert_eq!(outcome, Dispatched::Invoked(Behavior::ItemRoll("w1".into())));
        assert_eq!(lines, ["roll Espada"]);
        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_broken_snapshot() {
        let path = snapshot("broken.json", r#"{"items": [{"name": "no id"}]}"#);
        let ctx = AppContext::with_config(PathBuf::from(".hud.toml"), HostConfig::default());
        let node = ctx.menu(&path, "inventory").await.unwrap();
        assert!(node.is_error());
        assert!(ctx.use_item(&path, "x").await.is_err());
        fs::remove_file(path).unwrap();
    }
}
