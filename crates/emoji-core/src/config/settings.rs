use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::paths;
use crate::error::EmojiError;
use crate::registry::Registry;
use crate::replacements::ReplacementTable;
use crate::sanitize::Sanitizer;

/// Deployment settings, read from `emoji-settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiSettings {
    /// Supported-emoji reference file. Relative paths resolve against the
    /// base directory; defaults to `emoji.json` there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_file: Option<PathBuf>,

    /// Extra front-end -> backend replacements, applied over the built-in ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<HashMap<String, String>>,
}

impl EmojiSettings {
    /// Load settings from `path`. A missing file yields default settings.
    pub fn load(path: &Path) -> Result<Self, EmojiError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: EmojiSettings = serde_json::from_str(&content).map_err(|e| {
            EmojiError::Config(format!("malformed settings file {}: {e}", path.display()))
        })?;
        Ok(settings)
    }

    /// Load `emoji-settings.json` from the base directory.
    pub fn load_from_dir(base_dir: &Path) -> Result<Self, EmojiError> {
        Self::load(&paths::settings_file(base_dir))
    }

    pub fn reference_path(&self, base_dir: &Path) -> PathBuf {
        match &self.reference_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base_dir.join(path),
            None => paths::reference_file(base_dir),
        }
    }

    /// Load the registry named by these settings. Any error here should abort
    /// startup.
    pub fn build_registry(&self, base_dir: &Path) -> Result<Registry, EmojiError> {
        let path = self.reference_path(base_dir);
        tracing::debug!("Loading supported emoji from {}", path.display());
        Registry::load(&path)
    }

    /// Built-in replacements merged with the configured ones.
    pub fn replacement_table(&self) -> Result<ReplacementTable, EmojiError> {
        let mut table = ReplacementTable::builtin();
        if let Some(extra) = &self.replacements {
            table.extend(extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        }
        Ok(table)
    }

    pub fn build_sanitizer(&self, registry: Arc<Registry>) -> Result<Sanitizer, EmojiError> {
        Ok(Sanitizer::with_replacements(
            registry,
            self.replacement_table()?,
        ))
    }
}
