use std::sync::Arc;

use crate::error::EmojiError;
use crate::registry::Registry;
use crate::replacements::ReplacementTable;
use crate::types::{FrontendCatalog, Skin};

/// Counters describing what a sanitize pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeStats {
    pub kept_skins: usize,
    pub replaced_skins: usize,
    pub dropped_skins: usize,
    pub removed_emojis: usize,
}

/// Reduces a front-end emoji catalog to what the backend can accept.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    registry: Arc<Registry>,
    replacements: ReplacementTable,
}

impl Sanitizer {
    /// A sanitizer using the built-in replacement rules.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_replacements(registry, ReplacementTable::builtin())
    }

    pub fn with_replacements(registry: Arc<Registry>, replacements: ReplacementTable) -> Self {
        Self {
            registry,
            replacements,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn replacements(&self) -> &ReplacementTable {
        &self.replacements
    }

    /// Parse a catalog document, sanitize it, and serialize the result.
    ///
    /// Fails with [`EmojiError::Parse`] on malformed input; nothing is
    /// produced in that case.
    pub fn sanitize(&self, raw: &[u8]) -> Result<Vec<u8>, EmojiError> {
        let catalog: FrontendCatalog = serde_json::from_slice(raw)?;
        let (catalog, stats) = self.sanitize_catalog(catalog);
        tracing::info!(
            "Sanitized emoji catalog: {} skins kept, {} replaced, {} dropped, {} emojis removed",
            stats.kept_skins,
            stats.replaced_skins,
            stats.dropped_skins,
            stats.removed_emojis
        );
        Ok(serde_json::to_vec(&catalog)?)
    }

    /// Filter and rewrite the skins of every emoji in the catalog.
    ///
    /// Emojis left without skins are removed. Categories, aliases and sheet
    /// data pass through unchanged.
    pub fn sanitize_catalog(&self, mut catalog: FrontendCatalog) -> (FrontendCatalog, SanitizeStats) {
        let mut stats = SanitizeStats::default();

        catalog.emojis.retain(|id, emoji| {
            let skins = std::mem::take(&mut emoji.skins);
            emoji.skins = skins
                .into_iter()
                .filter_map(|skin| self.sanitize_skin(id, skin, &mut stats))
                .collect();

            if emoji.skins.is_empty() {
                tracing::debug!("Removing emoji {id:?}: no supported skins");
                stats.removed_emojis += 1;
                false
            } else {
                true
            }
        });

        (catalog, stats)
    }

    /// Returns the skin to keep, rewritten if a replacement applies, or
    /// `None` when the backend does not support it.
    ///
    /// Membership is checked by comparing `unified` directly against the
    /// registry's literal-character keys. The front end is expected to place
    /// the literal emoji in `unified` for this check to match; codepoint
    /// strings such as `"1f600"` never do.
    fn sanitize_skin(&self, id: &str, mut skin: Skin, stats: &mut SanitizeStats) -> Option<Skin> {
        if let Some(replacement) = self.replacements.get(&skin.unified) {
            tracing::debug!(
                "Replacing skin {:?} of {id:?} with {replacement:?}",
                skin.unified
            );
            skin.unified = replacement.to_string();
            stats.replaced_skins += 1;
            return Some(skin);
        }

        if !self.registry.is_supported(&skin.unified) {
            tracing::debug!("Dropping unsupported skin {:?} of {id:?}", skin.unified);
            stats.dropped_skins += 1;
            return None;
        }

        stats.kept_skins += 1;
        Some(skin)
    }
}
