use std::collections::HashMap;
use std::path::Path;

use crate::error::EmojiError;
use crate::types::{ReferenceFile, SupportedEmoji};

/// The backend's canonical emoji set.
///
/// Built once at startup and never mutated afterwards. Share it behind an
/// `Arc` with every sanitizer and validator that needs it.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Entries in reference-file order.
    emojis: Vec<SupportedEmoji>,
    /// Literal character -> index into `emojis`.
    by_character: HashMap<String, usize>,
    date: String,
    date_accessed: String,
    version: String,
}

impl Registry {
    /// Build a registry from an already parsed reference document.
    ///
    /// Duplicate keys keep their first occurrence. An empty map is an error,
    /// since a backend that supports nothing is a deployment mistake.
    pub fn from_reference(reference: ReferenceFile) -> Result<Self, EmojiError> {
        if reference.map.is_empty() {
            return Err(EmojiError::Reference(
                "reference file contains no emoji".to_string(),
            ));
        }

        let mut emojis = Vec::with_capacity(reference.map.len());
        let mut by_character = HashMap::with_capacity(reference.map.len());

        for (key, emoji) in reference.map.0 {
            if key.is_empty() {
                return Err(EmojiError::Reference(format!(
                    "empty emoji key for entry {:?}",
                    emoji.name
                )));
            }
            if key != emoji.character {
                tracing::warn!(
                    "Reference key {key:?} does not match its character {:?}; indexing by key",
                    emoji.character
                );
            }
            if by_character.contains_key(&key) {
                tracing::warn!("Duplicate reference emoji {key:?}; keeping the first entry");
                continue;
            }
            by_character.insert(key, emojis.len());
            emojis.push(emoji);
        }

        tracing::debug!(
            "Loaded {} supported emoji (version {:?}, dated {:?})",
            emojis.len(),
            reference.version,
            reference.date
        );

        Ok(Self {
            emojis,
            by_character,
            date: reference.date,
            date_accessed: reference.date_accessed,
            version: reference.version,
        })
    }

    /// Parse the raw reference document and build the registry.
    pub fn from_json(bytes: &[u8]) -> Result<Self, EmojiError> {
        let reference: ReferenceFile = serde_json::from_slice(bytes)
            .map_err(|e| EmojiError::Reference(format!("malformed reference file: {e}")))?;
        Self::from_reference(reference)
    }

    /// Read and parse the reference file at `path`.
    pub fn load(path: &Path) -> Result<Self, EmojiError> {
        let bytes = std::fs::read(path).map_err(|e| {
            EmojiError::Reference(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&bytes)
    }

    /// A copy of every supported emoji, in reference-file order.
    pub fn list_supported(&self) -> Vec<SupportedEmoji> {
        self.emojis.clone()
    }

    /// A copy of the supported set keyed by literal character.
    pub fn supported_map(&self) -> HashMap<String, SupportedEmoji> {
        self.by_character
            .iter()
            .map(|(key, &idx)| (key.clone(), self.emojis[idx].clone()))
            .collect()
    }

    /// Exact-match membership test. No normalization is applied.
    pub fn is_supported(&self, character: &str) -> bool {
        self.by_character.contains_key(character)
    }

    pub fn get(&self, character: &str) -> Option<&SupportedEmoji> {
        self.by_character
            .get(character)
            .map(|&idx| &self.emojis[idx])
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// The reference file's `date` field.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// When the reference data was fetched from its upstream source.
    pub fn date_accessed(&self) -> &str {
        &self.date_accessed
    }

    /// The Unicode emoji version the reference file describes.
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::types::OrderedEmojiMap;

    pub fn emoji(character: &str, name: &str, code_point: &str) -> SupportedEmoji {
        SupportedEmoji {
            character: character.to_string(),
            name: name.to_string(),
            comment: String::new(),
            code_point: code_point.to_string(),
            group: "Smileys & Emotion".to_string(),
            subgroup: "test".to_string(),
        }
    }

    /// A registry holding exactly the given characters.
    pub fn registry_with(characters: &[&str]) -> Registry {
        let emojis = characters
            .iter()
            .map(|c| emoji(c, &format!("emoji {c}"), "0"))
            .collect::<Vec<_>>();
        Registry::from_reference(ReferenceFile {
            version: "15.0".to_string(),
            map: OrderedEmojiMap::from(emojis),
            ..Default::default()
        })
        .unwrap()
    }
}
