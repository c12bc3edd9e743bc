use std::sync::Arc;

use crate::error::EmojiError;
use crate::registry::Registry;

/// Checks that a reaction is exactly one supported emoji.
///
/// The string is looked up verbatim: surrounding whitespace, multiple emoji,
/// or an alternate codepoint spelling of a supported emoji are all rejected.
pub fn validate_reaction(registry: &Registry, reaction: &str) -> Result<(), EmojiError> {
    if registry.is_supported(reaction) {
        Ok(())
    } else {
        Err(EmojiError::InvalidReaction)
    }
}

/// A handle that validates reactions against a shared registry.
#[derive(Debug, Clone)]
pub struct ReactionValidator {
    registry: Arc<Registry>,
}

impl ReactionValidator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn validate(&self, reaction: &str) -> Result<(), EmojiError> {
        validate_reaction(&self.registry, reaction)
    }
}
