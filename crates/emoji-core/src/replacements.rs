use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::EmojiError;

/// Front-end literals the backend spells differently, paired with the
/// backend's spelling.
///
/// The picker renders the red heart with a trailing VS16 (U+FE0F); the
/// backend lists it bare.
const BUILTIN_RULES: &[(&str, &str)] = &[("\u{2764}\u{FE0F}", "\u{2764}")];

static BUILTIN: Lazy<ReplacementTable> = Lazy::new(|| ReplacementTable {
    rules: BUILTIN_RULES
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect(),
});

/// Static mapping from a front-end emoji to the backend's canonical emoji.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    rules: HashMap<String, String>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules every sanitizer applies unless told otherwise.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a table from explicit rules. Neither side may be empty.
    pub fn from_rules<I, K, V>(rules: I) -> Result<Self, EmojiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        table.extend(rules)?;
        Ok(table)
    }

    /// Add rules, overriding any existing rule for the same front-end emoji.
    pub fn extend<I, K, V>(&mut self, rules: I) -> Result<(), EmojiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (from, to) in rules {
            let (from, to) = (from.into(), to.into());
            if from.is_empty() || to.is_empty() {
                return Err(EmojiError::Config(format!(
                    "replacement rule {from:?} -> {to:?} has an empty side"
                )));
            }
            self.rules.insert(from, to);
        }
        Ok(())
    }

    pub fn get(&self, front_end: &str) -> Option<&str> {
        self.rules.get(front_end).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
