pub mod config;
pub mod error;
pub mod registry;
pub mod replacements;
pub mod sanitize;
pub mod types;
pub mod validation;

// Error
pub use error::EmojiError;

// Data model
pub use types::{
    FrontendCatalog, FrontendEmoji, OrderedEmojiMap, ReferenceFile, Skin, SupportedEmoji,
};

// Registry
pub use registry::Registry;

// Sanitizer
pub use replacements::ReplacementTable;
pub use sanitize::{SanitizeStats, Sanitizer};

// Validator
pub use validation::{ReactionValidator, validate_reaction};

// Config
pub use config::paths;
pub use config::settings::EmojiSettings;
