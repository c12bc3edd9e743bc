use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmojiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The front-end catalog is not valid JSON of the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The supported-emoji reference file is missing or corrupt. Not
    /// recoverable at runtime.
    #[error("Reference file error: {0}")]
    Reference(String),

    #[error("Config error: {0}")]
    Config(String),

    /// The reaction is not exactly one supported emoji.
    #[error("invalid reaction: not a single supported emoji")]
    InvalidReaction,
}

impl EmojiError {
    pub fn is_invalid_reaction(&self) -> bool {
        matches!(self, EmojiError::InvalidReaction)
    }
}
