use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

pub const CONFIG_DIR_NAME: &str = ".emoji";

pub const REFERENCE_FILE_NAME: &str = "emoji.json";
pub const SETTINGS_FILE_NAME: &str = "emoji-settings.json";

/// Default base directory: ~/.emoji/
pub static DEFAULT_BASE_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
});

/// Resolve a config directory, using the provided override or the default.
pub fn resolve_base_dir(override_dir: Option<&Path>) -> PathBuf {
    override_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| DEFAULT_BASE_DIR.clone())
}

/// Get the supported-emoji reference file path.
pub fn reference_file(base: &Path) -> PathBuf {
    base.join(REFERENCE_FILE_NAME)
}

/// Get the settings file path.
pub fn settings_file(base: &Path) -> PathBuf {
    base.join(SETTINGS_FILE_NAME)
}
