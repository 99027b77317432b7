//! Platform-specific paths for user presets.
//!
//! User presets live under the platform config directory:
//! `~/.config/stanza/presets/` on Linux,
//! `~/Library/Application Support/stanza/presets/` on macOS,
//! `%APPDATA%\stanza\presets\` on Windows. Factory presets are embedded
//! in the library and need no directory at all.

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "stanza";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user-specific presets directory.
///
/// Falls back to the current directory if the platform config directory
/// cannot be determined.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Find a preset file by name or path.
///
/// Accepts an absolute or relative path to a TOML file, or a bare preset
/// name (with or without the `.toml` extension) which is looked up in the
/// user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let user_path = user_presets_dir().join(filename);
    user_path.is_file().then_some(user_path)
}

/// Ensure the user presets directory exists, creating it if needed.
pub fn ensure_user_presets_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// List all preset TOML files in the user presets directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect()
}

/// The preset name for a file path (the file stem).
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
