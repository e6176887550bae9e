use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::settings::MenuSettings;

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings io error: {}", e),
            SettingsError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

pub fn load_settings(path: &Path) -> Result<MenuSettings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn load_settings_or_default(path: &Path) -> MenuSettings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "load settings failed, using defaults");
            MenuSettings::default()
        }
    }
}

/// Writes default settings to `path` unless the file already exists.
pub fn ensure_settings_file(path: &Path) -> Result<PathBuf, SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&MenuSettings::default())?;
        std::fs::write(path, content)?;
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
