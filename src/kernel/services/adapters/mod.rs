//! IO-backed implementations of the ports.

pub mod settings;

pub use settings::{ensure_settings_file, load_settings, load_settings_or_default, SettingsError};
