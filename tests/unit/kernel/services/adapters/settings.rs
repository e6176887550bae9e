use super::*;
use tempfile::tempdir;

#[test]
fn ensure_writes_defaults_once() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("menu.json");

    let written = ensure_settings_file(&path).expect("ensure settings");
    assert_eq!(written, path);
    let settings = load_settings(&path).expect("load settings");
    assert!(settings.enabled);
    assert!(settings.items.is_empty());

    std::fs::write(&path, r#"{ "enabled": false }"#).expect("write settings");
    ensure_settings_file(&path).expect("ensure settings");
    assert!(!load_settings(&path).expect("load settings").enabled);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_settings(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
    assert!(err.to_string().starts_with("settings io error"));
}

#[test]
fn malformed_file_is_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("menu.json");
    std::fs::write(&path, "{ items: ").expect("write settings");

    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn load_or_default_falls_back() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("menu.json");
    std::fs::write(&path, "not json").expect("write settings");

    let settings = load_settings_or_default(&path);
    assert!(settings.enabled);
    assert!(settings.items.is_empty());
}
