//! Tests for configuration module.

use std::io::Write;
use std::path::PathBuf;

use super::*;

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test_log::test]
fn test_defaults_without_file() {
    let file = write_toml("");
    let settings = Settings::load(Some(file.path())).unwrap();

    assert!(settings.export.base64);
    assert_eq!(settings.export.on_malformed, MalformedPolicy::Abort);
    assert_eq!(settings.input.format, InputFormat::Json);
    assert_eq!(settings.logging.level, "info");
}

#[test_log::test]
fn test_file_overrides_defaults() {
    let file = write_toml(
        r#"
[export]
base64 = false
on_malformed = "skip"

[input]
format = "vcard"

[logging]
level = "debug"
"#,
    );
    let settings = Settings::load(Some(file.path())).unwrap();

    assert!(!settings.export.base64);
    assert_eq!(settings.export.on_malformed, MalformedPolicy::Skip);
    assert_eq!(settings.input.format, InputFormat::Vcard);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_unknown_policy_rejected() {
    let file = write_toml("[export]\non_malformed = \"ignore\"\n");
    assert!(Settings::load(Some(file.path())).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let path = PathBuf::from("/nonexistent/rolodex-config.toml");
    assert!(Settings::load(Some(&path)).is_err());
}

#[test]
fn test_input_format_from_path() {
    assert_eq!(
        InputFormat::from_path(Path::new("contacts.json")),
        Some(InputFormat::Json)
    );
    assert_eq!(
        InputFormat::from_path(Path::new("Contacts.VCF")),
        Some(InputFormat::Vcard)
    );
    assert_eq!(
        InputFormat::from_path(Path::new("book.vcard")),
        Some(InputFormat::Vcard)
    );
    assert_eq!(InputFormat::from_path(Path::new("book.txt")), None);
    assert_eq!(InputFormat::from_path(Path::new("book")), None);
}

#[test]
fn test_default_settings_match_loaded_defaults() {
    let defaults = Settings::default();
    assert!(defaults.export.base64);
    assert_eq!(defaults.export.on_malformed, MalformedPolicy::Abort);
    assert_eq!(defaults.input.format.to_string(), "json");
}
