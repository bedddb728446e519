//! Templates read from locale directories and configuration files.

use std::fs;

use pretty_assertions::assert_eq;
use tagcheck_validator::prelude::*;
use tempfile::TempDir;

use crate::init_tracing;

#[derive(Record)]
struct Login {
    #[validate("required,min=3,de=Benutzername")]
    username: String,
}

fn empty_login() -> Login {
    Login {
        username: String::new(),
    }
}

fn locales(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

#[test]
fn test_directory_adds_language() {
    let dir = locales(&[(
        "de.json",
        r#"{
            "required": "{0} ist erforderlich",
            "minLength": "{0} muss mindestens {1} Zeichen lang sein"
        }"#,
    )]);
    let validator = Validator::builder()
        .lang("de")
        .locales_dir(dir.path())
        .build();

    let err = validator.validate(&empty_login()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Benutzername ist erforderlich;\nBenutzername muss mindestens 3 Zeichen lang sein"
    );

    // embedded languages are still reachable behind the directory
    let err = validator.validate_with_lang(&empty_login(), "tr").unwrap_err();
    assert!(err.to_string().starts_with("username alanı zorunludur"));
}

#[test]
fn test_directory_overrides_embedded_language() {
    let dir = locales(&[("en.json", r#"{ "required": "please fill in {0}" }"#)]);
    let validator = Validator::builder().locales_dir(dir.path()).build();

    let err = validator.validate(&empty_login()).unwrap_err();
    assert_eq!(
        err.violations().unwrap().messages(),
        [
            "please fill in username",
            "username must be at least 3 characters long",
        ]
    );
}

#[test]
fn test_malformed_file_falls_back() {
    init_tracing();
    let dir = locales(&[("fr.json", "{ not json")]);
    let validator = Validator::builder().locales_dir(dir.path()).build();

    let err = validator.validate_with_lang(&empty_login(), "fr").unwrap_err();
    assert!(err.to_string().starts_with("username is required"));
}

#[test]
fn test_directory_source_lists_languages() {
    let dir = locales(&[
        ("tr.json", "{}"),
        ("de.json", "{}"),
        ("notes.txt", "ignored"),
    ]);
    let source = DirectorySource::new(dir.path());

    assert_eq!(source.languages(), ["de", "tr"]);
    assert!(source.has_language("de"));
    assert!(!source.has_language("notes"));
}

#[test]
fn test_config_file_with_relative_locales_dir() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("locales")).unwrap();
    fs::write(
        root.path().join("locales").join("de.json"),
        r#"{ "required": "{0} fehlt" }"#,
    )
    .unwrap();
    let config_path = root.path().join("validator.json");
    fs::write(
        &config_path,
        r#"{ "default_lang": "de", "unknown_rules": "strict", "locales_dir": "locales" }"#,
    )
    .unwrap();

    let config = ValidatorConfig::from_file(&config_path).unwrap();
    assert_eq!(config.locales_dir, Some(root.path().join("locales")));
    assert_eq!(config.unknown_rules, UnknownRulePolicy::Strict);

    let validator = Validator::from_config(&config);
    assert_eq!(validator.lang(), "de");
    let err = validator.validate(&empty_login()).unwrap_err();
    assert_eq!(
        err.violations().unwrap().messages(),
        [
            "Benutzername fehlt",
            // no German template for this key
            "Benutzername must be at least 3 characters long",
        ]
    );
}

#[test]
fn test_missing_config_file() {
    let root = tempfile::tempdir().unwrap();
    let result = ValidatorConfig::from_file(root.path().join("absent.json"));
    assert!(result.is_err());
}
