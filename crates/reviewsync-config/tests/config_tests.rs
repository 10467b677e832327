// SPDX-FileCopyrightText: 2026 ReviewSync Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the ReviewSync configuration system.

use reviewsync_config::diagnostic::ConfigError;
use reviewsync_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_reviewsync_config() {
    let toml = r#"
[app]
log_level = "debug"

[storage]
database_path = "/tmp/reviewsync-test.db"

[embed]
script_url = "https://cdn.example.net/widget.js"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.storage.database_path, "/tmp/reviewsync-test.db");
    assert_eq!(config.embed.script_url, "https://cdn.example.net/widget.js");
}

/// Missing sections use defaults without error.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.app.log_level, "info");
    assert!(!config.storage.database_path.is_empty());
    assert_eq!(config.embed.script_url, "https://cdn.reviewsync.com/widget.js");
}

/// Unknown field in a section produces an UnknownField error.
#[test]
fn unknown_field_in_storage_produces_error() {
    let toml = r#"
[storage]
databse_path = "/tmp/x.db"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("databse_path"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// The high-level entry point turns a typo into a suggestion diagnostic.
#[test]
fn load_and_validate_str_suggests_corrections_for_typos() {
    let toml = r#"
[embed]
scrip_url = "https://cdn.example.net/widget.js"
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should produce diagnostics");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "scrip_url" && suggestion.as_deref() == Some("script_url")
    )));
}

/// Semantic validation runs after a clean parse.
#[test]
fn load_and_validate_str_rejects_bad_log_level() {
    let toml = r#"
[app]
log_level = "shouty"
"#;

    let errors = load_and_validate_str(toml).expect_err("bad level should fail validation");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("log_level")
    )));
}

/// Environment variables override file values, with underscore-containing
/// keys mapped to the right section.
#[test]
fn env_vars_override_toml_values() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "reviewsync.toml",
            r#"
[storage]
database_path = "from-file.db"
"#,
        )?;
        jail.set_env("REVIEWSYNC_STORAGE_DATABASE_PATH", "from-env.db");
        jail.set_env("REVIEWSYNC_APP_LOG_LEVEL", "warn");

        let config = reviewsync_config::load_config().expect("config should load");
        assert_eq!(config.storage.database_path, "from-env.db");
        assert_eq!(config.app.log_level, "warn");
        Ok(())
    });
}

/// Wrong value types surface as InvalidType diagnostics.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[app]
log_level = 42
"#;

    let errors = load_and_validate_str(toml).expect_err("wrong type should fail");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { .. })));
}
