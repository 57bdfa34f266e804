// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Weft configuration system.

use std::path::PathBuf;

use figment::Jail;
use weft_config::diagnostic::ConfigError;
use weft_config::{load_and_validate_str, load_config, load_config_from_path, load_config_from_str};

/// Every documented key deserializes.
#[test]
fn valid_toml_deserializes_into_weft_config() {
    let toml = r#"
[loader]
default_project_id = "p1"
force_original = true

[registry]
include_builtin_catalog = false
manifests = ["descriptors/card.toml", "descriptors/nav.toml"]

[logging]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.loader.default_project_id.as_deref(), Some("p1"));
    assert!(config.loader.force_original);
    assert!(!config.registry.include_builtin_catalog);
    assert_eq!(
        config.registry.manifests,
        vec![
            PathBuf::from("descriptors/card.toml"),
            PathBuf::from("descriptors/nav.toml")
        ]
    );
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("[logging]\nlevel = \"warn\"\n").unwrap();
    assert!(config.registry.include_builtin_catalog);
    assert!(config.loader.default_project_id.is_none());
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn unknown_key_suggests_correction() {
    let toml = r#"
[loader]
force_orignal = true
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "force_orignal");
            assert_eq!(suggestion.as_deref(), Some("force_original"));
            assert!(valid_keys.contains("default_project_id"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let errors = load_and_validate_str("[logger]\nlevel = \"info\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::UnknownKey { key, suggestion, .. }
        if key == "logger" && suggestion.as_deref() == Some("logging")));
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[registry]\ninclude_builtin_catalog = \"yes\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::InvalidType { .. }));
    assert!(errors[0].to_string().contains("include_builtin_catalog"));
}

#[test]
fn validation_errors_surface_through_load() {
    let errors = load_and_validate_str("[logging]\nlevel = \"chatty\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::Validation { message } if message.contains("chatty")));
}

#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "levle".to_string(),
        suggestion: Some("level".to_string()),
        valid_keys: "level".to_string(),
        span: None,
        src: None,
    };
    assert_eq!(
        error.code().map(|c| c.to_string()).as_deref(),
        Some("weft::config::unknown_key")
    );

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("levle"));
    assert!(buf.contains("did you mean `level`"));
}

#[test]
fn local_file_and_env_layer_in_order() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "weft.toml",
            r#"
[loader]
default_project_id = "from-file"

[logging]
level = "debug"
"#,
        )?;
        jail.set_env("WEFT_LOGGING_LEVEL", "trace");
        jail.set_env("WEFT_LOADER_FORCE_ORIGINAL", "true");

        let config = load_config()?;
        assert_eq!(config.loader.default_project_id.as_deref(), Some("from-file"));
        assert!(config.loader.force_original);
        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn env_key_with_underscores_maps_to_one_section() {
    Jail::expect_with(|jail| {
        jail.set_env("WEFT_LOADER_DEFAULT_PROJECT_ID", "p-env");
        jail.set_env("WEFT_REGISTRY_INCLUDE_BUILTIN_CATALOG", "false");

        let config = load_config()?;
        assert_eq!(config.loader.default_project_id.as_deref(), Some("p-env"));
        assert!(!config.registry.include_builtin_catalog);
        Ok(())
    });
}

#[test]
fn lowercase_and_mixed_case_env_keys_map_alike() {
    Jail::expect_with(|jail| {
        jail.set_env("WEFT_Logging_Level", "warn");

        let config = load_config()?;
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn explicit_path_must_exist() {
    Jail::expect_with(|jail| {
        let missing = jail.directory().join("absent.toml");
        let err = load_config_from_path(&missing).expect_err("missing file should fail");
        assert!(err.to_string().contains("config file not found"));

        let errors = weft_config::load_and_validate_path(&missing).expect_err("should fail");
        assert!(matches!(&errors[0], ConfigError::Other(msg) if msg.contains("absent.toml")));
        Ok(())
    });
}

#[test]
fn explicit_path_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[registry]\nmanifests = [\"a.toml\"]\n")?;
        let config = load_config_from_path(&jail.directory().join("custom.toml"))?;
        assert_eq!(config.registry.manifests, vec![PathBuf::from("a.toml")]);
        Ok(())
    });
}
