use std::fs;

use printf_check::{Config, ConfigError};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.stacked_flags);
    assert!(config.check_types);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml_str("stacked_flags = false").unwrap();
    assert!(!config.stacked_flags);
    assert!(config.check_types);

    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_unknown_key_is_rejected() {
    let result = Config::from_toml_str("positional_arguments = true");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let result = Config::from_toml_str("check_types = \"yes\"");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_from_file() {
    let path = std::env::temp_dir().join(format!("printf-check-{}.toml", std::process::id()));
    fs::write(&path, "stacked_flags = false\ncheck_types = false\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(
        config,
        Config::default()
            .with_stacked_flags(false)
            .with_check_types(false)
    );
}

#[test]
fn test_missing_file() {
    let error = Config::from_file("/nonexistent/printf-check.toml").unwrap_err();
    assert!(matches!(error, ConfigError::Io { .. }));
    assert!(
        error
            .to_string()
            .starts_with("failed to read config file /nonexistent/printf-check.toml")
    );
}
