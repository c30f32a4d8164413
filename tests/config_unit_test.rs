//! Unit tests for configuration parsing.
//!
//! Run with: cargo test --test config_unit_test

use std::collections::HashMap;

use ambient_seed::config::{Config, ConfigError, LogFormat};

fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn missing_database_url_is_rejected() {
    let err = load(&[("RUN_MIGRATIONS", "false")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    assert_eq!(
        err.to_string(),
        "Missing required environment variable: DATABASE_URL"
    );
}

#[test]
fn optional_values_default_when_unset() {
    let config = load(&[("DATABASE_URL", "postgres://localhost/ambient")]).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/ambient");
    assert!(config.run_migrations);
    assert_eq!(config.rng_seed, None);
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn unparseable_values_fall_back_to_defaults() {
    let config = load(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("RUN_MIGRATIONS", "maybe"),
        ("SEED_RNG_SEED", "not-a-number"),
        ("LOG_FORMAT", "yaml"),
    ])
    .unwrap();
    assert!(config.run_migrations);
    assert_eq!(config.rng_seed, None);
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn explicit_values_are_honoured() {
    let config = load(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("RUN_MIGRATIONS", "false"),
        ("SEED_RNG_SEED", "1234"),
        ("LOG_FORMAT", "json"),
    ])
    .unwrap();
    assert!(!config.run_migrations);
    assert_eq!(config.rng_seed, Some(1234));
    assert_eq!(config.log_format, LogFormat::Json);
}
