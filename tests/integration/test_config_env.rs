//! Integration Tests for the Configuration Environment Override
//!
//! Kept in its own test binary: the tests mutate process environment.

use ansi_markup::config::loader::CONFIG_ENV_VAR;
use ansi_markup::{load_config, ConfigLoader, Error};
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_env_named_config_file() {
    let temp_dir = TempDir::new().unwrap();

    // Any extension is read as named, TOML unless it ends in .json
    let named = temp_dir.path().join("my.conf");
    fs::write(
        &named,
        "[render]\nmax_input_bytes = 64\n\n[theme]\nname = \"default-dark\"\n",
    )
    .unwrap();
    env::set_var(CONFIG_ENV_VAR, &named);

    let loader = ConfigLoader::new();
    assert_eq!(loader.explicit_path(), Some(named.as_path()));

    let config = load_config(None).unwrap();
    assert_eq!(config.render.max_input_bytes, 64);
    assert_eq!(config.theme.name, "default-dark");

    let json = temp_dir.path().join("settings.json");
    fs::write(&json, r#"{ "render": { "per_line": true } }"#).unwrap();
    env::set_var(CONFIG_ENV_VAR, &json);
    assert!(load_config(None).unwrap().render.per_line);

    // A named file that is broken or invalid is an error, not a fallback
    let invalid = temp_dir.path().join("invalid.conf");
    fs::write(&invalid, "[render]\nmax_input_bytes = 0\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &invalid);
    assert!(matches!(
        load_config(None),
        Err(Error::ConfigValidationFailed { .. })
    ));

    let broken = temp_dir.path().join("broken.conf");
    fs::write(&broken, "render = [").unwrap();
    env::set_var(CONFIG_ENV_VAR, &broken);
    assert!(matches!(
        load_config(None),
        Err(Error::ConfigParseFailed { .. })
    ));

    env::set_var(CONFIG_ENV_VAR, temp_dir.path().join("missing.conf"));
    assert!(matches!(
        load_config(None),
        Err(Error::ConfigLoadFailed { .. })
    ));

    env::remove_var(CONFIG_ENV_VAR);
    assert!(ConfigLoader::new().explicit_path().is_none());
}
