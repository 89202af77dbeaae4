use pretty_assertions::assert_eq;
use scrimfinder::config::Config;
use serial_test::serial;
use std::env;

mod common;

const KEYS: [&str; 10] = [
    "DATABASE_URL",
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "ALLOWED_ORIGIN",
    "MEDIA_DIR",
    "MEDIA_BASE_URL",
    "BCRYPT_COST",
    "DIRECTORY_CACHE_TTL_SECS",
    "MAX_BODY_BYTES",
];

// Clears the keys for the duration of `f`, then puts the previous values back
fn with_clean_env(f: impl FnOnce()) {
    let saved: Vec<(&str, Option<String>)> =
        KEYS.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in KEYS {
        unsafe {
            env::remove_var(key);
        }
    }

    f();

    for (key, value) in saved {
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn test_config_from_env_with_defaults() {
    common::setup_test_env();

    with_clean_env(|| {
        let config = Config::from_env_only().unwrap();

        assert_eq!(config.database_url, "sqlite:./scrimfinder.db");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
        assert_eq!(config.allowed_origin, "*");
        assert_eq!(config.media_dir, "./media");
        assert_eq!(config.media_base_url, "http://127.0.0.1:8080/media");
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.directory_cache_ttl_secs, 30);
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
        assert!(config.is_development());
        assert!(!config.is_production());
    });
}

#[test]
#[serial]
fn test_config_from_env_with_custom_values() {
    common::setup_test_env();

    with_clean_env(|| {
        unsafe {
            env::set_var("DATABASE_URL", "sqlite:./custom.db");
            env::set_var("HOST", "0.0.0.0");
            env::set_var("PORT", "3000");
            env::set_var("ENVIRONMENT", "production");
            env::set_var("MEDIA_BASE_URL", "https://cdn.example.com/media");
            env::set_var("BCRYPT_COST", "12");
        }

        let config = Config::from_env_only().unwrap();

        assert_eq!(config.database_url, "sqlite:./custom.db");
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.media_base_url, "https://cdn.example.com/media");
        assert_eq!(config.bcrypt_cost, 12);
        assert!(config.is_production());
    });
}

#[test]
#[serial]
fn test_config_invalid_numbers_fall_back() {
    common::setup_test_env();

    with_clean_env(|| {
        unsafe {
            env::set_var("PORT", "not-a-port");
            env::set_var("BCRYPT_COST", "high");
        }

        let config = Config::from_env_only().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.bcrypt_cost, 10);
    });
}

#[test]
fn test_test_config() {
    let config = Config::test_config();

    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.environment, "test");
    assert_eq!(config.bcrypt_cost, 4);
}
