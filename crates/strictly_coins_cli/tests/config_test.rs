//! Tests for configuration loading.

use std::fs;
use strictly_coins_cli::CoinsConfig;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = CoinsConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");

    assert_eq!(*config.display_limit(), 10);
    assert_eq!(*config.random_min(), 1);
    assert_eq!(*config.random_max(), 50);
    assert_eq!(*config.replay_delay_ms(), 0);
    assert_eq!(config.first_name(), "Player 1");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("strictly_coins.toml");
    fs::write(&path, "display_limit = 6\nsecond_name = \"Grace\"\n").expect("Write failed");

    let config = CoinsConfig::load_or_default(&path).expect("Load failed");
    assert_eq!(*config.display_limit(), 6);
    assert_eq!(config.second_name(), "Grace");
    assert_eq!(config.first_name(), "Player 1");
}

#[test]
fn test_inverted_random_bounds_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("strictly_coins.toml");
    fs::write(&path, "random_min = 10\nrandom_max = 10\n").expect("Write failed");

    let err = CoinsConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("random_max"));
}

#[test]
fn test_invalid_toml_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("strictly_coins.toml");
    fs::write(&path, "display_limit = [").expect("Write failed");

    assert!(CoinsConfig::from_file(&path).is_err());
}

#[test]
fn test_name_overrides() {
    let config = CoinsConfig::default().with_names(Some("Ada".to_string()), None);
    assert_eq!(config.first_name(), "Ada");
    assert_eq!(config.second_name(), "Player 2");
}
