//! Tests for coin files and random coin generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use strictly_coins_cli::CoinSource;
use strictly_coins_cli::input::{generate_random, load_file, parse_file_contents};
use tempfile::TempDir;

#[test]
fn test_file_source_reads_announced_coins() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("coins.txt");
    fs::write(&path, "4\n4\n15\n7\n3\n").expect("Write failed");

    let coins = CoinSource::File(path).load().expect("Load failed");
    assert_eq!(coins.values(), &[4, 15, 7, 3]);
}

#[test]
fn test_file_extra_lines_ignored() {
    let coins = parse_file_contents("2\n5\n6\nnot a coin\n").expect("Parse failed");
    assert_eq!(coins.values(), &[5, 6]);
}

#[test]
fn test_file_rejects_odd_or_missing_count() {
    let err = parse_file_contents("3\n1\n2\n3\n").unwrap_err();
    assert!(err.message.contains("even integer"));
    assert!(parse_file_contents("").is_err());
    assert!(parse_file_contents("two\n1\n2\n").is_err());
}

#[test]
fn test_file_rejects_bad_value_lines() {
    let err = parse_file_contents("2\n5\n-6\n").unwrap_err();
    assert!(err.message.contains("each line should contain a number"));
}

#[test]
fn test_file_rejects_values_whose_total_overflows() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("huge.txt");
    fs::write(&path, format!("2\n{}\n1\n", u64::MAX)).expect("Write failed");

    let err = CoinSource::File(path).load().unwrap_err();
    assert!(err.message.contains("overflows u64"));
}

#[test]
fn test_file_too_short() {
    let err = parse_file_contents("4\n1\n2\n").unwrap_err();
    assert!(err.message.contains("lists 2 coins"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(err.message.contains("Error reading the file"));
}

#[test]
fn test_random_within_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    let coins = generate_random(20, 3, 9, &mut rng).expect("Generation failed");
    assert_eq!(coins.len(), 20);
    assert!(coins.values().iter().all(|v| (3..=9).contains(v)));
}

#[test]
fn test_seeded_source_is_reproducible() {
    let source = CoinSource::Random {
        count: 8,
        min: 1,
        max: 50,
        seed: Some(2024),
    };
    assert_eq!(source.load().unwrap(), source.load().unwrap());
}

#[test]
fn test_random_rejects_bad_parameters() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate_random(0, 1, 5, &mut rng).is_err());
    assert!(generate_random(3, 1, 5, &mut rng).is_err());
    assert!(generate_random(4, 5, 5, &mut rng).is_err());
}
