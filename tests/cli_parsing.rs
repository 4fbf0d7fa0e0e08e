//! Tests for CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

use link_dispatch::{Config, Mode, ProviderId};

#[test]
fn test_minimal_invocation_uses_defaults() {
    let config = Config::try_parse_from(["link_dispatch", "urls.txt"]).expect("Should parse");

    assert_eq!(config.file, PathBuf::from("urls.txt"));
    assert_eq!(config.mode, Mode::Fallback);
    assert!(config.provider.is_none());
    assert!(!config.verify);
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.batch_delay_ms, 500);
    assert!(config.csv.is_none());
    assert!(!config.ranking);
}

#[test]
fn test_full_invocation_parses_every_flag() {
    let config = Config::try_parse_from([
        "link_dispatch",
        "-",
        "--mode",
        "fan-out",
        "--verify",
        "--timeout-seconds",
        "3",
        "--batch-delay-ms",
        "100",
        "--csv",
        "out.csv",
        "--ranking",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse full invocation");

    assert_eq!(config.file, PathBuf::from("-"));
    assert_eq!(config.mode, Mode::FanOut);
    assert!(config.verify);
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.batch_delay_ms, 100);
    assert_eq!(config.csv, Some(PathBuf::from("out.csv")));
    assert!(config.ranking);
}

#[test]
fn test_single_mode_with_provider() {
    let config = Config::try_parse_from([
        "link_dispatch",
        "urls.txt",
        "--mode",
        "single",
        "--provider",
        "is-gd",
    ])
    .expect("Should parse single mode");

    assert_eq!(config.mode, Mode::Single);
    assert_eq!(config.provider, Some(ProviderId::IsGd));
}

#[test]
fn test_provider_names_cover_the_table() {
    for (value, expected) in [
        ("tiny-url", ProviderId::TinyUrl),
        ("tiny-url-simple", ProviderId::TinyUrlSimple),
        ("is-gd", ProviderId::IsGd),
        ("v-gd", ProviderId::VGd),
        ("clck-ru", ProviderId::ClckRu),
        ("ulvis-net", ProviderId::UlvisNet),
        ("short-url-at", ProviderId::ShortUrlAt),
    ] {
        let config =
            Config::try_parse_from(["link_dispatch", "urls.txt", "--provider", value])
                .unwrap_or_else(|e| panic!("provider value {value} should parse: {e}"));
        assert_eq!(config.provider, Some(expected));
    }
}

#[test]
fn test_missing_input_file_is_an_error() {
    let result = Config::try_parse_from(["link_dispatch"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_mode_is_an_error() {
    let result = Config::try_parse_from(["link_dispatch", "urls.txt", "--mode", "shotgun"]);
    assert!(result.is_err());
}
