//! Tests for config/types

use super::*;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert!(!config.autostart);
    assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    assert_eq!(config.clipboard.poll_interval_ms, 500);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
autostart = true
history_limit = 50

[clipboard]
backend = "osc52"
poll_interval_ms = 250
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(config.autostart);
    assert_eq!(config.history_limit, 50);
    assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
    assert_eq!(config.clipboard.poll_interval_ms, 250);
}

#[test]
fn test_clipboard_section_without_backend() {
    let toml = "[clipboard]\npoll_interval_ms = 100\n";
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    assert_eq!(config.clipboard.poll_interval_ms, 100);
}

#[test]
fn test_invalid_backend_fails_parse() {
    let toml = "[clipboard]\nbackend = \"pigeon\"\n";
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err(), "Invalid backend should fail to parse");
}

#[test]
fn test_autostart_wrong_type_fails_parse() {
    let result: Result<Config, _> = toml::from_str("autostart = \"yes\"");
    assert!(result.is_err());
}

#[test]
fn test_poll_interval_has_floor() {
    let clipboard = ClipboardConfig {
        poll_interval_ms: 1,
        ..ClipboardConfig::default()
    };
    assert_eq!(clipboard.poll_interval(), Duration::from_millis(50));
}

#[test]
fn test_effective_history_limit_zero_becomes_one() {
    let config = Config {
        history_limit: 0,
        ..Config::default()
    };
    assert_eq!(config.effective_history_limit(), MIN_HISTORY_LIMIT);
}

#[test]
fn test_serialize_then_parse_preserves_config() {
    let config = Config {
        autostart: true,
        history_limit: 12,
        clipboard: ClipboardConfig {
            backend: ClipboardBackend::System,
            poll_interval_ms: 750,
        },
    };
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_history_limit_always_in_range(limit in any::<usize>()) {
        let clamped = clamp_history_limit(limit);
        prop_assert!((MIN_HISTORY_LIMIT..=MAX_HISTORY_LIMIT).contains(&clamped));
    }

    #[test]
    fn prop_valid_backend_parsing(backend in prop::sample::select(vec!["auto", "system", "osc52"])) {
        let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", backend);
        let config: Config = toml::from_str(&toml_content).unwrap();

        let expected = match backend {
            "auto" => ClipboardBackend::Auto,
            "system" => ClipboardBackend::System,
            "osc52" => ClipboardBackend::Osc52,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.clipboard.backend, expected);
    }
}
