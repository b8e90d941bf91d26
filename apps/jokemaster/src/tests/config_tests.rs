use super::*;

use std::{collections::HashMap, fs};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_canonical_configuration() {
    let settings = Settings::default();
    assert_eq!(settings.generation_delay(), Duration::from_millis(800));
    assert_eq!(settings.default_language, "en");
    assert_eq!(settings.seed, None);
    assert_eq!(settings.generation_delay_ms, 800);
    assert_eq!(
        settings.session_config(&JokeTable::builtin(), &LanguageCatalog::builtin()),
        SessionConfig::default()
    );
}

#[test]
fn parses_partial_file_over_defaults() {
    let settings = parse_settings(
        "generation_delay_ms = 1200\ndefault_language = \"fr\"\n",
        Path::new("jokemaster.toml"),
    )
    .expect("parse");

    assert_eq!(settings.generation_delay_ms, 1200);
    assert_eq!(settings.default_language, "fr");
    assert_eq!(settings.log_level, "info");
}

#[test]
fn rejects_unknown_keys() {
    let err = parse_settings("delay = 5\n", Path::new("jokemaster.toml")).expect_err("unknown key");
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn env_overrides_file_values() {
    let mut settings = Settings {
        generation_delay_ms: 1200,
        ..Settings::default()
    };
    apply_env_overrides(
        &mut settings,
        env(&[
            ("JOKEMASTER_DELAY_MS", "50"),
            ("APP__DEFAULT_LANGUAGE", "de"),
            ("JOKEMASTER_SEED", "7"),
            ("JOKEMASTER_TABLE", "/tmp/jokes.toml"),
        ]),
    )
    .expect("env");

    assert_eq!(settings.generation_delay_ms, 50);
    assert_eq!(settings.default_language, "de");
    assert_eq!(settings.seed, Some(7));
    assert_eq!(settings.table_path, Some(PathBuf::from("/tmp/jokes.toml")));
}

#[test]
fn app_prefixed_env_wins_over_short_form() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[("APP__LOG_LEVEL", "debug"), ("JOKEMASTER_LOG", "warn")]),
    )
    .expect("env");
    assert_eq!(settings.log_level, "debug");
}

#[test]
fn invalid_numeric_env_is_reported() {
    let mut settings = Settings::default();
    let err = apply_env_overrides(&mut settings, env(&[("APP__SEED", "lots")]))
        .expect_err("bad seed");
    match err {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "seed"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn offered_default_language_is_kept() {
    let settings = Settings {
        default_language: "hi".into(),
        ..Settings::default()
    };
    let config = settings.session_config(&JokeTable::builtin(), &LanguageCatalog::builtin());
    assert_eq!(config.default_language.as_str(), "hi");
}

#[test]
fn default_language_outside_catalog_starts_on_fallback() {
    let mut settings = Settings::default();
    settings.apply_overrides(Overrides {
        default_language: Some("xx".into()),
        generation_delay_ms: Some(5),
        ..Overrides::default()
    });
    let config = settings.session_config(&JokeTable::builtin(), &LanguageCatalog::builtin());
    assert_eq!(config.default_language.as_str(), "en");
    assert_eq!(config.generation_delay, Duration::from_millis(5));

    // codes are case-sensitive
    settings.default_language = "FR".into();
    let config = settings.session_config(&JokeTable::builtin(), &LanguageCatalog::builtin());
    assert_eq!(config.default_language.as_str(), "en");
}

#[test]
fn cli_overrides_win_last() {
    let mut settings = Settings::default();
    settings.apply_overrides(Overrides {
        generation_delay_ms: Some(10),
        default_language: Some("it".into()),
        seed: None,
        table_path: None,
    });
    assert_eq!(settings.generation_delay_ms, 10);
    assert_eq!(settings.default_language, "it");
    assert_eq!(settings.seed, None);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings(Some(&dir.path().join("absent.toml"))).expect_err("missing");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jokemaster.toml");
    fs::write(&path, "seed = 3\n").expect("write");

    let settings = read_settings_file(&path).expect("load");
    assert_eq!(settings.seed, Some(3));
}
