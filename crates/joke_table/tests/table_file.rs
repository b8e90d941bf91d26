use std::{fs, path::Path};

use joke_table::{file::load_table, random::seeded, JokeTable, TableFile};
use shared::error::{ConfigError, TableError};

#[test]
fn builtin_export_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jokes.toml");

    let exported = TableFile::from_builtin();
    fs::write(&path, exported.to_toml_string().expect("serialize")).expect("write");

    let (table, catalog) = load_table(&path).expect("load");
    assert_eq!(table, JokeTable::builtin());
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.display_name("hi"), Some("हिंदी"));
}

#[test]
fn custom_table_without_languages_uses_builtin_catalog() {
    let raw = r#"
fallback = "en"

[[jokes.en]]
text = "Only one joke here."
category = "Meta"

[[jokes.pt]]
text = "Uma piada."
category = "Meta"
"#;
    let file = TableFile::parse(raw, Path::new("inline.toml")).expect("parse");
    let (table, catalog) = file.into_parts().expect("valid");

    assert!(table.contains("pt"));
    assert_eq!(catalog.display_name("en"), Some("English"));
    let joke = table.pick("zz", &mut seeded(1));
    assert_eq!(joke.text, "Only one joke here.");
}

#[test]
fn missing_fallback_in_file_is_rejected() {
    let raw = r#"
fallback = "de"

[[jokes.en]]
text = "A joke."
category = "Meta"
"#;
    let file = TableFile::parse(raw, Path::new("inline.toml")).expect("parse");
    assert_eq!(
        file.into_parts().expect_err("no de list"),
        TableError::MissingFallback("de".into())
    );
}

#[test]
fn malformed_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "jokes = 3").expect("write");

    match load_table(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unreadable_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_table(&dir.path().join("absent.toml")).expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
}
