use std::collections::HashMap;
use std::path::PathBuf;

use super::{apply_env_overrides, apply_file_overrides, Settings};

#[test]
fn defaults_apply_without_overrides() {
    let settings = Settings::default();
    assert_eq!(settings.search_debounce_ms, 300);
    assert_eq!(settings.catalog_path, None);
}

#[test]
fn file_overrides_both_fields() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        "search_debounce_ms = 150\ncatalog_path = \"fixtures/catalog.json\"\n",
    );
    assert_eq!(settings.search_debounce_ms, 150);
    assert_eq!(
        settings.catalog_path,
        Some(PathBuf::from("fixtures/catalog.json"))
    );
}

#[test]
fn malformed_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "not valid toml [");
    assert_eq!(settings, Settings::default());
}

#[test]
fn negative_debounce_in_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "search_debounce_ms = -5\n");
    assert_eq!(settings.search_debounce_ms, 300);
}

#[test]
fn env_overrides_take_precedence_over_file_values() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "search_debounce_ms = 150\n");

    let env: HashMap<&str, &str> = HashMap::from([("SEARCH_DEBOUNCE_MS", "75")]);
    apply_env_overrides(&mut settings, |name| {
        env.get(name).map(|value| value.to_string())
    });
    assert_eq!(settings.search_debounce_ms, 75);
}

#[test]
fn app_prefixed_env_names_win_over_plain_ones() {
    let mut settings = Settings::default();
    let env: HashMap<&str, &str> = HashMap::from([
        ("SEARCH_DEBOUNCE_MS", "75"),
        ("APP__SEARCH_DEBOUNCE_MS", "50"),
        ("CATALOG_PATH", "plain.json"),
        ("APP__CATALOG_PATH", "prefixed.json"),
    ]);
    apply_env_overrides(&mut settings, |name| {
        env.get(name).map(|value| value.to_string())
    });
    assert_eq!(settings.search_debounce_ms, 50);
    assert_eq!(settings.catalog_path, Some(PathBuf::from("prefixed.json")));
}

#[test]
fn unparseable_env_debounce_is_ignored() {
    let mut settings = Settings::default();
    let env: HashMap<&str, &str> = HashMap::from([("SEARCH_DEBOUNCE_MS", "soon")]);
    apply_env_overrides(&mut settings, |name| {
        env.get(name).map(|value| value.to_string())
    });
    assert_eq!(settings.search_debounce_ms, 300);
}
