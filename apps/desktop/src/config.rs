use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub search_debounce_ms: u64,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            catalog_path: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = std::fs::read_to_string("desktop.toml") {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(table) = raw.parse::<toml::Table>() else {
        return;
    };
    if let Some(v) = table.get("search_debounce_ms").and_then(|v| v.as_integer()) {
        if v >= 0 {
            settings.search_debounce_ms = v as u64;
        }
    }
    if let Some(v) = table.get("catalog_path").and_then(|v| v.as_str()) {
        settings.catalog_path = Some(PathBuf::from(v));
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for name in ["SEARCH_DEBOUNCE_MS", "APP__SEARCH_DEBOUNCE_MS"] {
        if let Some(v) = lookup(name) {
            if let Ok(parsed) = v.parse::<u64>() {
                settings.search_debounce_ms = parsed;
            }
        }
    }
    for name in ["CATALOG_PATH", "APP__CATALOG_PATH"] {
        if let Some(v) = lookup(name) {
            settings.catalog_path = Some(PathBuf::from(v));
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
