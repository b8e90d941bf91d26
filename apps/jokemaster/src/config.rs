use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use joke_table::JokeTable;
use serde::Deserialize;
use session_core::{SessionConfig, DEFAULT_GENERATION_DELAY};
use shared::{
    domain::{LanguageCatalog, LanguageCode, FALLBACK_LANGUAGE},
    error::ConfigError,
};
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "jokemaster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub generation_delay_ms: u64,
    pub default_language: String,
    pub seed: Option<u64>,
    pub table_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation_delay_ms: u64::try_from(DEFAULT_GENERATION_DELAY.as_millis())
                .unwrap_or(u64::MAX),
            default_language: FALLBACK_LANGUAGE.into(),
            seed: None,
            table_path: None,
            log_level: "info".into(),
        }
    }
}

/// Command-line values that win over file and environment settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub generation_delay_ms: Option<u64>,
    pub default_language: Option<String>,
    pub seed: Option<u64>,
    pub table_path: Option<PathBuf>,
}

impl Settings {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// The starting language must be one the selector offers; anything else
    /// starts on the table fallback.
    pub fn session_config(&self, table: &JokeTable, catalog: &LanguageCatalog) -> SessionConfig {
        let default_language = if catalog.contains(&self.default_language) {
            LanguageCode::new(self.default_language.clone())
        } else {
            warn!(
                requested = %self.default_language,
                fallback = %table.fallback(),
                "default language is not offered; starting on the fallback"
            );
            table.fallback().clone()
        };
        SessionConfig {
            generation_delay: self.generation_delay(),
            default_language,
        }
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(v) = overrides.generation_delay_ms {
            self.generation_delay_ms = v;
        }
        if let Some(v) = overrides.default_language {
            self.default_language = v;
        }
        if let Some(v) = overrides.seed {
            self.seed = Some(v);
        }
        if let Some(v) = overrides.table_path {
            self.table_path = Some(v);
        }
    }
}

/// File, then environment. An explicit `path` must exist; the default file is
/// optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_settings_file(default_path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&raw, path)
}

fn parse_settings(raw: &str, path: &Path) -> Result<Settings, ConfigError> {
    toml::from_str(raw).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(v) = first_set(&lookup, &["APP__GENERATION_DELAY_MS", "JOKEMASTER_DELAY_MS"]) {
        settings.generation_delay_ms = parse_number(&v, "generation_delay_ms")?;
    }
    if let Some(v) = first_set(&lookup, &["APP__DEFAULT_LANGUAGE", "JOKEMASTER_LANGUAGE"]) {
        settings.default_language = v;
    }
    if let Some(v) = first_set(&lookup, &["APP__SEED", "JOKEMASTER_SEED"]) {
        settings.seed = Some(parse_number(&v, "seed")?);
    }
    if let Some(v) = first_set(&lookup, &["APP__TABLE_PATH", "JOKEMASTER_TABLE"]) {
        settings.table_path = Some(PathBuf::from(v));
    }
    if let Some(v) = first_set(&lookup, &["APP__LOG_LEVEL", "JOKEMASTER_LOG"]) {
        settings.log_level = v;
    }

    Ok(())
}

/// Value of the first key in `keys` that is set.
fn first_set(lookup: &impl Fn(&str) -> Option<String>, keys: &[&str]) -> Option<String> {
    keys.iter().copied().find_map(lookup)
}

fn parse_number(raw: &str, key: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|err| ConfigError::invalid_value(key, format!("'{raw}': {err}")))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
