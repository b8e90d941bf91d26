//! TOML representation of a joke table plus its language catalog.
//!
//! ```toml
//! fallback = "en"
//!
//! [[languages]]
//! code = "en"
//! display_name = "English"
//! icon = "🇺🇸"
//!
//! [[jokes.en]]
//! text = "Why did the coffee file a police report? It got mugged!"
//! category = "Food"
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use shared::{
    domain::{JokeRecord, Language, LanguageCatalog, LanguageCode},
    error::{ConfigError, TableError},
};

use crate::JokeTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFile {
    #[serde(default)]
    pub fallback: LanguageCode,
    /// Selector entries. Left empty, the builtin catalog is used.
    #[serde(default)]
    pub languages: Vec<Language>,
    pub jokes: BTreeMap<LanguageCode, Vec<JokeRecord>>,
}

impl TableFile {
    pub fn from_builtin() -> Self {
        let table = JokeTable::builtin();
        Self {
            fallback: table.fallback().clone(),
            languages: LanguageCatalog::builtin().iter().cloned().collect(),
            jokes: table
                .iter()
                .map(|(code, records)| (code.clone(), records.to_vec()))
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    pub fn parse(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|err| ConfigError::Parse {
            path: PathBuf::from(origin),
            message: err.to_string(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn into_parts(self) -> Result<(JokeTable, LanguageCatalog), TableError> {
        let table = JokeTable::new(self.jokes, self.fallback)?;
        let catalog = if self.languages.is_empty() {
            LanguageCatalog::builtin()
        } else {
            LanguageCatalog::new(self.languages)
        };
        Ok((table, catalog))
    }
}

/// Loads and validates a table file in one step.
pub fn load_table(path: &Path) -> Result<(JokeTable, LanguageCatalog), ConfigError> {
    let parts = TableFile::load(path)?.into_parts()?;
    Ok(parts)
}
