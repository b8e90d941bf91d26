use std::collections::BTreeMap;

use shared::{
    domain::{JokeRecord, LanguageCode},
    error::TableError,
};
use tracing::debug;

mod builtin;
pub mod file;
pub mod random;

pub use file::TableFile;
pub use random::{RandomSource, ScriptedRandom};

/// Immutable per-language joke lists with a mandatory fallback language.
///
/// Every language maps to a non-empty list, and the fallback list is stored
/// apart from the others so lookups stay total without runtime checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeTable {
    fallback: LanguageCode,
    fallback_jokes: Vec<JokeRecord>,
    jokes: BTreeMap<LanguageCode, Vec<JokeRecord>>,
}

impl JokeTable {
    pub fn new(
        jokes: impl IntoIterator<Item = (LanguageCode, Vec<JokeRecord>)>,
        fallback: impl Into<LanguageCode>,
    ) -> Result<Self, TableError> {
        let fallback = fallback.into();
        let mut jokes: BTreeMap<LanguageCode, Vec<JokeRecord>> = jokes.into_iter().collect();

        for (code, records) in &jokes {
            validate_language(code, records)?;
        }

        let fallback_jokes = jokes
            .remove(fallback.as_str())
            .ok_or_else(|| TableError::MissingFallback(fallback.to_string()))?;

        Ok(Self {
            fallback,
            fallback_jokes,
            jokes,
        })
    }

    pub fn builtin() -> Self {
        let mut jokes: BTreeMap<LanguageCode, Vec<JokeRecord>> = builtin::BUILTIN_JOKES
            .iter()
            .map(|(code, records)| {
                let records = records
                    .iter()
                    .map(|(text, category)| JokeRecord::new(*text, *category))
                    .collect();
                (LanguageCode::from(*code), records)
            })
            .collect();
        let fallback = LanguageCode::fallback();
        let fallback_jokes = jokes.remove(fallback.as_str()).unwrap_or_default();

        Self {
            fallback,
            fallback_jokes,
            jokes,
        }
    }

    pub fn fallback(&self) -> &LanguageCode {
        &self.fallback
    }

    pub fn contains(&self, code: &str) -> bool {
        code == self.fallback.as_str() || self.jokes.contains_key(code)
    }

    /// Languages with their own jokes, fallback first.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        std::iter::once(&self.fallback).chain(self.jokes.keys())
    }

    /// Number of languages with their own jokes.
    pub fn len(&self) -> usize {
        self.jokes.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Jokes for `code`, or the fallback list when the code is unknown.
    pub fn resolve(&self, code: &str) -> &[JokeRecord] {
        if code == self.fallback.as_str() {
            return &self.fallback_jokes;
        }
        match self.jokes.get(code) {
            Some(records) => records,
            None => {
                debug!(
                    language = code,
                    fallback = %self.fallback,
                    "unknown language; using fallback jokes"
                );
                &self.fallback_jokes
            }
        }
    }

    /// Picks one joke for `code` uniformly at random. Never fails: unknown
    /// codes draw from the fallback list.
    pub fn pick(&self, code: &str, rng: &mut dyn RandomSource) -> JokeRecord {
        let records = self.resolve(code);
        // wrap out-of-range indices from misbehaving sources
        let index = rng.pick_index(records.len()) % records.len();
        records[index].clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &[JokeRecord])> {
        std::iter::once((&self.fallback, self.fallback_jokes.as_slice())).chain(
            self.jokes
                .iter()
                .map(|(code, records)| (code, records.as_slice())),
        )
    }
}

impl Default for JokeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_language(code: &LanguageCode, records: &[JokeRecord]) -> Result<(), TableError> {
    if code.as_str().trim().is_empty() {
        return Err(TableError::BlankLanguageCode);
    }
    if records.is_empty() {
        return Err(TableError::EmptyLanguage(code.to_string()));
    }
    for (index, record) in records.iter().enumerate() {
        let blank = if record.text.trim().is_empty() {
            Some("text")
        } else if record.category.trim().is_empty() {
            Some("category")
        } else {
            None
        };
        if let Some(field) = blank {
            return Err(TableError::BlankField {
                language: code.to_string(),
                index,
                field,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
