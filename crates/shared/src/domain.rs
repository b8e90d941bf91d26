use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Language substituted whenever a lookup names a code the table does not know.
pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LanguageCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JokeRecord {
    pub text: String,
    pub category: String,
}

impl JokeRecord {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Selector entry shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: LanguageCode,
    pub display_name: String,
    pub icon: String,
}

impl Language {
    pub fn new(
        code: impl Into<LanguageCode>,
        display_name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            icon: icon.into(),
        }
    }
}

/// Ordered language metadata offered by the selector.
///
/// A catalog may list codes the joke table has no entries for; those resolve
/// through the table fallback at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            Language::new("en", "English", "🇺🇸"),
            Language::new("es", "Español", "🇪🇸"),
            Language::new("fr", "Français", "🇫🇷"),
            Language::new("de", "Deutsch", "🇩🇪"),
            Language::new("it", "Italiano", "🇮🇹"),
            Language::new("hi", "हिंदी", "🇮🇳"),
        ])
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages
            .iter()
            .find(|language| language.code.as_str() == code)
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.get(code).map(|language| language.display_name.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn builtin_catalog_lists_six_languages_in_selector_order() {
        let catalog = LanguageCatalog::builtin();
        let codes: Vec<&str> = catalog.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["en", "es", "fr", "de", "it", "hi"]);
        assert_eq!(catalog.display_name("en"), Some("English"));
        assert_eq!(catalog.display_name("fr"), Some("Français"));
    }

    #[test]
    fn unknown_code_has_no_display_name() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.display_name("xx"), None);
        assert!(!catalog.contains(""));
    }

    #[test]
    fn language_code_lookups_accept_plain_str() {
        let mut map = HashMap::new();
        map.insert(LanguageCode::new("fr"), 1);
        assert_eq!(map.get("fr"), Some(&1));
        assert_eq!(LanguageCode::default().as_str(), FALLBACK_LANGUAGE);
    }
}
