//! What the presentation layer shows for a given session snapshot.

use shared::{domain::LanguageCatalog, protocol::SessionSnapshot};

pub const PLACEHOLDER_PROMPT: &str = "Ready for a good laugh? Click the button below!";
pub const TRIGGER_LABEL: &str = "Generate Joke";
pub const TRIGGER_BUSY_LABEL: &str = "Generating...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeDisplay {
    Placeholder {
        prompt: &'static str,
    },
    Joke {
        quoted_text: String,
        category: String,
        language_name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerView {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub joke: JokeDisplay,
    pub trigger: TriggerView,
    pub generation_count: u64,
    pub smiles_created: u64,
}

/// Display name for `code`, or the code itself when the catalog lacks it.
pub fn language_name(catalog: &LanguageCatalog, code: &str) -> String {
    catalog
        .display_name(code)
        .map(str::to_owned)
        .unwrap_or_else(|| code.to_owned())
}

pub fn project(snapshot: &SessionSnapshot, catalog: &LanguageCatalog) -> DisplayView {
    let joke = match &snapshot.current_joke {
        None => JokeDisplay::Placeholder {
            prompt: PLACEHOLDER_PROMPT,
        },
        Some(record) => JokeDisplay::Joke {
            quoted_text: format!("\"{}\"", record.text),
            category: record.category.clone(),
            language_name: language_name(catalog, snapshot.selected_language.as_str()),
        },
    };

    let busy = snapshot.is_generating();
    let trigger = TriggerView {
        enabled: !busy,
        busy,
        label: if busy {
            TRIGGER_BUSY_LABEL
        } else {
            TRIGGER_LABEL
        },
    };

    DisplayView {
        joke,
        trigger,
        generation_count: snapshot.generation_count,
        smiles_created: snapshot.smiles_created(),
    }
}

#[cfg(test)]
mod tests {
    use shared::{
        domain::{JokeRecord, LanguageCode, SessionId},
        protocol::SessionPhase,
    };

    use super::*;

    fn snapshot(language: &str, joke: Option<JokeRecord>, phase: SessionPhase) -> SessionSnapshot {
        SessionSnapshot {
            session_id: SessionId::new(),
            selected_language: LanguageCode::from(language),
            current_joke: joke,
            phase,
            generation_count: 2,
        }
    }

    #[test]
    fn empty_session_shows_placeholder_and_enabled_trigger() {
        let view = project(
            &snapshot("en", None, SessionPhase::Idle),
            &LanguageCatalog::builtin(),
        );
        assert_eq!(
            view.joke,
            JokeDisplay::Placeholder {
                prompt: PLACEHOLDER_PROMPT
            }
        );
        assert!(view.trigger.enabled);
        assert!(!view.trigger.busy);
        assert_eq!(view.trigger.label, "Generate Joke");
        assert_eq!(view.smiles_created, 6);
    }

    #[test]
    fn joke_is_quoted_with_category_and_language_name() {
        let joke = JokeRecord::new("Que dit un café qui voit un thé? Théière moi!", "Nourriture");
        let view = project(
            &snapshot("fr", Some(joke), SessionPhase::Idle),
            &LanguageCatalog::builtin(),
        );
        assert_eq!(
            view.joke,
            JokeDisplay::Joke {
                quoted_text: "\"Que dit un café qui voit un thé? Théière moi!\"".into(),
                category: "Nourriture".into(),
                language_name: "Français".into(),
            }
        );
    }

    #[test]
    fn generating_disables_trigger() {
        let view = project(
            &snapshot("en", None, SessionPhase::Generating),
            &LanguageCatalog::builtin(),
        );
        assert!(!view.trigger.enabled);
        assert!(view.trigger.busy);
        assert_eq!(view.trigger.label, "Generating...");
    }

    #[test]
    fn unknown_language_shows_raw_code() {
        assert_eq!(language_name(&LanguageCatalog::builtin(), "tlh"), "tlh");
        assert_eq!(language_name(&LanguageCatalog::builtin(), "hi"), "हिंदी");
    }
}
