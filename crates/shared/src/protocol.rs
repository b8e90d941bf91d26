use serde::{Deserialize, Serialize};

use crate::domain::{JokeRecord, LanguageCode, SessionId};

/// Smiles credited per completed generation in the session counter.
pub const SMILES_PER_JOKE: u64 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Generating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub selected_language: LanguageCode,
    pub current_joke: Option<JokeRecord>,
    pub phase: SessionPhase,
    pub generation_count: u64,
}

impl SessionSnapshot {
    pub fn is_generating(&self) -> bool {
        self.phase == SessionPhase::Generating
    }

    pub fn smiles_created(&self) -> u64 {
        self.generation_count.saturating_mul(SMILES_PER_JOKE)
    }
}

/// Payload of the transient "new joke" notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationCompleted {
    pub category: String,
    pub language_name: String,
}

impl GenerationCompleted {
    pub fn title(&self) -> &'static str {
        "New Joke Generated!"
    }

    pub fn description(&self) -> String {
        format!(
            "Here's a {} joke in {}",
            self.category, self.language_name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SessionEvent {
    StateChanged(SessionSnapshot),
    GenerationCompleted(GenerationCompleted),
}
