use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use joke_table::{random, JokeTable, RandomSource};
use shared::{
    domain::{JokeRecord, LanguageCatalog, LanguageCode, SessionId},
    protocol::{GenerationCompleted, SessionEvent, SessionPhase, SessionSnapshot},
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

pub mod display;
pub mod scheduler;

pub use display::{DisplayView, JokeDisplay, TriggerView};
pub use scheduler::{ManualScheduler, ScheduledTask, Scheduler, TokioScheduler};

pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(800);
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub generation_delay: Duration,
    pub default_language: LanguageCode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            generation_delay: DEFAULT_GENERATION_DELAY,
            default_language: LanguageCode::fallback(),
        }
    }
}

/// Outcome of [`SessionController::request_generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationRequest {
    Scheduled { delay: Duration },
    /// A generation was already in flight; nothing changed.
    AlreadyGenerating,
}

struct SessionState {
    selected_language: LanguageCode,
    current_joke: Option<JokeRecord>,
    phase: SessionPhase,
    generation_count: u64,
}

struct SessionInner {
    id: SessionId,
    table: Arc<JokeTable>,
    catalog: Arc<LanguageCatalog>,
    rng: Mutex<Box<dyn RandomSource>>,
    state: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

/// Owns one UI session: the selected language, the joke on display, and the
/// Idle/Generating cycle with its fixed artificial delay.
///
/// Pending completions hold only a weak reference to the session, so dropping
/// the controller discards them without touching any state.
pub struct SessionController {
    inner: Arc<SessionInner>,
    scheduler: Arc<dyn Scheduler>,
    generation_delay: Duration,
}

impl SessionController {
    /// Session over the builtin table and catalog with an unseeded generator.
    pub fn new(scheduler: Arc<dyn Scheduler>, config: SessionConfig) -> Self {
        Self::new_with_dependencies(
            Arc::new(JokeTable::builtin()),
            Arc::new(LanguageCatalog::builtin()),
            Box::new(random::from_entropy()),
            scheduler,
            config,
        )
    }

    pub fn new_with_dependencies(
        table: Arc<JokeTable>,
        catalog: Arc<LanguageCatalog>,
        rng: Box<dyn RandomSource>,
        scheduler: Arc<dyn Scheduler>,
        config: SessionConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let inner = Arc::new(SessionInner {
            id: SessionId::new(),
            table,
            catalog,
            rng: Mutex::new(rng),
            state: Mutex::new(SessionState {
                selected_language: config.default_language,
                current_joke: None,
                phase: SessionPhase::Idle,
                generation_count: 0,
            }),
            events,
        });
        debug!(session_id = %inner.id, "session started");

        Self {
            inner,
            scheduler,
            generation_delay: config.generation_delay,
        }
    }

    pub fn id(&self) -> SessionId {
        self.inner.id
    }

    pub fn generation_delay(&self) -> Duration {
        self.generation_delay
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.inner.catalog
    }

    pub fn table(&self) -> &JokeTable {
        &self.inner.table
    }

    /// Allowed mid-generation: the pending completion reads the language that
    /// is selected when the delay elapses.
    pub fn select_language(&self, code: impl Into<LanguageCode>) {
        let mut state = self.inner.lock_state();
        state.selected_language = code.into();
        debug!(
            session_id = %self.inner.id,
            language = %state.selected_language,
            generating = state.phase == SessionPhase::Generating,
            "language selected"
        );
        // sent under the state lock so subscribers see snapshots in mutation order
        self.inner
            .publish(SessionEvent::StateChanged(self.inner.snapshot_of(&state)));
    }

    pub fn request_generation(&self) -> GenerationRequest {
        {
            let mut state = self.inner.lock_state();
            if state.phase == SessionPhase::Generating {
                debug!(
                    session_id = %self.inner.id,
                    "generation already in flight; ignoring request"
                );
                return GenerationRequest::AlreadyGenerating;
            }
            state.phase = SessionPhase::Generating;
            self.inner
                .publish(SessionEvent::StateChanged(self.inner.snapshot_of(&state)));
        }

        // scheduled outside the lock; a scheduler may run the task inline
        let session = Arc::downgrade(&self.inner);
        let delay = self.generation_delay;
        self.scheduler
            .schedule(delay, Box::new(move || complete_generation(&session)));
        debug!(session_id = %self.inner.id, ?delay, "generation scheduled");

        GenerationRequest::Scheduled { delay }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.inner.lock_state();
        self.inner.snapshot_of(&state)
    }

    pub fn display(&self) -> DisplayView {
        display::project(&self.snapshot(), &self.inner.catalog)
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Ends the session. Completions still pending are discarded when they fire.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        debug!(session_id = %self.inner.id, "session closed");
    }
}

fn complete_generation(session: &Weak<SessionInner>) {
    match session.upgrade() {
        Some(inner) => inner.complete_generation(),
        None => debug!("session ended before generation completed; discarding result"),
    }
}

impl SessionInner {
    fn complete_generation(&self) {
        let mut state = self.lock_state();
        if state.phase != SessionPhase::Generating {
            warn!(session_id = %self.id, "completion fired while idle; ignoring");
            return;
        }

        let language = state.selected_language.clone();
        let joke = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            self.table.pick(language.as_str(), &mut **rng)
        };
        let completed = GenerationCompleted {
            category: joke.category.clone(),
            language_name: display::language_name(&self.catalog, language.as_str()),
        };

        state.current_joke = Some(joke);
        state.generation_count += 1;
        state.phase = SessionPhase::Idle;

        info!(
            session_id = %self.id,
            language = %language,
            category = %completed.category,
            generation_count = state.generation_count,
            "joke generated"
        );
        self.publish(SessionEvent::StateChanged(self.snapshot_of(&state)));
        self.publish(SessionEvent::GenerationCompleted(completed));
    }

    /// Callers hold the state lock; `broadcast::Sender::send` never blocks.
    fn publish(&self, event: SessionEvent) {
        // no subscribers is normal for headless sessions
        let _ = self.events.send(event);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot_of(&self, state: &SessionState) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            selected_language: state.selected_language.clone(),
            current_joke: state.current_joke.clone(),
            phase: state.phase,
            generation_count: state.generation_count,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
