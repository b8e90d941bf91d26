//! Routes UI commands to the session controller and waits on its events.

use anyhow::{bail, Result};
use session_core::{GenerationRequest, SessionController};
use shared::protocol::{GenerationCompleted, SessionEvent};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::controller::commands::UiCommand;

/// What the terminal should do after a command was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Render,
    ShowLanguages,
    ShowHelp,
    Notice(String),
    Quit,
}

pub fn dispatch_command(controller: &SessionController, cmd: UiCommand) -> CommandOutcome {
    let cmd_name = match &cmd {
        UiCommand::SelectLanguage { .. } => "select_language",
        UiCommand::Generate => "generate",
        UiCommand::ListLanguages => "list_languages",
        UiCommand::Show => "show",
        UiCommand::Help => "help",
        UiCommand::Quit => "quit",
    };
    tracing::debug!(command = cmd_name, "handling ui command");

    match cmd {
        UiCommand::SelectLanguage { code } => {
            // the selector only offers catalog entries
            if !controller.catalog().contains(&code) {
                return CommandOutcome::Notice(format!(
                    "'{code}' is not an offered language; type `langs` to see them"
                ));
            }
            controller.select_language(code);
            CommandOutcome::Render
        }
        UiCommand::Generate => match controller.request_generation() {
            GenerationRequest::Scheduled { .. } => CommandOutcome::Render,
            GenerationRequest::AlreadyGenerating => {
                CommandOutcome::Notice("Still generating, hang on...".to_string())
            }
        },
        UiCommand::ListLanguages => CommandOutcome::ShowLanguages,
        UiCommand::Show => CommandOutcome::Render,
        UiCommand::Help => CommandOutcome::ShowHelp,
        UiCommand::Quit => CommandOutcome::Quit,
    }
}

/// Waits for the next completion notification, skipping state changes.
pub async fn next_completion(
    events: &mut broadcast::Receiver<SessionEvent>,
) -> Result<GenerationCompleted> {
    loop {
        match events.recv().await {
            Ok(SessionEvent::GenerationCompleted(done)) => return Ok(done),
            Ok(SessionEvent::StateChanged(_)) => continue,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "session event receiver lagged");
            }
            Err(RecvError::Closed) => bail!("session closed before the joke was ready"),
        }
    }
}
