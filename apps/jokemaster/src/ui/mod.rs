//! Terminal presentation: text rendering and JSON output.

pub mod render;

use std::io::{self, Write};

use anyhow::Result;
use session_core::SessionController;
use shared::protocol::{GenerationCompleted, SessionEvent};

/// Writes session output to stdout, as text or one JSON document per line.
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn view(&self, controller: &SessionController) -> Result<()> {
        if self.json {
            return self.line(&serde_json::to_string(&controller.snapshot())?);
        }
        self.line(&render::render_view(&controller.display()))
    }

    pub fn completion(&self, done: &GenerationCompleted) -> Result<()> {
        if self.json {
            let event = SessionEvent::GenerationCompleted(done.clone());
            return self.line(&serde_json::to_string(&event)?);
        }
        self.line(&render::render_toast(done))
    }

    pub fn languages(&self, controller: &SessionController) -> Result<()> {
        if self.json {
            return self.line(&serde_json::to_string(controller.catalog())?);
        }
        self.line(&render::render_languages(
            controller.catalog(),
            controller.table(),
        ))
    }

    pub fn notice(&self, message: &str) -> Result<()> {
        if self.json {
            return self.line(&serde_json::json!({ "notice": message }).to_string());
        }
        self.line(message)
    }

    fn line(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }
}
