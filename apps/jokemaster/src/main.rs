use std::{path::PathBuf, sync::Arc};

mod config;
mod controller;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use joke_table::{file::load_table, random, JokeTable};
use session_core::{SessionController, TokioScheduler};
use shared::{domain::LanguageCatalog, protocol::SessionEvent};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Overrides, Settings},
    controller::{
        commands::{UiCommand, HELP_TEXT},
        orchestration::{dispatch_command, next_completion, CommandOutcome},
    },
    ui::Output,
};

#[derive(Parser, Debug)]
#[command(name = "jokemaster", version, about = "Random jokes in several languages")]
struct Cli {
    /// Settings file (defaults to ./jokemaster.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Language selected when the session starts
    #[arg(long, short, global = true)]
    language: Option<String>,
    /// Seed for reproducible picks
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Artificial delay before each joke appears
    #[arg(long, global = true)]
    delay_ms: Option<u64>,
    /// Joke table file replacing the builtin jokes
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Print snapshots and events as JSON lines
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the offered languages
    Languages,
    /// Generate jokes one after another and exit
    Generate {
        #[arg(long, short = 'n', default_value_t = 1)]
        count: u32,
    },
    /// Read commands from stdin (default)
    Interactive,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            generation_delay_ms: self.delay_ms,
            default_language: self.language.clone(),
            seed: self.seed,
            table_path: self.table.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings =
        config::load_settings(cli.config.as_deref()).context("failed to load settings")?;
    settings.apply_overrides(cli.overrides());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str())),
        )
        .with_writer(std::io::stderr)
        .init();

    let controller = build_session(&settings)?;
    let output = Output::new(cli.json);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Languages => output.languages(&controller)?,
        Command::Generate { count } => run_batch(&controller, &output, count).await?,
        Command::Interactive => run_interactive(&controller, &output).await?,
    }

    controller.shutdown();
    Ok(())
}

fn build_session(settings: &Settings) -> Result<SessionController> {
    let (table, catalog) = match &settings.table_path {
        Some(path) => load_table(path)
            .with_context(|| format!("failed to load joke table '{}'", path.display()))?,
        None => (JokeTable::builtin(), LanguageCatalog::builtin()),
    };
    tracing::info!(
        languages = table.len(),
        delay_ms = settings.generation_delay_ms,
        default_language = %settings.default_language,
        "joke table ready"
    );

    let session_config = settings.session_config(&table, &catalog);
    let scheduler = TokioScheduler::try_current().context("no tokio runtime for scheduler")?;
    Ok(SessionController::new_with_dependencies(
        Arc::new(table),
        Arc::new(catalog),
        random::boxed(settings.seed),
        Arc::new(scheduler),
        session_config,
    ))
}

async fn run_batch(controller: &SessionController, output: &Output, count: u32) -> Result<()> {
    let mut events = controller.subscribe_events();
    for _ in 0..count {
        dispatch_command(controller, UiCommand::Generate);
        let done = next_completion(&mut events).await?;
        output.completion(&done)?;
        output.view(controller)?;
    }
    Ok(())
}

async fn run_interactive(controller: &SessionController, output: &Output) -> Result<()> {
    let mut events = controller.subscribe_events();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    output.view(controller)?;
    output.notice("type `help` for commands")?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                let cmd = match line.parse::<UiCommand>() {
                    Ok(cmd) => cmd,
                    Err(err) => {
                        output.notice(&err.to_string())?;
                        continue;
                    }
                };
                match dispatch_command(controller, cmd) {
                    CommandOutcome::Render => output.view(controller)?,
                    CommandOutcome::ShowLanguages => output.languages(controller)?,
                    CommandOutcome::ShowHelp => output.notice(HELP_TEXT)?,
                    CommandOutcome::Notice(message) => output.notice(&message)?,
                    CommandOutcome::Quit => break,
                }
            }
            event = events.recv() => match event {
                Ok(SessionEvent::GenerationCompleted(done)) => {
                    output.completion(&done)?;
                    output.view(controller)?;
                }
                Ok(SessionEvent::StateChanged(_)) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "session event receiver lagged");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }
    Ok(())
}
