use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use joke_table::{file::load_table, random, JokeTable, TableFile};
use shared::domain::LanguageCatalog;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "jokemaster-tools", about = "Inspect and author joke tables")]
struct Cli {
    /// Table file to operate on instead of the builtin table
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List languages with their joke counts
    Languages,
    /// Write the builtin table as TOML
    ExportBuiltin {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Check a table file and report what it contains
    Validate { path: PathBuf },
    /// Draw jokes for one language and tally the categories
    Sample {
        #[arg(long, short, default_value = "en")]
        language: String,
        #[arg(long, short = 'n', default_value_t = 10)]
        count: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Languages => {
            let (table, catalog) = open_table(cli.table)?;
            for language in catalog.iter() {
                let count = table.resolve(language.code.as_str()).len();
                let source = if table.contains(language.code.as_str()) {
                    language.code.as_str()
                } else {
                    table.fallback().as_str()
                };
                println!(
                    "{} {:<4} {:<12} {count} jokes ({source})",
                    language.icon, language.code, language.display_name
                );
            }
        }
        Command::ExportBuiltin { output } => {
            let toml = TableFile::from_builtin()
                .to_toml_string()
                .context("failed to serialize builtin table")?;
            match output {
                Some(path) => {
                    fs::write(&path, toml)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    info!(path = %path.display(), "exported builtin table");
                }
                None => print!("{toml}"),
            }
        }
        Command::Validate { path } => {
            let (table, catalog) = load_table(&path)
                .with_context(|| format!("invalid joke table '{}'", path.display()))?;
            let jokes: usize = table.iter().map(|(_, records)| records.len()).sum();
            info!(
                path = %path.display(),
                languages = table.len(),
                jokes,
                fallback = %table.fallback(),
                "joke table is valid"
            );
            println!(
                "ok: {} languages, {jokes} jokes, fallback '{}', {} catalog entries",
                table.len(),
                table.fallback(),
                catalog.len()
            );
            for language in catalog.iter() {
                if !table.contains(language.code.as_str()) {
                    warn!(
                        language = %language.code,
                        fallback = %table.fallback(),
                        "language is offered but has no jokes of its own"
                    );
                }
            }
        }
        Command::Sample {
            language,
            count,
            seed,
        } => {
            let (table, _) = open_table(cli.table)?;
            info!(language = %language, count, ?seed, "sampling jokes");
            let mut rng = random::boxed(seed);
            let mut tally: BTreeMap<String, u32> = BTreeMap::new();
            for _ in 0..count {
                let joke = table.pick(&language, &mut *rng);
                println!("[{}] {}", joke.category, joke.text);
                *tally.entry(joke.category).or_default() += 1;
            }
            for (category, hits) in tally {
                println!("{category}: {hits}");
            }
        }
    }

    Ok(())
}

fn open_table(path: Option<PathBuf>) -> Result<(JokeTable, LanguageCatalog)> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading joke table");
            load_table(&path)
                .with_context(|| format!("failed to load joke table '{}'", path.display()))
        }
        None => Ok((JokeTable::builtin(), LanguageCatalog::builtin())),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn builtin_table_opens_without_a_path() {
        let (table, catalog) = open_table(None).expect("builtin");
        assert_eq!(table.fallback().as_str(), "en");
        assert_eq!(catalog.len(), 6);
    }
}
