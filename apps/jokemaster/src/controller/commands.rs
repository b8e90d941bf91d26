//! Terminal input parsed into UI commands.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SelectLanguage { code: String },
    Generate,
    ListLanguages,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("`lang` needs a language code, e.g. `lang fr`")]
    MissingLanguage,
    #[error("unknown command '{0}'; type `help` for the list")]
    Unknown(String),
}

impl FromStr for UiCommand {
    type Err = CommandParseError;

    /// A blank line presses the generate trigger.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(Self::Generate);
        };

        match head.to_ascii_lowercase().as_str() {
            "lang" | "language" | "l" => parts
                .next()
                .map(|code| Self::SelectLanguage {
                    code: code.to_string(),
                })
                .ok_or(CommandParseError::MissingLanguage),
            "gen" | "generate" | "g" => Ok(Self::Generate),
            "langs" | "languages" => Ok(Self::ListLanguages),
            "show" | "s" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandParseError::Unknown(head.to_string())),
        }
    }
}

pub const HELP_TEXT: &str = "\
commands:
  <enter>, gen     generate a joke
  lang <code>      switch language (see `langs`)
  langs            list languages
  show             show the current joke
  help             this text
  quit             leave";
