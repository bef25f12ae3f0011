use std::io::{self, Write};

use anyhow::anyhow;
use libinspector::{parse_word, FilterError, ListFilter, MalformedInput};
use libpvmisa::Word;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0} takes no arguments")]
    UnexpectedArgument(&'static str),

    #[error(transparent)]
    Malformed(#[from] MalformedInput),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Inspect(Word),
    List(ListFilter),
    MakeLut,
    Help,
    Quit,
    Nothing,
}

#[derive(Debug)]
pub struct Command(String);

impl Command {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    /// Reads one line from stdin. `None` once input is exhausted.
    pub fn prompt() -> anyhow::Result<Option<Self>> {
        print!("> ");
        io::stdout().flush()?;

        io::stdin()
            .lines()
            .next()
            .transpose()
            .map(|line| line.map(Self))
            .map_err(|e| anyhow!("Couldn't read command from stdin: {}", e))
    }

    pub fn action(&self) -> Result<Action, CommandError> {
        let mut args = self.0.split_whitespace();

        let Some(first) = args.next() else {
            return Ok(Action::Nothing);
        };

        let action = match first {
            "q" | "quit" | "exit" => Action::Quit,
            "help" | "?" => Action::Help,
            "makelut" => Action::MakeLut,
            "list" => {
                let mut filter = ListFilter::default();
                for pair in args.by_ref() {
                    filter.apply(pair)?;
                }
                Action::List(filter)
            }
            word => Action::Inspect(parse_word(word)?),
        };

        if args.next().is_some() {
            return Err(CommandError::UnexpectedArgument(match action {
                Action::Quit => "quit",
                Action::Help => "help",
                Action::MakeLut => "makelut",
                _ => "an instruction word",
            }));
        }

        Ok(action)
    }
}
