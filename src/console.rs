//! Line Console
//!
//! Drives a [`Session`] from text commands, one per line:
//!
//! ```text
//! list                 show the leaderboard
//! new                  open the form to request a dish
//! edit <rank>          open the form for the dish at <rank>
//! name <text>          set the dish name field
//! count <text>         set the number of requests field
//! submit               save the form
//! close                dismiss the form without saving
//! help                 show commands
//! quit                 leave the session
//! ```

use crate::session::{Session, SessionError};
use crate::view::{BoardView, ViewOptions};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Help text printed by `help`
pub const HELP: &str = "\
Commands:
  list              show the leaderboard
  new               open the form to request a dish
  edit <rank>       open the form for the dish at <rank>
  name <text>       set the dish name
  count <text>      set the number of requests
  submit            save the form
  close             dismiss the form without saving
  help              show this help
  quit              leave the session";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Edit(usize),
    Name(String),
    Count(String),
    Submit,
    Close,
    Help,
    Quit,
}

/// Console command parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("Rank must be a positive whole number, got {0:?}")]
    InvalidRank(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "new" | "add" => Ok(Command::New),
            "edit" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("edit"));
                }
                rest.parse()
                    .map(Command::Edit)
                    .map_err(|_| CommandError::InvalidRank(rest.to_string()))
            }
            // Blank field text is allowed here; the form rejects it on submit
            "name" => Ok(Command::Name(rest.to_string())),
            "count" => Ok(Command::Count(rest.to_string())),
            "submit" | "save" => Ok(Command::Submit),
            "close" | "cancel" => Ok(Command::Close),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// How replies are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminals
    #[default]
    Table,
    /// One JSON document per reply
    Json,
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardView>,
    #[serde(skip)]
    pub quit: bool,
}

impl Reply {
    /// Reply carrying a fresh board snapshot
    pub fn board(view: BoardView) -> Self {
        Self {
            message: None,
            board: Some(view),
            quit: false,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            board: None,
            quit: false,
        }
    }
}

/// Errors surfaced to the console user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// A session plus how to present it
pub struct Console {
    session: Session,
    options: ViewOptions,
}

impl Console {
    pub fn new(session: Session, options: ViewOptions) -> Self {
        Self { session, options }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Snapshot for rendering
    pub fn view(&self) -> BoardView {
        BoardView::build(&self.session, &self.options)
    }

    /// Parse and execute one input line
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, ConsoleError> {
        let command: Command = line.parse()?;
        Ok(self.execute(command)?)
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> Result<Reply, SessionError> {
        tracing::debug!(?command, "Executing console command");

        match command {
            Command::List => {}
            Command::New => self.session.begin_add(),
            Command::Edit(rank) => self.session.begin_edit_at(rank)?,
            Command::Name(text) => self.session.set_name(text)?,
            Command::Count(text) => self.session.set_order_count(text)?,
            Command::Close => self.session.close_surface(),
            Command::Submit => {
                let outcome = self.session.submit()?;
                let name = self
                    .session
                    .board()
                    .get(outcome.dish)
                    .map(|d| d.name.to_string())
                    .unwrap_or_default();
                let verb = if outcome.edited { "Updated" } else { "Added" };
                let mut reply = Reply::board(self.view());
                reply.message = Some(format!("{} {} at rank {}", verb, name, outcome.rank));
                return Ok(reply);
            }
            Command::Help => return Ok(Reply::message(HELP)),
            Command::Quit => {
                return Ok(Reply {
                    message: None,
                    board: None,
                    quit: true,
                })
            }
        }

        Ok(Reply::board(self.view()))
    }

    /// Read commands until `quit` or end of input
    ///
    /// Command errors are reported on `output` and the loop continues; only
    /// I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        format: OutputFormat,
        prompt: bool,
    ) -> io::Result<()> {
        write_reply(&mut output, &Reply::board(self.view()), format)?;

        let mut lines = input.lines();
        loop {
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            match self.handle_line(&line) {
                Ok(reply) if reply.quit => break,
                Ok(reply) => write_reply(&mut output, &reply, format)?,
                Err(e) => write_error(&mut output, &e, format)?,
            }
        }

        tracing::debug!(stats = %self.session.board().stats(), "Console finished");
        Ok(())
    }
}

/// Write a reply in the chosen format
pub fn write_reply<W: Write>(output: &mut W, reply: &Reply, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            if let Some(message) = &reply.message {
                writeln!(output, "{}", message)?;
            }
            if let Some(board) = &reply.board {
                write!(output, "{}", board.to_text())?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(reply)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(output, "{}", json)?;
        }
    }
    Ok(())
}

fn write_error<W: Write>(output: &mut W, error: &ConsoleError, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => writeln!(output, "error: {}", error),
        OutputFormat::Json => writeln!(
            output,
            "{}",
            serde_json::json!({ "error": error.to_string() })
        ),
    }
}
