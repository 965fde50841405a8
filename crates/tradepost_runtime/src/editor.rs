//! Line editor wiring: rustyline with registry-driven tab completion.

use std::sync::Arc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer as RLCompleter, Config, Context, Editor, Helper, Hinter, Validator};
use tradepost_foundation::{Error, Result};

use crate::dispatcher::CommandRegistry;
use crate::session::Session;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Helper for rustyline: completion against the command registry, history
/// hints, and the default highlighting and validation behavior.
#[derive(Helper, RLCompleter, Hinter, Validator)]
struct TradepostHelper {
    #[rustyline(Completer)]
    completer: CommandLineCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl rustyline::highlight::Highlighter for TradepostHelper {}

/// Completes the word under the cursor by running the registry's completion
/// walk over everything typed so far.
struct CommandLineCompleter {
    registry: Arc<CommandRegistry>,
    session: Session,
}

impl Completer for CommandLineCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);

        let input = self.session.command_input();
        let candidates = self
            .registry
            .complete(&input, &line[..pos])
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();

        Ok((start, candidates))
    }
}

/// A rustyline-backed line editor bound to a session and command registry.
pub struct LineEditor {
    editor: Editor<TradepostHelper, DefaultHistory>,
}

impl LineEditor {
    /// Creates an editor whose tab completion consults `registry` as
    /// `session`'s sender.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not
    /// happen with hardcoded valid values).
    pub fn new(registry: Arc<CommandRegistry>, session: Session) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = TradepostHelper {
            completer: CommandLineCompleter { registry, session },
            hinter: HistoryHinter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }

    /// Reads one line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    /// Adds a line to history.
    pub fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
