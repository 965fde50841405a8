//! Routes a raw input line to a registered command.
//!
//! The dispatcher owns tokenization: commands and arguments only ever see
//! whitespace-split tokens. For completion, a line ending in whitespace means
//! the sender has committed the previous token and is starting a new one, so
//! an empty partial token is appended before the walk.

use std::sync::Arc;

use tradepost_command::{Command, CommandInput, text};
use tradepost_foundation::{Error, Result};

/// The set of commands a shell session can invoke.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<Command>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Registers a command.
    pub fn register(&mut self, command: Command) {
        self.commands.push(Arc::new(command));
    }

    /// Finds the command answering to `name`, if any.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Arc<Command>> {
        self.commands.iter().find(|c| c.answers_to(name))
    }

    /// Iterates registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Command>> {
        self.commands.iter()
    }

    /// Tokenizes `line` and executes the named command.
    ///
    /// A blank line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an unknown-command error for an unrecognized name, or
    /// whatever the command's execution raises.
    pub fn dispatch(&self, input: &CommandInput, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = tokens.split_first() else {
            return Ok(());
        };
        let command = self
            .find(name)
            .ok_or_else(|| Error::unknown_command(*name))?;
        command.execute(input, args)
    }

    /// Produces completion candidates for the last token of `line`.
    ///
    /// The first token completes against command names; later tokens are
    /// delegated to the named command's argument walk.
    #[must_use]
    pub fn complete(&self, input: &CommandInput, line: &str) -> Vec<String> {
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if line.is_empty() || line.ends_with(char::is_whitespace) {
            tokens.push("");
        }

        if tokens.len() <= 1 {
            let partial = tokens.first().copied().unwrap_or("");
            return self
                .commands
                .iter()
                .filter(|c| text::completes_to(partial, c.name()))
                .map(|c| c.name().to_string())
                .collect();
        }

        let Some(command) = self.find(tokens[0]) else {
            return Vec::new();
        };
        command.completions(input, &tokens[1..])
    }
}
