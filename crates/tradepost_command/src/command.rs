//! Binds a name, permission, and ordered argument list to domain logic.

use std::fmt;

use tradepost_foundation::{Error, Result};

use crate::argument::{dedup_candidates, CommandArgument};
use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;
use crate::text;

/// Domain logic invoked after a full, successful parse.
///
/// Receives the invocation and the populated context. Errors raised here are
/// domain errors, reported through the system error channel — they are never
/// parse errors.
pub type CommandExecutor = Box<dyn Fn(&CommandInput, &CommandContext) -> Result<()>>;

/// A named command: permission predicate, ordered argument schema, executor.
///
/// Argument order is parse order and determines error priority. The argument
/// list forms the schema the context satisfies after a successful parse.
pub struct Command {
    name: String,
    aliases: Vec<String>,
    description: String,
    permission: Option<String>,
    arguments: Vec<Box<dyn CommandArgument>>,
    executor: CommandExecutor,
}

impl Command {
    /// Creates a command with the given primary name and no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            permission: None,
            arguments: Vec::new(),
            executor: Box::new(|_, _| Ok(())),
        }
    }

    /// Adds an alternative name.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sets the one-line description shown by help.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Requires a permission node of the sender.
    #[must_use]
    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permission = Some(node.into());
        self
    }

    /// Appends an argument. Declaration order is parse order.
    #[must_use]
    pub fn add_argument(mut self, argument: impl CommandArgument + 'static) -> Self {
        self.arguments.push(Box::new(argument));
        self
    }

    /// Sets the execution callback.
    #[must_use]
    pub fn executor(
        mut self,
        executor: impl Fn(&CommandInput, &CommandContext) -> Result<()> + 'static,
    ) -> Self {
        self.executor = Box::new(executor);
        self
    }

    /// The command's primary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command's alternative names.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The command's one-line description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The permission node required to run this command, if any.
    #[must_use]
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// Returns true if `name` is this command's name or one of its aliases,
    /// compared case- and separator-insensitively.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        text::matches_identifier(name, &self.name)
            || self.aliases.iter().any(|a| text::matches_identifier(name, a))
    }

    /// Parses the token sequence into a fully populated context.
    ///
    /// Arguments run in declared order against a fresh reader and context;
    /// the first failure aborts the whole parse. After every argument has
    /// succeeded the reader must be exhausted — leftover tokens are a
    /// [`ParseError::TooManyArguments`] failure, not a silent success.
    ///
    /// # Errors
    ///
    /// Returns the first argument's failure, or `TooManyArguments` for
    /// trailing unconsumed tokens.
    pub fn parse(&self, input: &CommandInput, tokens: &[&str]) -> std::result::Result<CommandContext, ParseError> {
        let mut reader = ArgsReader::new(tokens);
        let mut ctx = CommandContext::new();
        for argument in &self.arguments {
            argument.parse(input, &mut ctx, &mut reader)?;
        }
        if let Some(extra) = reader.peek() {
            return Err(ParseError::TooManyArguments {
                first_unparsed: extra.to_string(),
            });
        }
        Ok(ctx)
    }

    /// Checks permission, parses, and runs the executor.
    ///
    /// # Errors
    ///
    /// Returns a no-permission error if the sender lacks the required node,
    /// an invalid-input error wrapping the parse failure's message, or
    /// whatever domain error the executor raises.
    pub fn execute(&self, input: &CommandInput, tokens: &[&str]) -> Result<()> {
        if let Some(node) = &self.permission {
            if !input.has_permission(node) {
                return Err(Error::no_permission(node.clone()));
            }
        }
        let ctx = self
            .parse(input, tokens)
            .map_err(|failure| Error::invalid(failure.to_string()))?;
        (self.executor)(input, &ctx)
    }

    /// Produces completion candidates for the final, partial token.
    ///
    /// Walks the argument list consuming tokens exactly as [`Self::parse`]
    /// does. An argument owns the cursor token once at most one token
    /// remains; its candidates are collected, and if it can also succeed
    /// while consuming nothing (an elective argument), later arguments may
    /// own the cursor too. A failure strictly left of the cursor yields no
    /// suggestions. Completion never raises an error.
    #[must_use]
    pub fn completions(&self, input: &CommandInput, tokens: &[&str]) -> Vec<String> {
        let mut reader = ArgsReader::new(tokens);
        let mut ctx = CommandContext::new();
        let mut candidates = Vec::new();

        for argument in &self.arguments {
            let checkpoint = reader.checkpoint();
            let snapshot = ctx.snapshot();

            if reader.remaining() <= 1 {
                // The cursor token (or empty partial) falls in this
                // argument's span.
                candidates.extend(argument.complete(input, &ctx, &reader));
                match argument.parse(input, &mut ctx, &mut reader) {
                    // Succeeded without consuming the partial token: later
                    // arguments may own the cursor as well.
                    Ok(()) if reader.position() == checkpoint.position() => continue,
                    _ => break,
                }
            }

            if argument.parse(input, &mut ctx, &mut reader).is_err() {
                // Hard failure strictly left of the cursor.
                reader.reset(checkpoint);
                ctx.restore(&snapshot);
                return Vec::new();
            }
        }

        dedup_candidates(candidates)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("permission", &self.permission)
            .field("arguments", &self.arguments.len())
            .finish_non_exhaustive()
    }
}
