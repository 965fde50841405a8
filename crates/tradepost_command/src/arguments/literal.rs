//! Fixed-literal argument.

use tradepost_foundation::Value;

use crate::argument::CommandArgument;
use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;
use crate::text;

/// Accepts one token only if it names one of a fixed set of literals.
///
/// Matching is case- and separator-insensitive (see
/// [`text::matches_identifier`]). On success a `true` presence flag is bound
/// under the literal's name, so callers test `ctx.has(..)` rather than read
/// a value. Completion offers the recognized literals filtered by prefix
/// match against the partial token.
pub struct LiteralArgument {
    name: String,
    literals: Vec<String>,
}

impl LiteralArgument {
    /// Creates a literal argument recognizing `literal`, which also serves
    /// as its name and context key.
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        let literal = literal.into();
        Self {
            name: literal.clone(),
            literals: vec![literal],
        }
    }

    /// Adds an additional recognized spelling. Aliases match but are not
    /// offered as completions.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.literals.push(alias.into());
        self
    }
}

impl CommandArgument for LiteralArgument {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(
        &self,
        _input: &CommandInput,
        ctx: &mut CommandContext,
        reader: &mut ArgsReader<'_>,
    ) -> Result<(), ParseError> {
        let token = reader.next().map_err(|_| self.missing_argument())?;
        if self
            .literals
            .iter()
            .any(|l| text::matches_identifier(token, l))
        {
            ctx.put(self.name(), Value::Bool(true));
            Ok(())
        } else {
            Err(self.invalid_argument(token))
        }
    }

    fn complete(
        &self,
        _input: &CommandInput,
        _ctx: &CommandContext,
        reader: &ArgsReader<'_>,
    ) -> Vec<String> {
        let partial = reader.peek().unwrap_or("");
        if text::completes_to(partial, &self.name) {
            vec![self.name.clone()]
        } else {
            Vec::new()
        }
    }
}
