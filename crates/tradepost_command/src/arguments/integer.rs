//! Signed base-10 integer argument.

use tradepost_foundation::Value;

use crate::argument::CommandArgument;
use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;

/// Parses one token as a signed base-10 `i64`.
///
/// Never offers completions: numeric ranges are unbounded and suggestion is
/// not useful.
#[derive(Clone, Debug)]
pub struct IntegerArgument {
    name: String,
}

impl IntegerArgument {
    /// Creates an integer argument bound to the given context key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl CommandArgument for IntegerArgument {
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
        let value: i64 = token.parse().map_err(|_| self.invalid_argument(token))?;
        ctx.put(self.name(), Value::Int(value));
        Ok(())
    }

    fn complete(
        &self,
        _input: &CommandInput,
        _ctx: &CommandContext,
        _reader: &ArgsReader<'_>,
    ) -> Vec<String> {
        Vec::new()
    }
}
