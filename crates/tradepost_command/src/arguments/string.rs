//! Verbatim single-token string argument.

use tradepost_foundation::Value;

use crate::argument::CommandArgument;
use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;

/// Accepts one token verbatim.
///
/// Tokens are never empty unless the dispatcher's tokenization explicitly
/// produced one (quoting policy belongs to the dispatcher, not this engine),
/// in which case the empty string is accepted too.
#[derive(Clone, Debug)]
pub struct StringArgument {
    name: String,
}

impl StringArgument {
    /// Creates a string argument bound to the given context key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl CommandArgument for StringArgument {
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
        ctx.put(self.name(), Value::from(token));
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
