//! Try-then-substitute-default combinator.

use tradepost_foundation::Value;

use crate::argument::CommandArgument;
use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;

/// Produces a default value from the invocation when the primary argument
/// fails.
///
/// The supplier inspects the ambient invocation state (typically the
/// sender's current target) and the context parsed so far; it cannot consume
/// tokens. Returning `None` means the fallback is not applicable.
pub type FallbackSupplier = Box<dyn Fn(&CommandInput, &CommandContext) -> Option<Value>>;

/// Wraps a primary argument with an ambient-state fallback.
///
/// A target can be supplied either explicitly as text or implicitly from
/// caller state; both populate the same context key so execution code never
/// branches on which path was taken. The explicit argument always wins: the
/// supplier only runs after the primary has failed. On primary failure with
/// an applicable fallback, the reader is rewound to before the primary
/// attempt and the supplied value is bound under the primary's name without
/// consuming tokens. If the fallback is not applicable, the primary's
/// original failure is re-raised and the reader is left where the primary
/// stopped — the enclosing combinator owns the rewind.
pub struct FallbackArgument {
    primary: Box<dyn CommandArgument>,
    supplier: FallbackSupplier,
}

impl FallbackArgument {
    /// Wraps `primary` with the given fallback supplier.
    #[must_use]
    pub fn new(
        primary: impl CommandArgument + 'static,
        supplier: impl Fn(&CommandInput, &CommandContext) -> Option<Value> + 'static,
    ) -> Self {
        Self {
            primary: Box::new(primary),
            supplier: Box::new(supplier),
        }
    }
}

impl CommandArgument for FallbackArgument {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn parse(
        &self,
        input: &CommandInput,
        ctx: &mut CommandContext,
        reader: &mut ArgsReader<'_>,
    ) -> Result<(), ParseError> {
        let checkpoint = reader.checkpoint();
        let snapshot = ctx.snapshot();
        match self.primary.parse(input, ctx, reader) {
            Ok(()) => Ok(()),
            Err(primary_failure) => {
                ctx.restore(&snapshot);
                if let Some(value) = (self.supplier)(input, ctx) {
                    reader.reset(checkpoint);
                    ctx.put(self.primary.name(), value);
                    Ok(())
                } else {
                    Err(primary_failure)
                }
            }
        }
    }

    fn complete(
        &self,
        input: &CommandInput,
        ctx: &CommandContext,
        reader: &ArgsReader<'_>,
    ) -> Vec<String> {
        self.primary.complete(input, ctx, reader)
    }
}
