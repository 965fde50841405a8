//! Zero-or-one combinator.

use crate::argument::CommandArgument;
use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;

/// Makes a child argument elective.
///
/// On child failure the reader and context are rewound and the parse
/// succeeds with the child's key simply absent — callers must use the
/// context's optional lookup, never the required one, for an
/// optional-wrapped key. An optional never raises a parse failure itself.
pub struct OptionalArgument {
    child: Box<dyn CommandArgument>,
}

impl OptionalArgument {
    /// Wraps `child` so that its absence is not an error.
    #[must_use]
    pub fn new(child: impl CommandArgument + 'static) -> Self {
        Self {
            child: Box::new(child),
        }
    }
}

impl CommandArgument for OptionalArgument {
    fn name(&self) -> &str {
        self.child.name()
    }

    fn parse(
        &self,
        input: &CommandInput,
        ctx: &mut CommandContext,
        reader: &mut ArgsReader<'_>,
    ) -> Result<(), ParseError> {
        let checkpoint = reader.checkpoint();
        let snapshot = ctx.snapshot();
        if self.child.parse(input, ctx, reader).is_err() {
            reader.reset(checkpoint);
            ctx.restore(&snapshot);
        }
        Ok(())
    }

    fn complete(
        &self,
        input: &CommandInput,
        ctx: &CommandContext,
        reader: &ArgsReader<'_>,
    ) -> Vec<String> {
        self.child.complete(input, ctx, reader)
    }
}
