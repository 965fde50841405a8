//! Ordered alternation combinator.

use crate::argument::{dedup_candidates, CommandArgument};
use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;

/// Tries a list of candidate arguments in declared order; the first success
/// wins.
///
/// All candidates share one logical slot: the winner binds its value under
/// its own name, so callers disambiguate by checking which candidate name is
/// present in the context. With
/// [`reporting_under_own_name`](Self::reporting_under_own_name) the winning
/// value is additionally bound under the combinator's own name.
///
/// When every candidate fails, the surfaced failure is the one from the
/// candidate that consumed the most tokens before failing; ties go to the
/// earlier declared candidate. This points error messages at the most
/// plausible intended alternative rather than always the first declared one.
pub struct FirstOfArgument {
    name: String,
    children: Vec<Box<dyn CommandArgument>>,
    report_under_own_name: bool,
}

impl FirstOfArgument {
    /// Creates an empty alternation with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            report_under_own_name: false,
        }
    }

    /// Appends a candidate. Declaration order is try order.
    #[must_use]
    pub fn or(mut self, child: impl CommandArgument + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Additionally binds the winning value under this combinator's own
    /// name, so callers can read one unified key regardless of which
    /// candidate matched.
    #[must_use]
    pub const fn reporting_under_own_name(mut self) -> Self {
        self.report_under_own_name = true;
        self
    }
}

impl CommandArgument for FirstOfArgument {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(
        &self,
        input: &CommandInput,
        ctx: &mut CommandContext,
        reader: &mut ArgsReader<'_>,
    ) -> Result<(), ParseError> {
        let checkpoint = reader.checkpoint();
        let snapshot = ctx.snapshot();

        // Deepest failure wins; ties go to the earlier declared candidate.
        let mut best: Option<(usize, ParseError)> = None;

        for child in &self.children {
            match child.parse(input, ctx, reader) {
                Ok(()) => {
                    if self.report_under_own_name {
                        if let Some(value) = ctx.get(child.name()).cloned() {
                            ctx.put(&self.name, value);
                        }
                    }
                    return Ok(());
                }
                Err(failure) => {
                    let consumed = reader.position() - checkpoint.position();
                    reader.reset(checkpoint);
                    ctx.restore(&snapshot);
                    if best.as_ref().is_none_or(|(depth, _)| consumed > *depth) {
                        best = Some((consumed, failure));
                    }
                }
            }
        }

        match best {
            Some((_, failure)) => Err(failure),
            None => Err(self.missing_argument()),
        }
    }

    fn complete(
        &self,
        input: &CommandInput,
        ctx: &CommandContext,
        reader: &ArgsReader<'_>,
    ) -> Vec<String> {
        // Completions are speculative: every candidate is asked against the
        // same reader state, since at most one will ultimately match.
        let mut candidates = Vec::new();
        for child in &self.children {
            candidates.extend(child.complete(input, ctx, reader));
        }
        dedup_candidates(candidates)
    }
}
