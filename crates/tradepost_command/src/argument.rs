//! The argument abstraction every parsing unit implements.

use crate::context::CommandContext;
use crate::error::ParseError;
use crate::input::CommandInput;
use crate::reader::ArgsReader;

/// A named, typed parsing unit.
///
/// An argument consumes zero or more tokens from the reader and binds a
/// typed value into the context, or fails with a [`ParseError`]. It also
/// independently produces completion suggestions for a partial token.
///
/// Implementations are immutable and stateless per call; they operate only
/// on the borrowed reader and context. A failing argument may leave the
/// reader advanced — the enclosing combinator (or command) owns the
/// checkpoint and rewinds before retrying a sibling branch.
pub trait CommandArgument {
    /// The argument's name, unique within the owning command's list. Doubles
    /// as the context key it binds.
    fn name(&self) -> &str;

    /// Consumes tokens from `reader` and binds the parsed value into `ctx`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming this argument when the input cannot
    /// be parsed.
    fn parse(
        &self,
        input: &CommandInput,
        ctx: &mut CommandContext,
        reader: &mut ArgsReader<'_>,
    ) -> Result<(), ParseError>;

    /// Produces completion candidates for the partial token under the
    /// cursor (`reader.peek()`, or the empty string when absent).
    ///
    /// Candidate order is significant and must be stable for identical
    /// input. Completion never mutates shared state — the reader is only
    /// borrowed for peeking.
    fn complete(
        &self,
        input: &CommandInput,
        ctx: &CommandContext,
        reader: &ArgsReader<'_>,
    ) -> Vec<String>;

    /// A missing-argument failure naming this argument.
    fn missing_argument(&self) -> ParseError {
        ParseError::MissingArgument {
            name: self.name().to_string(),
        }
    }

    /// An invalid-argument failure naming this argument and echoing the
    /// offending token.
    fn invalid_argument(&self, raw: &str) -> ParseError {
        ParseError::InvalidArgument {
            name: self.name().to_string(),
            raw: raw.to_string(),
        }
    }
}

/// Removes duplicate candidates while preserving first-occurrence order.
pub(crate) fn dedup_candidates(candidates: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
