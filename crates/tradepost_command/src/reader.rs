//! Cursor over the token sequence with checkpoint/rewind.
//!
//! A reader is created once per parse or completion attempt and discarded
//! afterwards. Checkpoints are plain index values, so rewinding restores a
//! saved cursor exactly with no token duplication or loss.

use thiserror::Error;

/// Signal raised by [`ArgsReader::next`] when no token remains.
///
/// This never surfaces past a primitive argument: primitives translate it
/// into a missing-argument failure carrying their own name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("end of input")]
pub struct EndOfInput;

/// A saved cursor position.
///
/// Checkpoints are copyable values, not references into reader internals.
/// A checkpoint is only meaningful for the reader instance that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
}

impl Checkpoint {
    /// The cursor position this checkpoint restores to.
    #[must_use]
    pub const fn position(self) -> usize {
        self.pos
    }
}

/// Cursor over an ordered, immutable sequence of command-line tokens.
#[derive(Debug)]
pub struct ArgsReader<'t> {
    tokens: &'t [&'t str],
    pos: usize,
}

impl<'t> ArgsReader<'t> {
    /// Creates a reader positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [&'t str]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the total number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the reader holds no tokens at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Returns true if at least one token remains.
    ///
    /// This is the only safe guard before calling [`Self::next`].
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.pos).copied()
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns [`EndOfInput`] if the cursor is already past the last token.
    pub fn next(&mut self) -> Result<&'t str, EndOfInput> {
        let token = self.tokens.get(self.pos).copied().ok_or(EndOfInput)?;
        self.pos += 1;
        Ok(token)
    }

    /// Saves the current cursor position.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint { pos: self.pos }
    }

    /// Restores the cursor to a previously saved position.
    pub const fn reset(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
    }
}
