//! The recoverable parse failure taxonomy.
//!
//! Parse failures are ordinary values: they become a user-visible message at
//! the command boundary, never a fatal condition. Completion failures do not
//! exist at all — the completion walk degrades to empty suggestions instead.

use thiserror::Error;

/// Why an argument (or the whole command line) failed to parse.
///
/// Each variant names the argument that raised it so error messages can
/// point at the exact position in the schema.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token remained where an argument required one.
    #[error("missing argument: {name}")]
    MissingArgument {
        /// The argument that needed a token.
        name: String,
    },

    /// A token was present but not convertible or recognized.
    #[error("invalid argument '{raw}' for {name}")]
    InvalidArgument {
        /// The argument that rejected the token.
        name: String,
        /// The offending token, echoed back verbatim.
        raw: String,
    },

    /// Tokens remained after every argument parsed successfully.
    #[error("too many arguments: unexpected '{first_unparsed}'")]
    TooManyArguments {
        /// The first token nothing consumed.
        first_unparsed: String,
    },
}

impl ParseError {
    /// The name of the argument this failure points at, if any.
    #[must_use]
    pub fn argument_name(&self) -> Option<&str> {
        match self {
            Self::MissingArgument { name } | Self::InvalidArgument { name, .. } => Some(name),
            Self::TooManyArguments { .. } => None,
        }
    }
}
