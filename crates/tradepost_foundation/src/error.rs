//! Error types for the Tradepost system.
//!
//! Uses `thiserror` for ergonomic error definition. Parse failures are a
//! separate, recoverable type owned by the command engine; the errors here
//! cover everything that surfaces at the dispatch boundary and below.

use thiserror::Error;

use crate::types::Type;

/// Convenience alias for results using the system [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tradepost operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a missing-permission error.
    #[must_use]
    pub fn no_permission(permission: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoPermission {
            permission: permission.into(),
        })
    }

    /// Creates an unknown-command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a missing-context-value error.
    #[must_use]
    pub fn missing_value(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingValue { key: key.into() })
    }

    /// Creates a context type mismatch error.
    #[must_use]
    pub fn type_mismatch(key: impl Into<String>, expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            key: key.into(),
            expected,
            actual,
        })
    }

    /// Creates an invalid-input error from a user-facing message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Invalid(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The sender lacks the permission required by a command.
    #[error("missing permission: {permission}")]
    NoPermission {
        /// The permission node that was required.
        permission: String,
    },

    /// No command is registered under the given name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required context value was absent.
    #[error("missing context value: {key}")]
    MissingValue {
        /// The context key that was looked up.
        key: String,
    },

    /// A context value had a different type than requested.
    #[error("type mismatch for '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// The context key that was looked up.
        key: String,
        /// The requested type.
        expected: Type,
        /// The type actually stored.
        actual: Type,
    },

    /// User input was rejected (e.g. a command-line parse failure).
    #[error("{0}")]
    Invalid(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
