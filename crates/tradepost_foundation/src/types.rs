//! Type descriptors for diagnostics and schema checks.

use std::fmt;

/// Type descriptor for values flowing through a command context.
///
/// Used in diagnostics and to enforce that the type bound to a context key
/// never changes within one command's schema.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean type (literal presence flags).
    Bool,
    /// 64-bit signed integer.
    Int,
    /// String type.
    String,
    /// Reference to a live domain object.
    ObjectRef,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::String => "string",
            Self::ObjectRef => "object-ref",
        };
        write!(f, "{name}")
    }
}
