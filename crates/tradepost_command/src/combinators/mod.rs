//! Arguments built by composing other arguments.
//!
//! Every combinator wraps child attempts in checkpoint/snapshot → attempt →
//! rewind/restore-on-failure, so a failing branch always leaves the reader
//! and context exactly as it found them. Combinators nest generically:
//! `Optional(FirstOf(Fallback(..), ..))` needs no special cases.

pub mod fallback;
pub mod first_of;
pub mod optional;

pub use fallback::FallbackArgument;
pub use first_of::FirstOfArgument;
pub use optional::OptionalArgument;
