//! Command-argument parsing and tab-completion engine.
//!
//! This crate turns an already-tokenized command line into strongly-typed
//! values bound into a lookup context, and produces completion suggestions
//! for partially-typed input along the same walk.
//!
//! # Architecture
//!
//! ```text
//! "settradeperm bakery -"
//!          │  (tokenized by the dispatcher)
//!          ▼
//! ┌─────────────────┐
//! │   ARGS READER   │  → cursor over ["bakery", "-"], checkpoint/rewind
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ARGUMENT LIST  │  → ShopArgument, Optional(FirstOf("?", "-", perm))
//! │  (parse walk)   │    each pulls tokens, writes a typed value
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    CONTEXT      │  → { shop: #3, "-": true }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   EXECUTOR      │  → domain logic reads typed values back out
//! └─────────────────┘
//! ```
//!
//! The completion path walks the same argument list, but instead of
//! committing values it asks the argument whose span covers the cursor
//! token for candidate replacements.
//!
//! # Modules
//!
//! - [`reader`] - Cursor over the token sequence with checkpoint/rewind
//! - [`context`] - Ordered, typed key-value store populated during a parse
//! - [`input`] - Invocation metadata (sender, permissions, ambient target)
//! - [`error`] - The recoverable parse failure taxonomy
//! - [`argument`] - The [`CommandArgument`] abstraction
//! - [`arguments`] - Primitive arguments (integer, string, literal)
//! - [`combinators`] - Optional, FirstOf, and Fallback composition
//! - [`command`] - Binds a name, permission, and argument list together
//! - [`text`] - Identifier normalization shared by literals and lookups

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod argument;
pub mod arguments;
pub mod combinators;
pub mod command;
pub mod context;
pub mod error;
pub mod input;
pub mod reader;
pub mod text;

pub use argument::CommandArgument;
pub use arguments::{IntegerArgument, LiteralArgument, StringArgument};
pub use combinators::{FallbackArgument, FirstOfArgument, OptionalArgument};
pub use command::{Command, CommandExecutor};
pub use context::{CommandContext, ContextSnapshot};
pub use error::ParseError;
pub use input::CommandInput;
pub use reader::{ArgsReader, Checkpoint, EndOfInput};
