//! Integration tests for the command engine layer.
//!
//! Tests for the token reader, the parse context, the primitive arguments,
//! the combinators, and whole-command parsing and completion.

mod context;
mod primitives;
mod reader;
