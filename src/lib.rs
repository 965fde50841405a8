//! Tradepost - Command parsing and tab completion for an interactive shop shell
//!
//! This crate re-exports all layers of the Tradepost system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tradepost_runtime    — Shops, command set, dispatcher, REPL
//! Layer 1: tradepost_command    — Argument parsing and completion engine
//! Layer 0: tradepost_foundation — Core types (Value, ObjectId, Error)
//! ```

pub use tradepost_command as command;
pub use tradepost_foundation as foundation;
pub use tradepost_runtime as runtime;
