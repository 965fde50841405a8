//! Cross-layer integration tests for Tradepost.
//!
//! Tests that drive the full stack: dispatcher, command set, shop registry,
//! and the engine underneath them.

mod properties;
mod shell;
