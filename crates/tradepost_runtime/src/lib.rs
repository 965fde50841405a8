//! The interactive shell around the command engine.
//!
//! This crate supplies the domain the engine operates on (a registry of
//! trading shops), the arguments that resolve tokens against it, the
//! built-in command set, a dispatcher that routes raw lines, and a rustyline
//! REPL with registry-driven tab completion.
//!
//! # Modules
//!
//! - [`shop`] - Shops and the shared [`ShopRegistry`]
//! - [`session`] - Per-sender state (permissions, current target)
//! - [`arguments`] - Shop-resolving arguments and the target fallback
//! - [`commands`] - The built-in command set
//! - [`dispatcher`] - Line tokenization and command routing
//! - [`editor`] - rustyline wiring
//! - [`repl`] - The interactive loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arguments;
pub mod commands;
pub mod dispatcher;
pub mod editor;
pub mod repl;
pub mod session;
pub mod shop;

pub use arguments::{ShopArgument, target_shop_fallback};
pub use dispatcher::CommandRegistry;
pub use repl::Repl;
pub use session::Session;
pub use shop::{Shop, ShopRegistry};
