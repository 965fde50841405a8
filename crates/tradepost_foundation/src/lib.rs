//! Core types, values, and errors for Tradepost.
//!
//! This crate provides:
//! - [`Value`] - The tagged union produced by parsed command arguments
//! - [`Type`] - Type descriptors for diagnostics and schema checks
//! - [`ObjectId`] - Opaque identifiers for live domain objects
//! - [`Error`] - The system error type with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod types;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use id::ObjectId;
pub use types::Type;
pub use value::Value;
