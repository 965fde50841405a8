//! Primitive arguments that consume exactly one token.

pub mod integer;
pub mod literal;
pub mod string;

pub use integer::IntegerArgument;
pub use literal::LiteralArgument;
pub use string::StringArgument;
