//! Shared types for SIMPLE.
//!
//! This crate defines the expression and statement AST, the variable
//! environment, the error taxonomy and the primitive operations used by
//! every engine. The engines themselves (reduction, evaluation,
//! translation) live in their own crates as traits over these types.

mod env;
mod error;
pub mod ast;
pub mod ops;

pub use ast::{Expression, Statement, Variable};
pub use env::Environment;
pub use error::SemanticsError;

/// Result type used throughout SIMPLE.
pub type Result<T> = std::result::Result<T, SemanticsError>;
