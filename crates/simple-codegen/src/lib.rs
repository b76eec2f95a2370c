//! SIMPLE code generator: translates the AST into Rust source.
//!
//! # Architecture
//!
//! Translation is compositional. Each node becomes an immediately-invocable
//! closure literal, and a parent node's closure calls its children's closures
//! by textual nesting:
//!
//! - expressions: `|e: &BTreeMap<String, String>| -> String { ... }`
//! - statements: `|e: BTreeMap<String, String>| -> BTreeMap<String, String> { ... }`
//!
//! [`Program`] wraps a statement into a standalone file whose `main` starts
//! from an empty environment and prints the final one. When compiled and run
//! it prints exactly what the evaluator computes for the same program.

pub mod compiler;
pub mod expr;
pub mod stmt;
pub mod types;

pub use compiler::{compile, Program, ToSource};
