//! SIMPLE big-step evaluator.
//!
//! Gives programs meaning directly as a final value or environment, by
//! structural recursion over the AST. No intermediate states are exposed;
//! loops run as native host loops.

pub mod evaluator;

pub use evaluator::{run, EvaluateExpression, EvaluateStatement};
