//! SIMPLE small-step reducer.
//!
//! Gives programs meaning as a sequence of single-redex rewrites. The
//! [`ReduceExpression`] and [`ReduceStatement`] traits implement one rewrite;
//! [`ExpressionMachine`] and [`Machine`] drive them to a terminal form and
//! trace every intermediate state.

pub mod config;
pub mod error;
pub mod machine;
pub mod reduce;

pub use config::MachineConfig;
pub use error::{MachineError, MachineResult};
pub use machine::{ExpressionMachine, Machine};
pub use reduce::{ReduceExpression, ReduceStatement};
