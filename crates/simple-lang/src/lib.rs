//! SIMPLE: one AST, three semantics.
//!
//! ```text
//! AST (simple-types)
//!  ├─ simple-reduce  → trace + final environment   (small-step)
//!  ├─ simple-eval    → final environment           (big-step)
//!  └─ simple-codegen → Rust source                 (denotational)
//! ```
//!
//! This crate re-exports the engines and adds JSON loading for programs,
//! environments and machine configuration.

mod load;

pub use load::{load_config, load_environment, load_program, LoadError};

pub use simple_codegen::{compile, Program, ToSource};
pub use simple_eval::{run as evaluate, EvaluateExpression, EvaluateStatement};
pub use simple_reduce::{
    ExpressionMachine, Machine, MachineConfig, MachineError, MachineResult, ReduceExpression,
    ReduceStatement,
};
pub use simple_types::{ops, Environment, Expression, Result, SemanticsError, Statement, Variable};
