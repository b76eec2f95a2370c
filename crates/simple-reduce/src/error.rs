//! Machine error types.

use simple_types::SemanticsError;
use thiserror::Error;

/// Errors that stop a reduction machine.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The rewrite itself failed.
    #[error(transparent)]
    Semantics(#[from] SemanticsError),

    /// Writing a trace line failed.
    #[error("trace sink failed: {0}")]
    Sink(#[from] std::io::Error),

    /// The configured step limit ran out before reaching a terminal form.
    #[error("step limit of {0} exceeded")]
    StepLimitExceeded(u64),
}

/// Machine result type alias.
pub type MachineResult<T> = Result<T, MachineError>;
