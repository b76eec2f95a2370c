use thiserror::Error;

/// Fatal errors raised while reducing or evaluating a program.
///
/// None of these are recovered internally. They signal misuse of the core
/// (an ill-typed program, a missing binding, reducing a finished node) and
/// propagate to whoever invoked the failing operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticsError {
    /// `reduce` called on `Number`, `Boolean` or `DoNothing`.
    #[error("cannot reduce terminal {0}")]
    NotReducible(String),

    /// Operands or conditions of the wrong type, e.g. `true < false`.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A variable was read before being assigned.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// A comparison saw an operand pair it has no rule for.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// `i64` overflow in `+` or `*`.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}
