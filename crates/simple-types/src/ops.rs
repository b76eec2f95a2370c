//! Primitive operations applied when a node collapses to a terminal value.
//!
//! Both the reduction and the evaluation engine call these once their
//! operands are terminal, so the two semantics share one definition of
//! arithmetic, comparison and truthiness.

use crate::ast::Expression;
use crate::error::SemanticsError;
use crate::Result;

/// `left + right` on two Numbers.
pub fn add(left: &Expression, right: &Expression) -> Result<Expression> {
    arith(left, right, i64::checked_add, "+")
}

/// `left * right` on two Numbers.
pub fn multiply(left: &Expression, right: &Expression) -> Result<Expression> {
    arith(left, right, i64::checked_mul, "*")
}

fn arith(
    left: &Expression,
    right: &Expression,
    op: fn(i64, i64) -> Option<i64>,
    symbol: &str,
) -> Result<Expression> {
    match (left, right) {
        (Expression::Number(a), Expression::Number(b)) => op(*a, *b)
            .map(Expression::Number)
            .ok_or_else(|| SemanticsError::ArithmeticOverflow(format!("{a} {symbol} {b}"))),
        _ => Err(SemanticsError::TypeMismatch(format!(
            "cannot apply '{symbol}' to {} and {}",
            left.kind_name(),
            right.kind_name()
        ))),
    }
}

/// `left < right` on two Numbers.
pub fn less_than(left: &Expression, right: &Expression) -> Result<Expression> {
    match (left, right) {
        (Expression::Number(a), Expression::Number(b)) => Ok(Expression::Boolean(a < b)),
        (Expression::Boolean(_), Expression::Boolean(_)) => Err(SemanticsError::TypeMismatch(
            format!("cannot compare Booleans {left} and {right}"),
        )),
        _ => Err(SemanticsError::UnknownType(format!(
            "cannot compare {} and {}",
            left.kind_name(),
            right.kind_name()
        ))),
    }
}

/// Truth value of a terminal condition.
pub fn truthiness(condition: &Expression) -> Result<bool> {
    match condition {
        Expression::Boolean(b) => Ok(*b),
        other => Err(SemanticsError::TypeMismatch(format!(
            "condition must be a Boolean, got {} {other}",
            other.kind_name()
        ))),
    }
}
