//! Expression code generation.
//!
//! Every expression becomes a closure from `&BTreeMap<String, String>` to the
//! rendered value as a `String`. Binary operators call their operand
//! closures in place, parse the results back to `i64`, apply the operator and
//! re-render.

use std::fmt::Write;

use simple_types::ast::Expression;

use crate::types::*;

/// Emit the closure for an expression.
pub fn emit_expr(expr: &Expression, out: &mut String) {
    match expr {
        // ── Literals ──────────────────────────────────────────────────────
        Expression::Number(n) => emit_literal(&n.to_string(), out),
        Expression::Boolean(b) => emit_literal(&b.to_string(), out),

        // ── Operators ────────────────────────────────────────────────────
        Expression::Add(left, right) => {
            emit_binary(left, right, &format!("l.checked_add(r).expect({OVERFLOW_MSG:?}).to_string()"), out)
        }
        Expression::Multiply(left, right) => {
            emit_binary(left, right, &format!("l.checked_mul(r).expect({OVERFLOW_MSG:?}).to_string()"), out)
        }
        Expression::LessThan(left, right) => emit_binary(left, right, "(l < r).to_string()", out),

        // ── References ───────────────────────────────────────────────────
        // Missing keys panic, matching the fail-fast lookup of the engines.
        Expression::Variable(var) => {
            let _ = write!(out, "{EXPR_SIG} {{ e[{:?}].clone() }}", var.name);
        }
    }
}

fn emit_literal(rendered: &str, out: &mut String) {
    let _ = write!(out, "{LITERAL_SIG} {{ String::from({rendered:?}) }}");
}

/// `let l = left(e); let r = right(e); <result>`
fn emit_binary(left: &Expression, right: &Expression, result: &str, out: &mut String) {
    out.push_str(EXPR_SIG);
    out.push_str(" { let l: i64 = (");
    emit_expr(left, out);
    out.push_str(")(e).parse().unwrap(); let r: i64 = (");
    emit_expr(right, out);
    out.push_str(")(e).parse().unwrap(); ");
    out.push_str(result);
    out.push_str(" }");
}
