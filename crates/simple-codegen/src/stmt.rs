//! Statement code generation.
//!
//! Every statement becomes a closure that takes the environment by value and
//! returns the updated environment, so composition is plain nesting:
//! a sequence is `second(first(e))`.

use std::fmt::Write;

use simple_types::ast::Statement;

use crate::expr::emit_expr;
use crate::types::*;

/// Emit the closure for a statement.
pub fn emit_stmt(stmt: &Statement, out: &mut String) {
    match stmt {
        Statement::DoNothing => {
            out.push_str(STMT_SIG);
            out.push_str(" { e }");
        }

        Statement::Assign {
            variable,
            expression,
        } => {
            out.push_str(STMT_MUT_SIG);
            out.push_str(" { let v = (");
            emit_expr(expression, out);
            let _ = write!(out, ")(&e); e.insert(String::from({:?}), v); e }}", variable.name);
        }

        Statement::If {
            condition,
            consequence,
            alternative,
        } => {
            out.push_str(STMT_SIG);
            out.push_str(" { if (");
            emit_expr(condition, out);
            out.push_str(")(&e).parse::<bool>().unwrap() { (");
            emit_stmt(consequence, out);
            out.push_str(")(e) } else { (");
            emit_stmt(alternative, out);
            out.push_str(")(e) } }");
        }

        Statement::Sequence { first, second } => {
            out.push_str(STMT_SIG);
            out.push_str(" { (");
            emit_stmt(second, out);
            out.push_str(")((");
            emit_stmt(first, out);
            out.push_str(")(e)) }");
        }

        // The condition is re-evaluated at the head of every iteration.
        Statement::While { condition, body } => {
            out.push_str(STMT_MUT_SIG);
            out.push_str(" { while (");
            emit_expr(condition, out);
            out.push_str(")(&e).parse::<bool>().unwrap() { e = (");
            emit_stmt(body, out);
            out.push_str(")(e); } e }");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_types::ast::Expression;

    fn emit(stmt: &Statement) -> String {
        let mut out = String::new();
        emit_stmt(stmt, &mut out);
        out
    }

    #[test]
    fn test_do_nothing() {
        assert_eq!(
            emit(&Statement::DoNothing),
            "|e: BTreeMap<String, String>| -> BTreeMap<String, String> { e }"
        );
    }

    #[test]
    fn test_sequence_runs_first_then_second() {
        let src = emit(&Statement::sequence(
            Statement::assign("a", Expression::number(1)),
            Statement::DoNothing,
        ));
        // `second(first(e))`: the DoNothing closure is applied to the result
        // of the assignment closure.
        assert!(src.starts_with(
            "|e: BTreeMap<String, String>| -> BTreeMap<String, String> { \
             (|e: BTreeMap<String, String>| -> BTreeMap<String, String> { e })((|mut e"
        ));
        assert!(src.ends_with(r#"e.insert(String::from("a"), v); e })(e)) }"#));
    }

    #[test]
    fn test_if_branches() {
        let src = emit(&Statement::if_else(
            Expression::boolean(false),
            Statement::DoNothing,
            Statement::DoNothing,
        ));
        assert_eq!(
            src,
            "|e: BTreeMap<String, String>| -> BTreeMap<String, String> { \
             if (|_: &BTreeMap<String, String>| -> String { String::from(\"false\") })(&e)\
             .parse::<bool>().unwrap() { \
             (|e: BTreeMap<String, String>| -> BTreeMap<String, String> { e })(e) } else { \
             (|e: BTreeMap<String, String>| -> BTreeMap<String, String> { e })(e) } }"
        );
    }
}
