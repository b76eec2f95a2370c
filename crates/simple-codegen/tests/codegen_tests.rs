//! Integration tests for the SIMPLE code generator.
//!
//! Tests validate:
//! - Golden output for expressions, statements and whole programs
//! - Compositional nesting (a parent embeds its children's exact output)
//! - Deterministic output (same input, same characters, same fingerprint)

use pretty_assertions::assert_eq;
use simple_codegen::{compile, Program, ToSource};
use simple_types::{Expression, Statement};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn num(n: i64) -> Expression {
    Expression::number(n)
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

/// `x = 1; while x < 5 {x = x * 3}`
fn tripling_program() -> Statement {
    Statement::sequence(
        Statement::assign("x", num(1)),
        Statement::while_loop(
            Expression::less_than(var("x"), num(5)),
            Statement::assign("x", Expression::multiply(var("x"), num(3))),
        ),
    )
}

// ══════════════════════════════════════════════════════════════════════════════
// Golden output
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn add_golden() {
    assert_eq!(
        Expression::add(num(1), num(2)).to_source(),
        r#"|e: &BTreeMap<String, String>| -> String { let l: i64 = (|_: &BTreeMap<String, String>| -> String { String::from("1") })(e).parse().unwrap(); let r: i64 = (|_: &BTreeMap<String, String>| -> String { String::from("2") })(e).parse().unwrap(); l.checked_add(r).expect("arithmetic overflow").to_string() }"#
    );
}

#[test]
fn multiply_golden() {
    assert_eq!(
        Expression::multiply(var("x"), Expression::add(num(2), num(40))).to_source(),
        r#"|e: &BTreeMap<String, String>| -> String { let l: i64 = (|e: &BTreeMap<String, String>| -> String { e["x"].clone() })(e).parse().unwrap(); let r: i64 = (|e: &BTreeMap<String, String>| -> String { let l: i64 = (|_: &BTreeMap<String, String>| -> String { String::from("2") })(e).parse().unwrap(); let r: i64 = (|_: &BTreeMap<String, String>| -> String { String::from("40") })(e).parse().unwrap(); l.checked_add(r).expect("arithmetic overflow").to_string() })(e).parse().unwrap(); l.checked_mul(r).expect("arithmetic overflow").to_string() }"#
    );
}

#[test]
fn assign_golden() {
    assert_eq!(
        Statement::assign("x", num(42)).to_source(),
        r#"|mut e: BTreeMap<String, String>| -> BTreeMap<String, String> { let v = (|_: &BTreeMap<String, String>| -> String { String::from("42") })(&e); e.insert(String::from("x"), v); e }"#
    );
}

#[test]
fn program_golden() {
    let expected = concat!(
        "use std::collections::BTreeMap;\n",
        "\n",
        "fn main() {\n",
        "    let e: BTreeMap<String, String> = BTreeMap::new();\n",
        r#"    let e = (|e: BTreeMap<String, String>| -> BTreeMap<String, String> { (|mut e: BTreeMap<String, String>| -> BTreeMap<String, String> { while (|e: &BTreeMap<String, String>| -> String { let l: i64 = (|e: &BTreeMap<String, String>| -> String { e["x"].clone() })(e).parse().unwrap(); let r: i64 = (|_: &BTreeMap<String, String>| -> String { String::from("5") })(e).parse().unwrap(); (l < r).to_string() })(&e).parse::<bool>().unwrap() { e = (|mut e: BTreeMap<String, String>| -> BTreeMap<String, String> { let v = (|e: &BTreeMap<String, String>| -> String { let l: i64 = (|e: &BTreeMap<String, String>| -> String { e["x"].clone() })(e).parse().unwrap(); let r: i64 = (|_: &BTreeMap<String, String>| -> String { String::from("3") })(e).parse().unwrap(); l.checked_mul(r).expect("arithmetic overflow").to_string() })(&e); e.insert(String::from("x"), v); e })(e); } e })((|mut e: BTreeMap<String, String>| -> BTreeMap<String, String> { let v = (|_: &BTreeMap<String, String>| -> String { String::from("1") })(&e); e.insert(String::from("x"), v); e })(e)) })(e);"#,
        "\n",
        r#"    let bindings: Vec<String> = e.iter().map(|(k, v)| format!("{k}: {v}")).collect();"#,
        "\n",
        r#"    println!("{{{}}}", bindings.join(", "));"#,
        "\n",
        "}\n",
    );
    assert_eq!(Program::new(tripling_program()).to_source(), expected);
}

// ══════════════════════════════════════════════════════════════════════════════
// Composition
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn binary_embeds_operand_sources_left_then_right() {
    let left = Expression::multiply(num(6), var("y"));
    let right = Expression::less_than(num(1), num(2));
    let src = Expression::add(left.clone(), right.clone()).to_source();
    let l = src.find(&left.to_source()).expect("left operand embedded");
    let r = src.rfind(&right.to_source()).expect("right operand embedded");
    assert!(l < r);
}

#[test]
fn if_embeds_both_branches() {
    let then_branch = Statement::assign("a", num(1));
    let else_branch = Statement::assign("b", num(2));
    let src = Statement::if_else(var("c"), then_branch.clone(), else_branch.clone()).to_source();
    assert!(src.contains(&then_branch.to_source()));
    assert!(src.contains(&else_branch.to_source()));
    assert!(src.contains(".parse::<bool>().unwrap()"));
}

#[test]
fn while_emits_native_loop() {
    let body = Statement::assign("n", Expression::add(var("n"), num(1)));
    let cond = Expression::less_than(var("n"), num(10));
    let src = Statement::while_loop(cond.clone(), body.clone()).to_source();
    assert!(src.starts_with("|mut e: BTreeMap<String, String>| -> BTreeMap<String, String> { while ("));
    assert!(src.contains(&format!("while ({})(&e)", cond.to_source())));
    assert!(src.contains(&format!("e = ({})(e);", body.to_source())));
}

#[test]
fn compile_wraps_statement_in_program() {
    let stmt = Statement::assign("z", Expression::boolean(false));
    let src = compile(&stmt);
    assert!(src.starts_with("use std::collections::BTreeMap;"));
    assert!(src.contains(&stmt.to_source()));
    assert!(src.contains("fn main()"));
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn output_is_deterministic_100_iterations() {
    let first = Program::new(tripling_program());
    let first_src = first.to_source();
    let first_fp = first.fingerprint();
    for i in 0..100 {
        let program = Program::new(tripling_program());
        assert_eq!(program.to_source(), first_src, "source differs at iteration {i}");
        assert_eq!(program.fingerprint(), first_fp, "fingerprint differs at iteration {i}");
    }
}

#[test]
fn different_programs_have_different_fingerprints() {
    let a = Program::new(Statement::assign("x", num(1)));
    let b = Program::new(Statement::assign("x", num(2)));
    assert_ne!(a.fingerprint(), b.fingerprint());
}
