//! Program assembly.
//!
//! Wraps a translated statement into a complete Rust source file:
//! 1. Import `BTreeMap`
//! 2. Start `main` from an empty environment
//! 3. Apply the statement closure
//! 4. Print the final environment as `{name: value, ...}`, in key order

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use simple_types::ast::{Expression, Statement};

use crate::expr::emit_expr;
use crate::stmt::emit_stmt;
use crate::types::ENV_TYPE;

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Denotational translation into Rust source text.
///
/// Output is a pure function of the tree: the same input always yields the
/// same characters.
pub trait ToSource {
    fn to_source(&self) -> String;
}

impl ToSource for Expression {
    fn to_source(&self) -> String {
        let mut out = String::new();
        emit_expr(self, &mut out);
        out
    }
}

impl ToSource for Statement {
    fn to_source(&self) -> String {
        let mut out = String::new();
        emit_stmt(self, &mut out);
        out
    }
}

/// Translate a statement into a standalone program.
pub fn compile(statement: &Statement) -> String {
    Program::new(statement.clone()).to_source()
}

// ══════════════════════════════════════════════════════════════════════════════
// Program
// ══════════════════════════════════════════════════════════════════════════════

/// A top-level statement that translates to a runnable `main`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub statement: Statement,
}

impl Program {
    pub fn new(statement: Statement) -> Self {
        Self { statement }
    }

    /// Hex SHA-256 of the generated source.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.to_source().as_bytes());
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl ToSource for Program {
    #[tracing::instrument(level = "debug", skip_all)]
    fn to_source(&self) -> String {
        let mut out = String::new();
        out.push_str("use std::collections::BTreeMap;\n\n");
        out.push_str("fn main() {\n");
        out.push_str(&format!("    let e: {ENV_TYPE} = BTreeMap::new();\n"));
        out.push_str("    let e = (");
        emit_stmt(&self.statement, &mut out);
        out.push_str(")(e);\n");
        out.push_str(
            r#"    let bindings: Vec<String> = e.iter().map(|(k, v)| format!("{k}: {v}")).collect();"#,
        );
        out.push('\n');
        out.push_str(r#"    println!("{{{}}}", bindings.join(", "));"#);
        out.push_str("\n}\n");
        tracing::debug!(bytes = out.len(), "generated program");
        out
    }
}
