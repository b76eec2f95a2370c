//! Closure signatures shared by every generated fragment.
//!
//! The generated environment is a `BTreeMap<String, String>`: variable names
//! are raw string keys and values are rendered terminals (`"42"`, `"true"`).
//! It is deliberately not the structured [`simple_types::Environment`]:
//! generated code runs in its own process with no access to the AST types.

/// Type of the generated environment.
pub const ENV_TYPE: &str = "BTreeMap<String, String>";

/// Expression closure that reads the environment.
pub const EXPR_SIG: &str = "|e: &BTreeMap<String, String>| -> String";

/// Expression closure that ignores the environment (literals).
pub const LITERAL_SIG: &str = "|_: &BTreeMap<String, String>| -> String";

/// Statement closure that passes the environment through unchanged.
pub const STMT_SIG: &str = "|e: BTreeMap<String, String>| -> BTreeMap<String, String>";

/// Statement closure that writes to the environment.
pub const STMT_MUT_SIG: &str = "|mut e: BTreeMap<String, String>| -> BTreeMap<String, String>";

/// Panic message used by generated arithmetic.
pub const OVERFLOW_MSG: &str = "arithmetic overflow";
