//! AST node types for the SIMPLE language.
//!
//! Programs are built directly as values of these types; there is no surface
//! parser. Nodes are immutable trees: every engine produces new trees instead
//! of rewriting in place. Recursive children are boxed to keep enum sizes
//! reasonable.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Variables
// ══════════════════════════════════════════════════════════════════════════════

/// A variable name, used both in expressions and as an [`Environment`] key.
///
/// [`Environment`]: crate::Environment
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self { name }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// A side-effect-free expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    // ── Literals ──
    /// `42`
    Number(i64),
    /// `true` / `false`
    Boolean(bool),

    // ── Operators ──
    /// `left + right`
    Add(Box<Expression>, Box<Expression>),
    /// `left * right`
    Multiply(Box<Expression>, Box<Expression>),
    /// `left < right`
    LessThan(Box<Expression>, Box<Expression>),

    // ── References ──
    /// `x`
    Variable(Variable),
}

impl Expression {
    pub fn number(value: i64) -> Self {
        Self::Number(value)
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: Expression, right: Expression) -> Self {
        Self::Multiply(Box::new(left), Box::new(right))
    }

    pub fn less_than(left: Expression, right: Expression) -> Self {
        Self::LessThan(Box::new(left), Box::new(right))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    /// `false` only for the terminal literals `Number` and `Boolean`.
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Self::Number(_) | Self::Boolean(_))
    }

    /// Short name of the node kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Boolean(_) => "Boolean",
            Self::Add(..) => "Add",
            Self::Multiply(..) => "Multiply",
            Self::LessThan(..) => "LessThan",
            Self::Variable(_) => "Variable",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Add(left, right) => write!(f, "{left} + {right}"),
            Self::Multiply(left, right) => write!(f, "{left} * {right}"),
            Self::LessThan(left, right) => write!(f, "{left} < {right}"),
            Self::Variable(var) => write!(f, "{var}"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// A statement. Only [`Statement::Assign`] changes the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// `do-nothing` — successful completion.
    DoNothing,
    /// `x = expr`
    Assign {
        variable: Variable,
        expression: Expression,
    },
    /// `if cond {consequence} else {alternative}`
    If {
        condition: Expression,
        consequence: Box<Statement>,
        alternative: Box<Statement>,
    },
    /// `first; second`
    Sequence {
        first: Box<Statement>,
        second: Box<Statement>,
    },
    /// `while cond {body}`
    While {
        condition: Expression,
        body: Box<Statement>,
    },
}

impl Statement {
    pub fn do_nothing() -> Self {
        Self::DoNothing
    }

    pub fn assign(variable: impl Into<Variable>, expression: Expression) -> Self {
        Self::Assign {
            variable: variable.into(),
            expression,
        }
    }

    pub fn if_else(condition: Expression, consequence: Statement, alternative: Statement) -> Self {
        Self::If {
            condition,
            consequence: Box::new(consequence),
            alternative: Box::new(alternative),
        }
    }

    pub fn sequence(first: Statement, second: Statement) -> Self {
        Self::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn while_loop(condition: Expression, body: Statement) -> Self {
        Self::While {
            condition,
            body: Box::new(body),
        }
    }

    /// `false` only for [`Statement::DoNothing`].
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Self::DoNothing)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoNothing => f.write_str("do-nothing"),
            Self::Assign {
                variable,
                expression,
            } => write!(f, "{variable} = {expression}"),
            Self::If {
                condition,
                consequence,
                alternative,
            } => write!(f, "if {condition} {{{consequence}}} else {{{alternative}}}"),
            Self::Sequence { first, second } => write!(f, "{first}; {second}"),
            Self::While { condition, body } => write!(f, "while {condition} {{{body}}}"),
        }
    }
}
