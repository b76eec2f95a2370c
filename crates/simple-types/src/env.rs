//! Variable environment shared by the reduction and evaluation engines.

use crate::ast::{Expression, Variable};
use crate::error::SemanticsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from [`Variable`] to its bound [`Expression`].
///
/// Keys are unique and kept in name order, so rendering and iteration are
/// deterministic. The caller owns the environment for the whole run; engines
/// borrow it and `Assign` updates it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: BTreeMap<Variable, Expression>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `variable`, replacing any previous value.
    pub fn set(&mut self, variable: impl Into<Variable>, value: Expression) {
        self.bindings.insert(variable.into(), value);
    }

    /// Look up a binding.
    pub fn get(&self, variable: &Variable) -> Option<&Expression> {
        self.bindings.get(variable)
    }

    /// Look up a binding, failing with [`SemanticsError::UnboundVariable`].
    pub fn lookup(&self, variable: &Variable) -> Result<&Expression, SemanticsError> {
        self.get(variable)
            .ok_or_else(|| SemanticsError::UnboundVariable(variable.name.clone()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Expression)> {
        self.bindings.iter()
    }
}

impl<V: Into<Variable>> FromIterator<(V, Expression)> for Environment {
    fn from_iter<I: IntoIterator<Item = (V, Expression)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Renders as `{x: 1, y: true}`; generated programs print the same form.
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (variable, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{variable}: {value}")?;
        }
        f.write_str("}")
    }
}
