//! Core expression and statement evaluator.

use simple_types::ast::{Expression, Statement};
use simple_types::{ops, Environment, Result};

/// Big-step evaluation of an expression to a terminal `Number` or `Boolean`.
pub trait EvaluateExpression {
    fn evaluate(&self, env: &Environment) -> Result<Expression>;
}

/// Big-step execution of a statement, updating `env` in place.
pub trait EvaluateStatement {
    fn evaluate(&self, env: &mut Environment) -> Result<()>;
}

// ══════════════════════════════════════════════════════════════════════════════
// Expression evaluation
// ══════════════════════════════════════════════════════════════════════════════

impl EvaluateExpression for Expression {
    fn evaluate(&self, env: &Environment) -> Result<Expression> {
        match self {
            Expression::Number(_) | Expression::Boolean(_) => Ok(self.clone()),

            // Left operand is always evaluated before the right one.
            Expression::Add(left, right) => ops::add(&left.evaluate(env)?, &right.evaluate(env)?),
            Expression::Multiply(left, right) => {
                ops::multiply(&left.evaluate(env)?, &right.evaluate(env)?)
            }
            Expression::LessThan(left, right) => {
                ops::less_than(&left.evaluate(env)?, &right.evaluate(env)?)
            }

            Expression::Variable(var) => {
                let bound = env.lookup(var)?;
                if bound.is_reducible() {
                    bound.evaluate(env)
                } else {
                    Ok(bound.clone())
                }
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statement execution
// ══════════════════════════════════════════════════════════════════════════════

impl EvaluateStatement for Statement {
    fn evaluate(&self, env: &mut Environment) -> Result<()> {
        match self {
            Statement::DoNothing => Ok(()),

            Statement::Assign {
                variable,
                expression,
            } => {
                let value = expression.evaluate(env)?;
                env.set(variable.clone(), value);
                Ok(())
            }

            Statement::If {
                condition,
                consequence,
                alternative,
            } => {
                if ops::truthiness(&condition.evaluate(env)?)? {
                    consequence.evaluate(env)
                } else {
                    alternative.evaluate(env)
                }
            }

            Statement::Sequence { first, second } => {
                first.evaluate(env)?;
                second.evaluate(env)
            }

            Statement::While { condition, body } => {
                let mut iterations: u64 = 0;
                while ops::truthiness(&condition.evaluate(env)?)? {
                    body.evaluate(env)?;
                    iterations += 1;
                    tracing::trace!(iterations, env = %env, "while iteration");
                }
                Ok(())
            }
        }
    }
}

/// Evaluate `statement` starting from `env` and hand back the final environment.
pub fn run(statement: &Statement, mut env: Environment) -> Result<Environment> {
    statement.evaluate(&mut env)?;
    tracing::debug!(env = %env, "evaluation finished");
    Ok(env)
}
