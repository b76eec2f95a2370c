//! One-step rewriting rules.
//!
//! Each call rewrites exactly one redex: the leftmost reducible child is
//! reduced first, and a node collapses only once all of its children are
//! terminal (call-by-value).

use simple_types::ast::{Expression, Statement};
use simple_types::{ops, Environment, Result, SemanticsError};

/// Small-step reduction of an expression. Never mutates the environment.
pub trait ReduceExpression {
    /// Rewrite the leftmost redex. Fails on a terminal literal.
    fn reduce(&self, env: &Environment) -> Result<Expression>;
}

/// Small-step reduction of a statement. Only `Assign` writes to `env`.
pub trait ReduceStatement {
    /// Rewrite the leftmost redex. Fails on `DoNothing`.
    fn reduce(&self, env: &mut Environment) -> Result<Statement>;
}

impl ReduceExpression for Expression {
    fn reduce(&self, env: &Environment) -> Result<Expression> {
        match self {
            Expression::Number(_) | Expression::Boolean(_) => Err(SemanticsError::NotReducible(
                format!("{} {self}", self.kind_name()),
            )),
            Expression::Add(left, right) => {
                reduce_binary(left, right, env, Expression::Add, ops::add)
            }
            Expression::Multiply(left, right) => {
                reduce_binary(left, right, env, Expression::Multiply, ops::multiply)
            }
            Expression::LessThan(left, right) => {
                reduce_binary(left, right, env, Expression::LessThan, ops::less_than)
            }
            Expression::Variable(var) => env.lookup(var).cloned(),
        }
    }
}

fn reduce_binary(
    left: &Expression,
    right: &Expression,
    env: &Environment,
    rebuild: fn(Box<Expression>, Box<Expression>) -> Expression,
    collapse: fn(&Expression, &Expression) -> Result<Expression>,
) -> Result<Expression> {
    if left.is_reducible() {
        Ok(rebuild(Box::new(left.reduce(env)?), Box::new(right.clone())))
    } else if right.is_reducible() {
        Ok(rebuild(Box::new(left.clone()), Box::new(right.reduce(env)?)))
    } else {
        collapse(left, right)
    }
}

impl ReduceStatement for Statement {
    fn reduce(&self, env: &mut Environment) -> Result<Statement> {
        match self {
            Statement::DoNothing => Err(SemanticsError::NotReducible("DoNothing".into())),

            Statement::Assign {
                variable,
                expression,
            } => {
                if expression.is_reducible() {
                    Ok(Statement::Assign {
                        variable: variable.clone(),
                        expression: expression.reduce(env)?,
                    })
                } else {
                    env.set(variable.clone(), expression.clone());
                    Ok(Statement::DoNothing)
                }
            }

            Statement::If {
                condition,
                consequence,
                alternative,
            } => {
                if condition.is_reducible() {
                    Ok(Statement::If {
                        condition: condition.reduce(env)?,
                        consequence: consequence.clone(),
                        alternative: alternative.clone(),
                    })
                } else if ops::truthiness(condition)? {
                    Ok((**consequence).clone())
                } else {
                    Ok((**alternative).clone())
                }
            }

            Statement::Sequence { first, second } => match first.as_ref() {
                Statement::DoNothing => Ok((**second).clone()),
                _ => Ok(Statement::Sequence {
                    first: Box::new(first.reduce(env)?),
                    second: second.clone(),
                }),
            },

            // Unrolling never looks at the condition; the generated `If`
            // decides on a later step.
            Statement::While { condition, body } => Ok(Statement::If {
                condition: condition.clone(),
                consequence: Box::new(Statement::Sequence {
                    first: body.clone(),
                    second: Box::new(self.clone()),
                }),
                alternative: Box::new(Statement::DoNothing),
            }),
        }
    }
}
