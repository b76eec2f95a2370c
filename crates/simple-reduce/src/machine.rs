//! Step-loop drivers over the small-step rules.
//!
//! A machine owns the node being reduced plus the environment, replaces the
//! node with one `reduce` result per [`step`](Machine::step), and can trace
//! every intermediate state to a writer.

use std::io::Write;

use simple_types::ast::{Expression, Statement};
use simple_types::Environment;

use crate::config::MachineConfig;
use crate::error::{MachineError, MachineResult};
use crate::reduce::{ReduceExpression, ReduceStatement};

/// Checks the step budget before a step is attempted.
fn check_budget(config: &MachineConfig, steps: u64) -> MachineResult<()> {
    match config.step_limit {
        Some(limit) if steps >= limit => Err(MachineError::StepLimitExceeded(limit)),
        _ => Ok(()),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expression machine
// ══════════════════════════════════════════════════════════════════════════════

/// Reduces an expression against a fixed environment.
///
/// Trace lines are the expression text alone:
/// ```text
/// 1 * 2 + 3 * 4
/// 2 + 3 * 4
/// 2 + 12
/// 14
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionMachine {
    expression: Expression,
    env: Environment,
    config: MachineConfig,
    steps: u64,
}

impl ExpressionMachine {
    /// Create an unbounded machine.
    pub fn new(expression: Expression, env: Environment) -> Self {
        Self::with_config(expression, env, MachineConfig::default())
    }

    pub fn with_config(expression: Expression, env: Environment, config: MachineConfig) -> Self {
        Self {
            expression,
            env,
            config,
            steps: 0,
        }
    }

    /// Perform a single reduction. On error the machine is left unchanged.
    pub fn step(&mut self) -> MachineResult<()> {
        check_budget(&self.config, self.steps)?;
        self.expression = self.expression.reduce(&self.env)?;
        self.steps += 1;
        tracing::trace!(step = self.steps, expression = %self.expression, "reduced expression");
        Ok(())
    }

    /// Reduce to a terminal value, writing one line per state to `sink`,
    /// the initial and final states included.
    pub fn run_to_completion<W: Write + ?Sized>(&mut self, sink: &mut W) -> MachineResult<()> {
        while self.expression.is_reducible() {
            writeln!(sink, "{}", self.expression)?;
            self.step()?;
        }
        writeln!(sink, "{}", self.expression)?;
        tracing::debug!(steps = self.steps, result = %self.expression, "expression machine finished");
        Ok(())
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Number of successful steps so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_parts(self) -> (Expression, Environment) {
        (self.expression, self.env)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statement machine
// ══════════════════════════════════════════════════════════════════════════════

/// Reduces a statement, threading the environment through every step.
///
/// Trace lines are `"<statement> <environment>"`:
/// ```text
/// x = x + 42 {x: 1}
/// x = 1 + 42 {x: 1}
/// x = 43 {x: 1}
/// do-nothing {x: 43}
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    statement: Statement,
    env: Environment,
    config: MachineConfig,
    steps: u64,
}

impl Machine {
    /// Create an unbounded machine.
    pub fn new(statement: Statement, env: Environment) -> Self {
        Self::with_config(statement, env, MachineConfig::default())
    }

    pub fn with_config(statement: Statement, env: Environment, config: MachineConfig) -> Self {
        Self {
            statement,
            env,
            config,
            steps: 0,
        }
    }

    /// Perform a single reduction. On error the machine is left unchanged.
    pub fn step(&mut self) -> MachineResult<()> {
        check_budget(&self.config, self.steps)?;
        self.statement = self.statement.reduce(&mut self.env)?;
        self.steps += 1;
        tracing::trace!(step = self.steps, statement = %self.statement, "reduced statement");
        Ok(())
    }

    /// Reduce to `do-nothing`, writing one line per state to `sink`,
    /// the initial and final states included.
    pub fn run_to_completion<W: Write + ?Sized>(&mut self, sink: &mut W) -> MachineResult<()> {
        while self.statement.is_reducible() {
            writeln!(sink, "{} {}", self.statement, self.env)?;
            self.step()?;
        }
        writeln!(sink, "{} {}", self.statement, self.env)?;
        tracing::debug!(steps = self.steps, env = %self.env, "statement machine finished");
        Ok(())
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Number of successful steps so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }
}
