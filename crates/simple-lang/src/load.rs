//! JSON documents for programs, environments and machine configuration.
//!
//! SIMPLE has no surface syntax; programs are AST values. These loaders
//! accept the serde form of those values so callers can keep programs in
//! files. Enums use serde's external tagging:
//!
//! ```json
//! {"Assign": {"variable": "x", "expression": {"Add": [{"Number": 1}, {"Variable": "y"}]}}}
//! ```

use simple_reduce::MachineConfig;
use simple_types::{Environment, Statement};
use thiserror::Error;

/// Errors raised while reading a document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_program(json: &str) -> Result<Statement, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Environment documents map names to expressions: `{"x": {"Number": 1}}`.
pub fn load_environment(json: &str) -> Result<Environment, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Missing fields fall back to [`MachineConfig::default`].
pub fn load_config(json: &str) -> Result<MachineConfig, LoadError> {
    Ok(serde_json::from_str(json)?)
}
