use serde::Deserialize;

/// Run-time knobs for the reduction machines.
///
/// The default is unbounded: a `while` that never terminates keeps the
/// machine running, exactly as the modelled language would.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Maximum number of `step` calls before failing with
    /// [`MachineError::StepLimitExceeded`](crate::MachineError::StepLimitExceeded).
    pub step_limit: Option<u64>,
}

impl MachineConfig {
    pub fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }
}
