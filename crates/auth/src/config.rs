use serde::{Deserialize, Serialize};

/// Server-side pipeline policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Grant the default scope set regardless of the `scope` field.
    pub ignore_client_requested_scope: bool,

    /// Run the grant-type and scope stages after the user stages.
    pub resolve_scopes: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ignore_client_requested_scope: false,
            resolve_scopes: true,
        }
    }
}
