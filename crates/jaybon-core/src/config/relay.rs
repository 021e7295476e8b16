//! Workflow webhook relay configuration.

use serde::{Deserialize, Serialize};

/// Settings for the workflow-automation webhook endpoint that receives
/// shipment submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Whether webhook notification is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Webhook endpoint URL. Receives both a JSON POST and a
    /// query-string GET per submission.
    #[serde(default)]
    pub webhook_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            webhook_url: String::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
