//! Tabular tracking feed configuration.

use serde::{Deserialize, Serialize};

/// Settings for the operations team's read-only tabular tracking feed.
///
/// Standard and waybill shipments live in separate tables within the
/// same base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackfeedConfig {
    /// Whether the feed is consulted before the primary store.
    #[serde(default)]
    pub enabled: bool,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer API key.
    #[serde(default)]
    pub api_key: String,
    /// Base identifier.
    #[serde(default)]
    pub base_id: String,
    /// Table holding standard shipments.
    #[serde(default = "default_normal_table")]
    pub normal_table: String,
    /// Table holding waybill shipments.
    #[serde(default = "default_waybill_table")]
    pub waybill_table: String,
}

impl Default for TrackfeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_base_url(),
            api_key: String::new(),
            base_id: String::new(),
            normal_table: default_normal_table(),
            waybill_table: default_waybill_table(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.airtable.com/v0".to_string()
}

fn default_normal_table() -> String {
    "Shipments".to_string()
}

fn default_waybill_table() -> String {
    "Waybills".to_string()
}
