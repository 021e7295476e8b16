//! Read-only tabular tracking feed client.
//!
//! The operations team maintains shipment progress in a spreadsheet-like
//! API with one table per shipment type. Public tracking consults this
//! feed first and falls back to the primary store when the code is not
//! found here.

use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use jaybon_core::config::trackfeed::TrackfeedConfig;
use jaybon_core::error::AppError;
use jaybon_entity::shipment::ShipmentType;

/// A row returned by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    /// Feed-internal record ID.
    pub id: String,
    /// Raw field map as maintained by operations.
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl FeedRecord {
    fn text_field(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    /// Status text as entered by operations (free text, legacy spellings).
    pub fn status(&self) -> Option<String> {
        self.text_field("Status")
    }

    /// Current location text.
    pub fn current_location(&self) -> Option<String> {
        self.text_field("Current Location")
    }

    /// Last update timestamp text, if maintained.
    pub fn last_updated(&self) -> Option<String> {
        self.text_field("Last Updated")
    }
}

#[derive(Debug, Deserialize)]
struct FeedPage {
    records: Vec<FeedRecord>,
}

/// Client for the tabular tracking feed.
#[derive(Debug, Clone)]
pub struct TrackfeedClient {
    client: reqwest::Client,
    config: TrackfeedConfig,
}

impl TrackfeedClient {
    /// Creates a new feed client.
    pub fn new(config: TrackfeedConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Whether the feed is configured and enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled && !self.config.api_key.is_empty() && !self.config.base_id.is_empty()
    }

    /// Looks up a shipment code in the table for the given type.
    ///
    /// Returns `Ok(None)` when the code is not present, so callers can
    /// fall back to the primary store.
    pub async fn lookup(
        &self,
        code: &str,
        shipment_type: ShipmentType,
    ) -> Result<Option<FeedRecord>, AppError> {
        let (table, field) = match shipment_type {
            ShipmentType::Normal => (&self.config.normal_table, "Tracking Number"),
            ShipmentType::Waybill => (&self.config.waybill_table, "Waybill Number"),
        };

        let url = format!(
            "{}/{}/{}",
            self.config.base_url, self.config.base_id, table
        );
        let formula = format!("{{{field}}}='{}'", code.replace('\'', ""));

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            // The feed aggressively caches; bust it the same way the
            // operations tooling does.
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .query(&[
                ("filterByFormula", formula.as_str()),
                ("maxRecords", "1"),
                ("_t", &Utc::now().timestamp_millis().to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Tracking feed request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Tracking feed returned status {status}"
            )));
        }

        let page: FeedPage = resp
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid tracking feed response: {e}")))?;

        debug!(code, found = !page.records.is_empty(), "Tracking feed lookup");
        Ok(page.records.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_accessors() {
        let raw = serde_json::json!({
            "id": "recAbc123",
            "fields": {
                "Tracking Number": "JBL-1700000000000-123",
                "Status": "In Transit",
                "Current Location": "Ibadan hub"
            }
        });
        let record: FeedRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.status().as_deref(), Some("In Transit"));
        assert_eq!(record.current_location().as_deref(), Some("Ibadan hub"));
        assert!(record.last_updated().is_none());
    }

    #[test]
    fn test_disabled_without_key() {
        let client = TrackfeedClient::new(TrackfeedConfig {
            enabled: true,
            ..TrackfeedConfig::default()
        });
        assert!(!client.is_enabled());
    }
}
