//! Workflow webhook notifier.
//!
//! Every accepted submission is announced to an external workflow
//! automation endpoint twice: once as a JSON POST and once as a GET with
//! the same data URL-encoded as query parameters. The receiver's
//! behavior is opaque; both calls are best-effort and never retried.

use serde::Serialize;
use tracing::{debug, warn};

use jaybon_core::config::relay::RelayConfig;
use jaybon_core::error::AppError;

/// Snapshot of a submission sent to the webhook endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    /// Generated tracking code.
    pub tracking_number: String,
    /// Waybill code, waybill submissions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waybill_number: Option<String>,
    /// Sender's name.
    pub sender_name: String,
    /// Sender's phone.
    pub sender_phone: String,
    /// Receiver's name.
    pub receiver_name: String,
    /// Receiver's phone.
    pub receiver_phone: String,
    /// Pickup description (area + landmark, or park name).
    pub pickup: String,
    /// Delivery description (area + landmark, or recipient ID).
    pub delivery: String,
    /// Package description.
    pub package_description: String,
    /// Service tier label.
    pub service_type: String,
    /// Amount in whole naira.
    pub amount: i64,
    /// Chosen payment method.
    pub payment_method: String,
    /// Payment reference.
    pub payment_reference: String,
    /// Initial shipment status.
    pub status: String,
    /// Customer's email.
    pub customer_email: String,
    /// Submission time, RFC 3339.
    pub timestamp: String,
}

/// Sends submission notifications to the workflow webhook.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    config: RelayConfig,
}

impl WebhookNotifier {
    /// Creates a new notifier.
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Whether notification is enabled and an endpoint is configured.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled && !self.config.webhook_url.is_empty()
    }

    /// Announces a submission: JSON POST first, then the GET variant.
    ///
    /// Each call is attempted independently; a failure in one does not
    /// stop the other. Failures are logged and swallowed.
    pub async fn notify_submission(&self, payload: &WebhookPayload) {
        if !self.is_enabled() {
            debug!("Webhook notification disabled, skipping");
            return;
        }

        if let Err(e) = self.post_json(payload).await {
            warn!(
                tracking_number = %payload.tracking_number,
                error = %e,
                "Webhook POST failed"
            );
        }

        if let Err(e) = self.get_query(payload).await {
            warn!(
                tracking_number = %payload.tracking_number,
                error = %e,
                "Webhook GET failed"
            );
        }
    }

    async fn post_json(&self, payload: &WebhookPayload) -> Result<(), AppError> {
        let resp = self
            .client
            .post(&self.config.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Webhook POST failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Webhook POST returned status {status}"
            )));
        }
        Ok(())
    }

    async fn get_query(&self, payload: &WebhookPayload) -> Result<(), AppError> {
        let resp = self
            .client
            .get(&self.config.webhook_url)
            .query(payload)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Webhook GET failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Webhook GET returned status {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_url() {
        let notifier = WebhookNotifier::new(RelayConfig {
            enabled: true,
            webhook_url: String::new(),
        });
        assert!(!notifier.is_enabled());
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = WebhookPayload {
            tracking_number: "JBL-1700000000000-123".to_string(),
            waybill_number: None,
            sender_name: "Ada".to_string(),
            sender_phone: "+2348012345678".to_string(),
            receiver_name: "Ben".to_string(),
            receiver_phone: "+2348087654321".to_string(),
            pickup: "Ikeja - Computer Village".to_string(),
            delivery: "Lekki - Phase 1".to_string(),
            package_description: "Documents".to_string(),
            service_type: "Local Bike Delivery (1-8 hours)".to_string(),
            amount: 3000,
            payment_method: "bank_transfer".to_string(),
            payment_reference: "TESTREF123".to_string(),
            status: "processing".to_string(),
            customer_email: "ada@example.com".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["trackingNumber"], "JBL-1700000000000-123");
        assert_eq!(json["paymentReference"], "TESTREF123");
        assert!(json.get("waybillNumber").is_none());
    }
}
