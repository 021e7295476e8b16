//! Tracking lookup: feed-first with primary-store fallback.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use jaybon_core::error::AppError;
use jaybon_entity::shipment::{Shipment, ShipmentStatus, ShipmentType};
use jaybon_relay::trackfeed::TrackfeedClient;

use crate::store::ShipmentStore;

/// One step of the delivery timeline.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineStep {
    /// Step label.
    pub label: &'static str,
    /// Whether the shipment has reached this step.
    pub completed: bool,
}

/// Where a tracking result came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackingSource {
    /// The operations team's tabular feed.
    Feed,
    /// The primary shipment store.
    Primary,
}

/// Public view of a shipment's progress.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingInfo {
    /// The code that was looked up.
    pub code: String,
    /// Normalized status.
    pub status: ShipmentStatus,
    /// Human-readable status label.
    pub status_label: &'static str,
    /// Current location text, if known.
    pub current_location: Option<String>,
    /// Derived delivery timeline.
    pub timeline: Vec<TimelineStep>,
    /// Which source answered.
    pub source: TrackingSource,
}

/// Looks shipments up in the tracking feed first, then the primary store.
#[derive(Debug, Clone)]
pub struct TrackingService {
    shipment_store: Arc<dyn ShipmentStore>,
    trackfeed: Arc<TrackfeedClient>,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(shipment_store: Arc<dyn ShipmentStore>, trackfeed: Arc<TrackfeedClient>) -> Self {
        Self {
            shipment_store,
            trackfeed,
        }
    }

    /// Looks up a tracking or waybill code.
    ///
    /// The feed is consulted first when enabled; any feed failure falls
    /// through to the primary store rather than surfacing.
    pub async fn lookup(
        &self,
        code: &str,
        shipment_type: ShipmentType,
    ) -> Result<TrackingInfo, AppError> {
        if self.trackfeed.is_enabled() {
            match self.trackfeed.lookup(code, shipment_type).await {
                Ok(Some(record)) => {
                    let status = record
                        .status()
                        .and_then(|s| s.parse::<ShipmentStatus>().ok())
                        .unwrap_or(ShipmentStatus::Processing);
                    return Ok(build_info(
                        code.to_string(),
                        status,
                        record.current_location(),
                        TrackingSource::Feed,
                    ));
                }
                Ok(None) => {
                    debug!(code, "Code not in tracking feed, falling back to primary store");
                }
                Err(e) => {
                    warn!(code, error = %e, "Tracking feed lookup failed, using primary store");
                }
            }
        }

        let shipment = self
            .find_in_primary(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("No shipment found for tracking number {code}"))
            })?;

        Ok(build_info(
            shipment.public_code().to_string(),
            shipment.status,
            Some(shipment.current_location),
            TrackingSource::Primary,
        ))
    }

    /// Exact match on tracking number first, then waybill number.
    async fn find_in_primary(&self, code: &str) -> Result<Option<Shipment>, AppError> {
        if let Some(shipment) = self.shipment_store.find_by_tracking_number(code).await? {
            return Ok(Some(shipment));
        }
        self.shipment_store.find_by_waybill_number(code).await
    }
}

fn build_info(
    code: String,
    status: ShipmentStatus,
    current_location: Option<String>,
    source: TrackingSource,
) -> TrackingInfo {
    TrackingInfo {
        code,
        status,
        status_label: status.display_label(),
        current_location,
        timeline: derive_timeline(status),
        source,
    }
}

/// Derives the three-step delivery timeline. A failed delivery replaces
/// the final step.
fn derive_timeline(status: ShipmentStatus) -> Vec<TimelineStep> {
    let reached = match status {
        ShipmentStatus::Processing => 0,
        ShipmentStatus::EnRoute => 1,
        ShipmentStatus::Delivered | ShipmentStatus::DeliveryFailed => 2,
    };

    let final_label = if status == ShipmentStatus::DeliveryFailed {
        "Delivery Failed"
    } else {
        "Delivered"
    };

    vec![
        TimelineStep {
            label: "Processing",
            completed: true,
        },
        TimelineStep {
            label: "En Route",
            completed: reached >= 1,
        },
        TimelineStep {
            label: final_label,
            completed: reached >= 2,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use jaybon_core::config::trackfeed::TrackfeedConfig;
    use jaybon_entity::shipment::model::CreateShipment;

    use crate::store::memory::MemoryShipmentStore;

    fn disabled_feed() -> Arc<TrackfeedClient> {
        Arc::new(TrackfeedClient::new(TrackfeedConfig {
            enabled: false,
            base_url: String::new(),
            api_key: String::new(),
            base_id: String::new(),
            normal_table: "Shipments".to_string(),
            waybill_table: "Waybills".to_string(),
        }))
    }

    fn waybill_record(code: &str) -> CreateShipment {
        CreateShipment {
            user_id: None,
            shipment_type: ShipmentType::Waybill,
            tracking_number: code.to_string(),
            waybill_number: Some(code.to_string()),
            sender_name: "Ada".to_string(),
            sender_phone: "+2348012345678".to_string(),
            receiver_name: "Ben".to_string(),
            receiver_phone: "+2348087654321".to_string(),
            pickup_area: None,
            pickup_landmark: None,
            delivery_area: None,
            delivery_landmark: None,
            park_name: Some("Jibowu Park".to_string()),
            recipient_id: Some("NIN-1234".to_string()),
            package_description: "Carton".to_string(),
            service_type: "Waybill Transfer".to_string(),
            status: ShipmentStatus::EnRoute,
            current_location: "Ore".to_string(),
            payment_state: None,
        }
    }

    #[tokio::test]
    async fn test_primary_fallback_returns_canonical_code() {
        let store = Arc::new(MemoryShipmentStore::default());
        store
            .create(&waybill_record("JBL-WB-1700000000000-456"))
            .await
            .unwrap();
        let service = TrackingService::new(Arc::clone(&store) as Arc<dyn ShipmentStore>, disabled_feed());

        let info = service
            .lookup("JBL-WB-1700000000000-456", ShipmentType::Waybill)
            .await
            .unwrap();

        assert_eq!(info.source, TrackingSource::Primary);
        assert_eq!(info.code, "JBL-WB-1700000000000-456");
        assert_eq!(info.status, ShipmentStatus::EnRoute);
        assert_eq!(info.current_location.as_deref(), Some("Ore"));
    }

    #[tokio::test]
    async fn test_unknown_code_is_not_found() {
        let store = Arc::new(MemoryShipmentStore::default());
        let service = TrackingService::new(Arc::clone(&store) as Arc<dyn ShipmentStore>, disabled_feed());

        let err = service
            .lookup("JBL-1700000000000-999", ShipmentType::Normal)
            .await
            .unwrap_err();
        assert!(err.message.contains("No shipment found"));
    }

    #[test]
    fn test_timeline_processing() {
        let timeline = derive_timeline(ShipmentStatus::Processing);
        assert_eq!(
            timeline.iter().map(|s| s.completed).collect::<Vec<_>>(),
            vec![true, false, false]
        );
    }

    #[test]
    fn test_timeline_en_route() {
        let timeline = derive_timeline(ShipmentStatus::EnRoute);
        assert_eq!(
            timeline.iter().map(|s| s.completed).collect::<Vec<_>>(),
            vec![true, true, false]
        );
    }

    #[test]
    fn test_timeline_delivered() {
        let timeline = derive_timeline(ShipmentStatus::Delivered);
        assert!(timeline.iter().all(|s| s.completed));
        assert_eq!(timeline[2].label, "Delivered");
    }

    #[test]
    fn test_timeline_failed_replaces_final_step() {
        let timeline = derive_timeline(ShipmentStatus::DeliveryFailed);
        assert!(timeline.iter().all(|s| s.completed));
        assert_eq!(timeline[2].label, "Delivery Failed");
    }
}
