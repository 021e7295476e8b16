//! Shipment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::payment_state::PaymentState;
use super::shipment_type::ShipmentType;
use super::status::ShipmentStatus;

/// A shipment record.
///
/// Standard shipments carry pickup/delivery area and landmark fields;
/// waybill transfers carry the park name, recipient ID, and a waybill
/// number alongside the tracking number.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shipment {
    /// Unique shipment identifier.
    pub id: Uuid,
    /// Owning user. `None` for guest submissions.
    pub user_id: Option<Uuid>,
    /// Which entry point created this shipment.
    pub shipment_type: ShipmentType,
    /// Generated tracking code (`JBL-<millis>-<3 digits>`).
    pub tracking_number: String,
    /// Generated waybill code (`JBL-WB-<millis>-<3 digits>`), waybill only.
    pub waybill_number: Option<String>,
    /// Sender's name.
    pub sender_name: String,
    /// Sender's phone (`+234` format).
    pub sender_phone: String,
    /// Receiver's name.
    pub receiver_name: String,
    /// Receiver's phone (`+234` format).
    pub receiver_phone: String,
    /// Pickup area, standard shipments.
    pub pickup_area: Option<String>,
    /// Pickup landmark, standard shipments.
    pub pickup_landmark: Option<String>,
    /// Delivery area, standard shipments.
    pub delivery_area: Option<String>,
    /// Delivery landmark, standard shipments.
    pub delivery_landmark: Option<String>,
    /// Motor park name, waybill transfers.
    pub park_name: Option<String>,
    /// Recipient's ID presented at the park, waybill transfers.
    pub recipient_id: Option<String>,
    /// What is being shipped.
    pub package_description: String,
    /// Service tier label, e.g. "Local Bike Delivery (1-8 hours)".
    pub service_type: String,
    /// Delivery status.
    pub status: ShipmentStatus,
    /// Freeform current location text, operator-maintained.
    pub current_location: String,
    /// Payment state recorded on the shipment.
    pub payment_state: Option<PaymentState>,
    /// When the shipment was created.
    pub created_at: DateTime<Utc>,
    /// When the shipment was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Shipment {
    /// The code customers use to look this shipment up.
    pub fn public_code(&self) -> &str {
        self.waybill_number.as_deref().unwrap_or(&self.tracking_number)
    }
}

/// Data required to insert a new shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShipment {
    /// Owning user, if authenticated.
    pub user_id: Option<Uuid>,
    /// Entry point.
    pub shipment_type: ShipmentType,
    /// Generated tracking code.
    pub tracking_number: String,
    /// Generated waybill code, waybill only.
    pub waybill_number: Option<String>,
    /// Sender's name.
    pub sender_name: String,
    /// Sender's phone.
    pub sender_phone: String,
    /// Receiver's name.
    pub receiver_name: String,
    /// Receiver's phone.
    pub receiver_phone: String,
    /// Pickup area.
    pub pickup_area: Option<String>,
    /// Pickup landmark.
    pub pickup_landmark: Option<String>,
    /// Delivery area.
    pub delivery_area: Option<String>,
    /// Delivery landmark.
    pub delivery_landmark: Option<String>,
    /// Motor park name.
    pub park_name: Option<String>,
    /// Recipient's ID.
    pub recipient_id: Option<String>,
    /// Package description.
    pub package_description: String,
    /// Service tier label.
    pub service_type: String,
    /// Initial status.
    pub status: ShipmentStatus,
    /// Initial location text.
    pub current_location: String,
    /// Initial payment state.
    pub payment_state: Option<PaymentState>,
}
