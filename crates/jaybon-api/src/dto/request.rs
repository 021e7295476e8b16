//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Company name.
    pub company: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name.
    pub display_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Company name.
    pub company: Option<String>,
}

/// Email verification query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyEmailQuery {
    /// Verification token from the emailed link.
    pub token: String,
}

/// Standard shipment submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StandardShipmentRequest {
    #[validate(length(min = 1, message = "Sender name is required"))]
    pub sender_name: String,
    pub sender_phone: String,
    #[validate(length(min = 1, message = "Receiver name is required"))]
    pub receiver_name: String,
    pub receiver_phone: String,
    pub pickup_area: String,
    pub pickup_landmark: String,
    pub delivery_area: String,
    pub delivery_landmark: String,
    pub package_description: String,
    pub service_type: String,
    /// Sender's contact email. Required when submitting without an
    /// account; ignored for signed-in users.
    pub sender_email: Option<String>,
    /// Payment method name (card, bank-transfer, pickup-transfer, dropoff-cod).
    pub payment_method: String,
    /// Gateway or bank transfer reference.
    pub payment_reference: Option<String>,
}

/// Waybill transfer submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WaybillShipmentRequest {
    #[validate(length(min = 1, message = "Sender name is required"))]
    pub sender_name: String,
    pub sender_phone: String,
    #[validate(length(min = 1, message = "Receiver name is required"))]
    pub receiver_name: String,
    pub receiver_phone: String,
    pub park_name: String,
    pub recipient_id: String,
    pub package_description: String,
    /// Sender's contact email. Required when submitting without an
    /// account; ignored for signed-in users.
    pub sender_email: Option<String>,
    /// Payment method name (pickup-transfer or dropoff-cod).
    pub payment_method: String,
    /// Optional payer reference for pickup transfers.
    pub payment_reference: Option<String>,
}

/// Quote query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteQuery {
    /// Shipment type (normal or waybill).
    #[serde(default = "default_shipment_type")]
    pub shipment_type: String,
    /// Selected service type label.
    #[serde(default)]
    pub service_type: String,
}

fn default_shipment_type() -> String {
    "normal".to_string()
}

/// Tracking lookup query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingQuery {
    /// Shipment type (normal or waybill).
    #[serde(rename = "type", default = "default_shipment_type")]
    pub shipment_type: String,
}

/// Admin shipment search query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentSearchQuery {
    /// Exact tracking or waybill code.
    pub code: String,
}

/// Admin status update body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status name. Legacy names from older records are accepted.
    pub status: String,
    /// Free-text current location.
    pub current_location: String,
}

/// Admin payment list query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentListQuery {
    /// Bucket filter. Defaults to all.
    pub bucket: Option<String>,
}
