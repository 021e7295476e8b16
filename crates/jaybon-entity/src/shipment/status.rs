//! Shipment status enumeration.
//!
//! The operations vocabulary accumulated several spellings for the same
//! state over time (`En Route`, `in transit`, `in-transit`). Parsing is
//! lenient: input is lowercased and stripped of everything but letters
//! and digits before matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery status of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "shipment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Accepted, awaiting pickup or park drop-off.
    Processing,
    /// In transit to the destination.
    EnRoute,
    /// Delivered to the receiver.
    Delivered,
    /// Delivery was attempted and failed.
    DeliveryFailed,
}

impl ShipmentStatus {
    /// Human-readable label shown to customers and operators.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::EnRoute => "En Route",
            Self::Delivered => "Delivered",
            Self::DeliveryFailed => "Delivery Failed",
        }
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::EnRoute => "en_route",
            Self::Delivered => "delivered",
            Self::DeliveryFailed => "delivery_failed",
        }
    }

}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = jaybon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match folded.as_str() {
            "processing" | "pending" => Ok(Self::Processing),
            "enroute" | "intransit" | "shipped" => Ok(Self::EnRoute),
            "delivered" => Ok(Self::Delivered),
            "deliveryfailed" | "failed" => Ok(Self::DeliveryFailed),
            _ => Err(jaybon_core::AppError::validation(format!(
                "Invalid shipment status: '{s}'. Expected one of: processing, en_route, delivered, delivery_failed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_parse() {
        assert_eq!(
            "En Route".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::EnRoute
        );
        assert_eq!(
            "in-transit".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::EnRoute
        );
        assert_eq!(
            "In Transit".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::EnRoute
        );
        assert_eq!(
            "Delivery Failed".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::DeliveryFailed
        );
        assert_eq!(
            "pending".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::Processing
        );
        assert!("lost".parse::<ShipmentStatus>().is_err());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(ShipmentStatus::EnRoute.display_label(), "En Route");
        assert_eq!(ShipmentStatus::Processing.display_label(), "Processing");
    }
}
