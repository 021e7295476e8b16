//! Shipment type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which entry point created a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "shipment_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShipmentType {
    /// Standard door-to-door shipment.
    Normal,
    /// Waybill transfer between motor parks.
    Waybill,
}

impl ShipmentType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Waybill => "waybill",
        }
    }
}

impl fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShipmentType {
    type Err = jaybon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "waybill" => Ok(Self::Waybill),
            _ => Err(jaybon_core::AppError::validation(format!(
                "Invalid shipment type: '{s}'. Expected one of: normal, waybill"
            ))),
        }
    }
}
