//! Shipment-side payment state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment state recorded on the shipment itself.
///
/// Stored as a nullable column; older records never had the field set,
/// so `None` is a valid state meaning "not yet determined".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_state", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    /// Payment confirmed.
    Paid,
    /// Cash-on-delivery, collected at drop-off.
    CodPending,
}

impl PaymentState {
    /// Return the state as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::CodPending => "cod_pending",
        }
    }
}

impl fmt::Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentState {
    type Err = jaybon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "cod_pending" | "cod pending" => Ok(Self::CodPending),
            _ => Err(jaybon_core::AppError::validation(format!(
                "Invalid payment state: '{s}'. Expected one of: paid, cod_pending"
            ))),
        }
    }
}
