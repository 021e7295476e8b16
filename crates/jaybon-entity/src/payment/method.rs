//! Payment method enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a customer chose to pay for a shipment.
///
/// Stored as a nullable column: the earliest records were written before
/// the field existed. A missing method is treated as a bank transfer for
/// filtering purposes (see [`super::PaymentBucket`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_method", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card charge through the hosted gateway popup.
    Card,
    /// Bank transfer, through the gateway or a manually entered reference.
    BankTransfer,
    /// Waybill: sender pays by transfer at pickup.
    PickupTransfer,
    /// Waybill: receiver pays cash at drop-off.
    DropoffCod,
}

impl PaymentMethod {
    /// Whether this method settles by transfer (as opposed to cash).
    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::Card | Self::BankTransfer | Self::PickupTransfer)
    }

    /// Return the method as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
            Self::PickupTransfer => "pickup_transfer",
            Self::DropoffCod => "dropoff_cod",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = jaybon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "bank_transfer" | "gateway-bank-transfer" | "manual-reference" => {
                Ok(Self::BankTransfer)
            }
            "pickup_transfer" => Ok(Self::PickupTransfer),
            // Older records spell cash-on-delivery as plain "cod".
            "dropoff_cod" | "cod" => Ok(Self::DropoffCod),
            _ => Err(jaybon_core::AppError::validation(format!(
                "Invalid payment method: '{s}'. Expected one of: card, bank_transfer, pickup_transfer, dropoff_cod"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_cod_spelling() {
        assert_eq!(
            "cod".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::DropoffCod
        );
    }

    #[test]
    fn test_is_transfer() {
        assert!(PaymentMethod::Card.is_transfer());
        assert!(PaymentMethod::BankTransfer.is_transfer());
        assert!(PaymentMethod::PickupTransfer.is_transfer());
        assert!(!PaymentMethod::DropoffCod.is_transfer());
    }
}
