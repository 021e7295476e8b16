//! Payment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settlement status of a payment record.
///
/// Transitions are one-way and operator-driven: a payment starts as
/// `Processing` or `CodPending` and is eventually confirmed (`Received`)
/// or `Declined`. Legacy records use `pending` for `Processing` and
/// `paid` for `Received`; both are accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting operator confirmation of a transfer.
    Processing,
    /// Cash-on-delivery, awaiting collection.
    CodPending,
    /// Confirmed by an operator.
    Received,
    /// Declined by an operator.
    Declined,
}

impl PaymentStatus {
    /// Whether a payment in this status can still be confirmed or declined.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Processing | Self::CodPending)
    }

    /// Whether this status may transition to `target`.
    pub fn can_transition_to(&self, target: PaymentStatus) -> bool {
        self.is_open() && matches!(target, Self::Received | Self::Declined)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::CodPending => "cod_pending",
            Self::Received => "received",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = jaybon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "processing" | "pending" => Ok(Self::Processing),
            "cod_pending" | "cod pending" => Ok(Self::CodPending),
            "received" | "paid" => Ok(Self::Received),
            "declined" => Ok(Self::Declined),
            _ => Err(jaybon_core::AppError::validation(format!(
                "Invalid payment status: '{s}'. Expected one of: processing, cod_pending, received, declined"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_way_transitions() {
        assert!(PaymentStatus::Processing.can_transition_to(PaymentStatus::Received));
        assert!(PaymentStatus::Processing.can_transition_to(PaymentStatus::Declined));
        assert!(PaymentStatus::CodPending.can_transition_to(PaymentStatus::Received));
        assert!(!PaymentStatus::Received.can_transition_to(PaymentStatus::Declined));
        assert!(!PaymentStatus::Declined.can_transition_to(PaymentStatus::Received));
        assert!(!PaymentStatus::Processing.can_transition_to(PaymentStatus::Processing));
    }

    #[test]
    fn test_legacy_spellings() {
        assert_eq!(
            "pending".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Processing
        );
        assert_eq!(
            "paid".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Received
        );
    }
}
