//! Derived payment filter buckets for the admin console.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::method::PaymentMethod;
use super::status::PaymentStatus;

/// Filter bucket derived from a payment's method and status.
///
/// Records with no stored method are treated as bank transfers, matching
/// how the earliest records were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentBucket {
    /// Transfer-style payment awaiting confirmation.
    TransferPending,
    /// Transfer-style payment confirmed.
    TransferConfirmed,
    /// Cash-on-delivery, any open state.
    Cod,
    /// Declined by an operator.
    Declined,
    /// No filtering.
    All,
}

impl PaymentBucket {
    /// Derive the bucket a payment falls into.
    pub fn derive(method: Option<PaymentMethod>, status: PaymentStatus) -> PaymentBucket {
        if status == PaymentStatus::Declined {
            return Self::Declined;
        }
        let method = method.unwrap_or(PaymentMethod::BankTransfer);
        if method == PaymentMethod::DropoffCod || status == PaymentStatus::CodPending {
            return Self::Cod;
        }
        match status {
            PaymentStatus::Received => Self::TransferConfirmed,
            _ => Self::TransferPending,
        }
    }

    /// Whether a payment with the given method and status matches this filter.
    pub fn matches(&self, method: Option<PaymentMethod>, status: PaymentStatus) -> bool {
        match self {
            Self::All => true,
            bucket => Self::derive(method, status) == *bucket,
        }
    }

    /// Return the bucket as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TransferPending => "transfer_pending",
            Self::TransferConfirmed => "transfer_confirmed",
            Self::Cod => "cod",
            Self::Declined => "declined",
            Self::All => "all",
        }
    }
}

impl fmt::Display for PaymentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentBucket {
    type Err = jaybon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transfer_pending" => Ok(Self::TransferPending),
            "transfer_confirmed" => Ok(Self::TransferConfirmed),
            "cod" => Ok(Self::Cod),
            "declined" => Ok(Self::Declined),
            "all" => Ok(Self::All),
            _ => Err(jaybon_core::AppError::validation(format!(
                "Invalid payment bucket: '{s}'. Expected one of: transfer_pending, transfer_confirmed, cod, declined, all"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_method_counts_as_transfer() {
        assert_eq!(
            PaymentBucket::derive(None, PaymentStatus::Processing),
            PaymentBucket::TransferPending
        );
        assert_eq!(
            PaymentBucket::derive(None, PaymentStatus::Received),
            PaymentBucket::TransferConfirmed
        );
    }

    #[test]
    fn test_cod_by_method_or_status() {
        assert_eq!(
            PaymentBucket::derive(Some(PaymentMethod::DropoffCod), PaymentStatus::CodPending),
            PaymentBucket::Cod
        );
        assert_eq!(
            PaymentBucket::derive(Some(PaymentMethod::BankTransfer), PaymentStatus::CodPending),
            PaymentBucket::Cod
        );
    }

    #[test]
    fn test_declined_wins_over_method() {
        assert_eq!(
            PaymentBucket::derive(Some(PaymentMethod::DropoffCod), PaymentStatus::Declined),
            PaymentBucket::Declined
        );
    }

    #[test]
    fn test_confirmation_moves_bucket() {
        // A legacy record (no method) leaves transfer_pending once received.
        assert!(PaymentBucket::TransferPending.matches(None, PaymentStatus::Processing));
        assert!(!PaymentBucket::TransferPending.matches(None, PaymentStatus::Received));
        assert!(PaymentBucket::TransferConfirmed.matches(None, PaymentStatus::Received));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(PaymentBucket::All.matches(None, PaymentStatus::Declined));
        assert!(PaymentBucket::All.matches(Some(PaymentMethod::Card), PaymentStatus::Processing));
    }
}
