//! Payment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::method::PaymentMethod;
use super::status::PaymentStatus;

/// A payment record, linked to its shipment by tracking code.
///
/// Nothing enforces the one-payment-per-shipment relationship; the
/// shipment and payment writes are independent and either can fail
/// without the other.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// Owning user. `None` for guest submissions.
    pub user_id: Option<Uuid>,
    /// Tracking code of the linked shipment.
    pub tracking_number: String,
    /// Customer's name as entered on the form.
    pub customer_name: String,
    /// Customer's email.
    pub customer_email: String,
    /// Amount in whole naira.
    pub amount: i64,
    /// Payment method. `None` on records that predate the field.
    pub method: Option<PaymentMethod>,
    /// Gateway reference, user-entered reference, sender name, or the
    /// literal `COD`.
    pub reference: String,
    /// Settlement status.
    pub status: PaymentStatus,
    /// When the payment was confirmed, if it has been.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// The operator who confirmed it.
    pub confirmed_by: Option<Uuid>,
    /// When the payment was declined, if it has been.
    pub declined_at: Option<DateTime<Utc>>,
    /// The operator who declined it.
    pub declined_by: Option<Uuid>,
    /// When the payment was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayment {
    /// Owning user, if authenticated.
    pub user_id: Option<Uuid>,
    /// Tracking code of the linked shipment.
    pub tracking_number: String,
    /// Customer's name.
    pub customer_name: String,
    /// Customer's email.
    pub customer_email: String,
    /// Amount in whole naira.
    pub amount: i64,
    /// Payment method.
    pub method: Option<PaymentMethod>,
    /// Payment reference.
    pub reference: String,
    /// Initial status.
    pub status: PaymentStatus,
}
