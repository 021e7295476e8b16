//! Shipment submission orchestrator and dashboard listing.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use jaybon_core::error::AppError;
use jaybon_entity::payment::model::CreatePayment;
use jaybon_entity::payment::{Payment, PaymentMethod, PaymentStatus};
use jaybon_entity::shipment::model::CreateShipment;
use jaybon_entity::shipment::{PaymentState, Shipment, ShipmentStatus, ShipmentType};
use jaybon_entity::user::User;
use jaybon_relay::webhook::{WebhookNotifier, WebhookPayload};

use crate::store::{PaymentStore, ShipmentStore};

use super::codes;
use super::pricing;
use super::validate::FieldErrors;

/// How many shipments the dashboard keeps per user.
const RETENTION_KEEP: usize = 15;
/// How far past the keep limit the trim will delete.
const RETENTION_SCAN: usize = 20;

/// Who is submitting a shipment.
///
/// Submission does not require an account: guests submit with a contact
/// email only and their records carry no owning user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submitter {
    /// Owning user, when authenticated.
    pub user_id: Option<Uuid>,
    /// Contact email: the account email, or the form's sender email for
    /// guests.
    pub email: String,
}

impl Submitter {
    /// Submitter for a signed-in user.
    pub fn account(user: &User) -> Self {
        Self {
            user_id: Some(user.id),
            email: user.email.clone(),
        }
    }

    /// Anonymous submitter identified only by a contact email.
    pub fn guest(email: impl Into<String>) -> Self {
        Self {
            user_id: None,
            email: email.into(),
        }
    }
}

/// Payment outcome chosen in the payment selection flow.
///
/// The reference is the gateway's reference, a user-entered bank
/// reference, or the sender's name for pickup transfers. Cash-on-delivery
/// carries no reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// Chosen payment method.
    pub method: PaymentMethod,
    /// Payment reference, required for transfer-style methods.
    pub reference: Option<String>,
}

/// A standard shipment submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardSubmission {
    pub sender_name: String,
    pub sender_phone: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub pickup_area: String,
    pub pickup_landmark: String,
    pub delivery_area: String,
    pub delivery_landmark: String,
    pub package_description: String,
    pub service_type: String,
    pub payment: PaymentOutcome,
}

/// A waybill transfer submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaybillSubmission {
    pub sender_name: String,
    pub sender_phone: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub park_name: String,
    pub recipient_id: String,
    pub package_description: String,
    pub payment: PaymentOutcome,
}

/// Records produced by a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResult {
    /// The created shipment.
    pub shipment: Shipment,
    /// The created payment record.
    pub payment: Payment,
}

/// Orchestrates shipment submissions and the dashboard list.
#[derive(Debug, Clone)]
pub struct ShipmentService {
    shipment_store: Arc<dyn ShipmentStore>,
    payment_store: Arc<dyn PaymentStore>,
    notifier: Arc<WebhookNotifier>,
}

impl ShipmentService {
    /// Creates a new shipment service.
    pub fn new(
        shipment_store: Arc<dyn ShipmentStore>,
        payment_store: Arc<dyn PaymentStore>,
        notifier: Arc<WebhookNotifier>,
    ) -> Self {
        Self {
            shipment_store,
            payment_store,
            notifier,
        }
    }

    /// Price quote for a shipment, in whole naira.
    pub fn quote(&self, shipment_type: ShipmentType, service_type: &str) -> i64 {
        pricing::quote(shipment_type, service_type)
    }

    /// Submits a standard shipment.
    ///
    /// Steps run sequentially with no transaction and no rollback: code
    /// generation, shipment insert, payment insert, webhook fan-out. A
    /// retry after any failure mints a brand-new tracking code. Webhook
    /// failures are logged and swallowed.
    pub async fn submit_standard(
        &self,
        submitter: &Submitter,
        form: StandardSubmission,
    ) -> Result<SubmissionResult, AppError> {
        let mut errors = FieldErrors::new();
        errors.require("sender_name", &form.sender_name);
        errors.require_phone("sender_phone", &form.sender_phone);
        errors.require("receiver_name", &form.receiver_name);
        errors.require_phone("receiver_phone", &form.receiver_phone);
        errors.require("pickup_area", &form.pickup_area);
        errors.require("pickup_landmark", &form.pickup_landmark);
        errors.require("delivery_area", &form.delivery_area);
        errors.require("delivery_landmark", &form.delivery_landmark);
        errors.require("package_description", &form.package_description);
        errors.require("service_type", &form.service_type);
        if submitter.user_id.is_none() {
            errors.require_email("sender_email", &submitter.email);
        }
        errors.into_result()?;

        let (reference, payment_status) = resolve_outcome(&form.payment, &form.sender_name)?;
        let amount = pricing::quote(ShipmentType::Normal, &form.service_type);
        let tracking_number = codes::generate_tracking_code();

        let shipment = self
            .shipment_store
            .create(&CreateShipment {
                user_id: submitter.user_id,
                shipment_type: ShipmentType::Normal,
                tracking_number: tracking_number.clone(),
                waybill_number: None,
                sender_name: form.sender_name.clone(),
                sender_phone: form.sender_phone.clone(),
                receiver_name: form.receiver_name.clone(),
                receiver_phone: form.receiver_phone.clone(),
                pickup_area: Some(form.pickup_area.clone()),
                pickup_landmark: Some(form.pickup_landmark.clone()),
                delivery_area: Some(form.delivery_area.clone()),
                delivery_landmark: Some(form.delivery_landmark.clone()),
                park_name: None,
                recipient_id: None,
                package_description: form.package_description.clone(),
                service_type: form.service_type.clone(),
                status: ShipmentStatus::Processing,
                current_location: "Pickup pending".to_string(),
                payment_state: None,
            })
            .await?;

        let payment = self
            .payment_store
            .create(&CreatePayment {
                user_id: submitter.user_id,
                tracking_number: tracking_number.clone(),
                customer_name: form.sender_name.clone(),
                customer_email: submitter.email.clone(),
                amount,
                method: Some(form.payment.method),
                reference: reference.clone(),
                status: payment_status,
            })
            .await?;

        info!(
            tracking_number = %tracking_number,
            user_id = ?submitter.user_id,
            amount,
            "Standard shipment submitted"
        );

        self.notifier
            .notify_submission(&WebhookPayload {
                tracking_number: tracking_number.clone(),
                waybill_number: None,
                sender_name: form.sender_name,
                sender_phone: form.sender_phone,
                receiver_name: form.receiver_name,
                receiver_phone: form.receiver_phone,
                pickup: format!("{} - {}", form.pickup_area, form.pickup_landmark),
                delivery: format!("{} - {}", form.delivery_area, form.delivery_landmark),
                package_description: form.package_description,
                service_type: form.service_type,
                amount,
                payment_method: form.payment.method.to_string(),
                payment_reference: reference,
                status: shipment.status.to_string(),
                customer_email: submitter.email.clone(),
                timestamp: Utc::now().to_rfc3339(),
            })
            .await;

        Ok(SubmissionResult { shipment, payment })
    }

    /// Submits a waybill transfer.
    ///
    /// Same sequencing as [`Self::submit_standard`]. The waybill code
    /// doubles as the tracking number, and the payment method decides
    /// the shipment's initial payment state.
    pub async fn submit_waybill(
        &self,
        submitter: &Submitter,
        form: WaybillSubmission,
    ) -> Result<SubmissionResult, AppError> {
        let mut errors = FieldErrors::new();
        errors.require("sender_name", &form.sender_name);
        errors.require_phone("sender_phone", &form.sender_phone);
        errors.require("receiver_name", &form.receiver_name);
        errors.require_phone("receiver_phone", &form.receiver_phone);
        errors.require("park_name", &form.park_name);
        errors.require("recipient_id", &form.recipient_id);
        errors.require("package_description", &form.package_description);
        if submitter.user_id.is_none() {
            errors.require_email("sender_email", &submitter.email);
        }
        if !matches!(
            form.payment.method,
            PaymentMethod::PickupTransfer | PaymentMethod::DropoffCod
        ) {
            errors.add(
                "payment_method",
                "Waybill transfers are paid at pickup (transfer) or drop-off (cash)",
            );
        }
        errors.into_result()?;

        let (reference, payment_status) = resolve_outcome(&form.payment, &form.sender_name)?;
        let payment_state = match form.payment.method {
            PaymentMethod::DropoffCod => PaymentState::CodPending,
            _ => PaymentState::Paid,
        };
        let amount = pricing::quote(ShipmentType::Waybill, "");
        let waybill_number = codes::generate_waybill_code();

        let shipment = self
            .shipment_store
            .create(&CreateShipment {
                user_id: submitter.user_id,
                shipment_type: ShipmentType::Waybill,
                tracking_number: waybill_number.clone(),
                waybill_number: Some(waybill_number.clone()),
                sender_name: form.sender_name.clone(),
                sender_phone: form.sender_phone.clone(),
                receiver_name: form.receiver_name.clone(),
                receiver_phone: form.receiver_phone.clone(),
                pickup_area: None,
                pickup_landmark: None,
                delivery_area: None,
                delivery_landmark: None,
                park_name: Some(form.park_name.clone()),
                recipient_id: Some(form.recipient_id.clone()),
                package_description: form.package_description.clone(),
                service_type: "Waybill Transfer".to_string(),
                status: ShipmentStatus::Processing,
                current_location: "Park pickup pending".to_string(),
                payment_state: Some(payment_state),
            })
            .await?;

        let payment = self
            .payment_store
            .create(&CreatePayment {
                user_id: submitter.user_id,
                tracking_number: waybill_number.clone(),
                customer_name: form.sender_name.clone(),
                customer_email: submitter.email.clone(),
                amount,
                method: Some(form.payment.method),
                reference: reference.clone(),
                status: payment_status,
            })
            .await?;

        info!(
            waybill_number = %waybill_number,
            user_id = ?submitter.user_id,
            amount,
            "Waybill transfer submitted"
        );

        self.notifier
            .notify_submission(&WebhookPayload {
                tracking_number: waybill_number.clone(),
                waybill_number: Some(waybill_number.clone()),
                sender_name: form.sender_name,
                sender_phone: form.sender_phone,
                receiver_name: form.receiver_name,
                receiver_phone: form.receiver_phone,
                pickup: form.park_name,
                delivery: format!("Recipient ID: {}", form.recipient_id),
                package_description: form.package_description,
                service_type: "Waybill Transfer".to_string(),
                amount,
                payment_method: form.payment.method.to_string(),
                payment_reference: reference,
                status: shipment.status.to_string(),
                customer_email: submitter.email.clone(),
                timestamp: Utc::now().to_rfc3339(),
            })
            .await;

        Ok(SubmissionResult { shipment, payment })
    }

    /// Lists a user's shipments for the dashboard, applying the
    /// retention trim.
    ///
    /// When more than 15 shipments exist, records ranked 16 through 20
    /// (newest first) are deleted one at a time, best-effort; individual
    /// delete failures are logged and ignored. At most 15 records are
    /// returned either way.
    pub async fn list_dashboard(&self, user_id: Uuid) -> Result<Vec<Shipment>, AppError> {
        let mut shipments = self.shipment_store.find_by_user(user_id).await?;

        for stale in trim_candidates(&shipments) {
            if let Err(e) = self.shipment_store.delete(stale.id).await {
                warn!(
                    shipment_id = %stale.id,
                    error = %e,
                    "Dashboard retention delete failed"
                );
            }
        }

        shipments.truncate(RETENTION_KEEP);
        Ok(shipments)
    }

    /// Admin search by exact code: tracking number first, then waybill
    /// number. First match wins.
    pub async fn search_by_code(&self, code: &str) -> Result<Option<Shipment>, AppError> {
        if let Some(shipment) = self.shipment_store.find_by_tracking_number(code).await? {
            return Ok(Some(shipment));
        }
        self.shipment_store.find_by_waybill_number(code).await
    }

    /// Admin status update. Requires a non-blank location; stamps the
    /// update time.
    pub async fn update_status(
        &self,
        shipment_id: Uuid,
        status: ShipmentStatus,
        current_location: &str,
    ) -> Result<Shipment, AppError> {
        if current_location.trim().is_empty() {
            return Err(AppError::validation("Current location is required"));
        }

        let updated = self
            .shipment_store
            .update_status(shipment_id, status, current_location.trim())
            .await?;

        info!(
            shipment_id = %shipment_id,
            status = %status,
            "Shipment status updated"
        );
        Ok(updated)
    }
}

/// Resolves a payment outcome into a reference string and the initial
/// payment status.
fn resolve_outcome(
    outcome: &PaymentOutcome,
    sender_name: &str,
) -> Result<(String, PaymentStatus), AppError> {
    match outcome.method {
        PaymentMethod::DropoffCod => Ok(("COD".to_string(), PaymentStatus::CodPending)),
        PaymentMethod::PickupTransfer => {
            let reference = outcome
                .reference
                .clone()
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| sender_name.to_string());
            Ok((reference, PaymentStatus::Processing))
        }
        PaymentMethod::Card | PaymentMethod::BankTransfer => {
            let reference = outcome
                .reference
                .clone()
                .filter(|r| !r.trim().is_empty())
                .ok_or_else(|| {
                    AppError::validation("A payment reference is required for this method")
                })?;
            Ok((reference, PaymentStatus::Processing))
        }
    }
}

/// Shipments beyond the keep limit that the trim will delete, capped at
/// the scan limit. Input must be ordered newest first.
fn trim_candidates(shipments: &[Shipment]) -> &[Shipment] {
    if shipments.len() > RETENTION_KEEP {
        &shipments[RETENTION_KEEP..shipments.len().min(RETENTION_SCAN)]
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::time::Duration;

    use jaybon_core::config::relay::RelayConfig;
    use jaybon_core::result::AppResult;

    use crate::store::memory::{MemoryPaymentStore, MemoryShipmentStore};

    fn sample_shipment(n: usize) -> Shipment {
        Shipment {
            id: Uuid::new_v4(),
            user_id: Some(Uuid::new_v4()),
            shipment_type: ShipmentType::Normal,
            tracking_number: format!("JBL-1700000000{n:03}-123"),
            waybill_number: None,
            sender_name: "Ada".to_string(),
            sender_phone: "+2348012345678".to_string(),
            receiver_name: "Ben".to_string(),
            receiver_phone: "+2348087654321".to_string(),
            pickup_area: Some("Ikeja".to_string()),
            pickup_landmark: Some("Computer Village".to_string()),
            delivery_area: Some("Lekki".to_string()),
            delivery_landmark: Some("Phase 1".to_string()),
            park_name: None,
            recipient_id: None,
            package_description: "Documents".to_string(),
            service_type: "Local Bike Delivery (1-8 hours)".to_string(),
            status: ShipmentStatus::Processing,
            current_location: "Pickup pending".to_string(),
            payment_state: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        shipments: Arc<MemoryShipmentStore>,
        payments: Arc<dyn PaymentStore>,
    ) -> ShipmentService {
        let notifier = Arc::new(WebhookNotifier::new(RelayConfig {
            enabled: false,
            webhook_url: String::new(),
        }));
        ShipmentService::new(shipments, payments, notifier)
    }

    fn standard_form(method: PaymentMethod, reference: Option<&str>) -> StandardSubmission {
        StandardSubmission {
            sender_name: "Ada".to_string(),
            sender_phone: "+2348012345678".to_string(),
            receiver_name: "Ben".to_string(),
            receiver_phone: "+2348087654321".to_string(),
            pickup_area: "Ikeja".to_string(),
            pickup_landmark: "Computer Village".to_string(),
            delivery_area: "Lekki".to_string(),
            delivery_landmark: "Phase 1".to_string(),
            package_description: "Documents".to_string(),
            service_type: "Local Bike Delivery (1-8 hours)".to_string(),
            payment: PaymentOutcome {
                method,
                reference: reference.map(str::to_string),
            },
        }
    }

    /// Payment store whose inserts always fail.
    #[derive(Debug)]
    struct RejectingPaymentStore;

    #[async_trait]
    impl crate::store::PaymentStore for RejectingPaymentStore {
        async fn create(&self, _data: &CreatePayment) -> AppResult<Payment> {
            Err(AppError::database("connection reset"))
        }

        async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Payment>> {
            Ok(None)
        }

        async fn find_all(&self) -> AppResult<Vec<Payment>> {
            Ok(Vec::new())
        }

        async fn confirm(&self, id: Uuid, _confirmed_by: Uuid) -> AppResult<Payment> {
            Err(AppError::not_found(format!("Payment {id} not found")))
        }

        async fn decline(&self, id: Uuid, _declined_by: Uuid) -> AppResult<Payment> {
            Err(AppError::not_found(format!("Payment {id} not found")))
        }
    }

    #[test]
    fn test_trim_noop_at_or_below_keep_limit() {
        let shipments: Vec<_> = (0..15).map(sample_shipment).collect();
        assert!(trim_candidates(&shipments).is_empty());
    }

    #[test]
    fn test_trim_deletes_ranks_16_through_18_of_18() {
        let shipments: Vec<_> = (0..18).map(sample_shipment).collect();
        let candidates = trim_candidates(&shipments);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].id, shipments[15].id);
        assert_eq!(candidates[2].id, shipments[17].id);
    }

    #[test]
    fn test_trim_caps_at_scan_limit() {
        // 30 shipments: only ranks 16-20 are deleted, the rest survive.
        let shipments: Vec<_> = (0..30).map(sample_shipment).collect();
        assert_eq!(trim_candidates(&shipments).len(), 5);
    }

    #[test]
    fn test_cod_outcome_uses_literal_reference() {
        let (reference, status) = resolve_outcome(
            &PaymentOutcome {
                method: PaymentMethod::DropoffCod,
                reference: None,
            },
            "Ada",
        )
        .unwrap();
        assert_eq!(reference, "COD");
        assert_eq!(status, PaymentStatus::CodPending);
    }

    #[test]
    fn test_pickup_transfer_defaults_to_sender_name() {
        let (reference, status) = resolve_outcome(
            &PaymentOutcome {
                method: PaymentMethod::PickupTransfer,
                reference: None,
            },
            "Ada",
        )
        .unwrap();
        assert_eq!(reference, "Ada");
        assert_eq!(status, PaymentStatus::Processing);
    }

    #[test]
    fn test_transfer_requires_reference() {
        let result = resolve_outcome(
            &PaymentOutcome {
                method: PaymentMethod::BankTransfer,
                reference: Some("   ".to_string()),
            },
            "Ada",
        );
        assert!(result.is_err());

        let (reference, status) = resolve_outcome(
            &PaymentOutcome {
                method: PaymentMethod::BankTransfer,
                reference: Some("TESTREF123".to_string()),
            },
            "Ada",
        )
        .unwrap();
        assert_eq!(reference, "TESTREF123");
        assert_eq!(status, PaymentStatus::Processing);
    }

    #[tokio::test]
    async fn test_local_bike_manual_reference_flow() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let payments = Arc::new(MemoryPaymentStore::default());
        let service = service(Arc::clone(&shipments), payments.clone());
        let submitter = Submitter {
            user_id: Some(Uuid::new_v4()),
            email: "ada@example.com".to_string(),
        };

        let result = service
            .submit_standard(
                &submitter,
                standard_form(PaymentMethod::BankTransfer, Some("TESTREF123")),
            )
            .await
            .unwrap();

        assert_eq!(result.shipment.status, ShipmentStatus::Processing);
        assert_eq!(result.shipment.current_location, "Pickup pending");
        let parts: Vec<&str> = result.shipment.tracking_number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "JBL");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 3);

        assert_eq!(result.payment.amount, 3000);
        assert_eq!(result.payment.reference, "TESTREF123");
        assert_eq!(result.payment.status, PaymentStatus::Processing);
        assert_eq!(result.payment.method, Some(PaymentMethod::BankTransfer));
        assert_eq!(
            result.payment.tracking_number,
            result.shipment.tracking_number
        );

        assert_eq!(shipments.rows().len(), 1);
        assert_eq!(payments.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_submissions_create_two_records() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let payments = Arc::new(MemoryPaymentStore::default());
        let service = service(Arc::clone(&shipments), payments.clone());
        let submitter = Submitter {
            user_id: Some(Uuid::new_v4()),
            email: "ada@example.com".to_string(),
        };

        let first = service
            .submit_standard(
                &submitter,
                standard_form(PaymentMethod::BankTransfer, Some("TESTREF123")),
            )
            .await
            .unwrap();
        // Tracking codes embed the submission millisecond.
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = service
            .submit_standard(
                &submitter,
                standard_form(PaymentMethod::BankTransfer, Some("TESTREF123")),
            )
            .await
            .unwrap();

        assert_ne!(first.shipment.id, second.shipment.id);
        assert_ne!(
            first.shipment.tracking_number,
            second.shipment.tracking_number
        );
        assert_eq!(shipments.rows().len(), 2);
        assert_eq!(payments.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_guest_submission_has_no_owner() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let payments = Arc::new(MemoryPaymentStore::default());
        let service = service(Arc::clone(&shipments), payments.clone());

        let result = service
            .submit_standard(
                &Submitter::guest("guest@example.com"),
                standard_form(PaymentMethod::BankTransfer, Some("TESTREF123")),
            )
            .await
            .unwrap();

        assert_eq!(result.shipment.user_id, None);
        assert_eq!(result.payment.user_id, None);
        assert_eq!(result.payment.customer_email, "guest@example.com");
    }

    #[tokio::test]
    async fn test_guest_submission_requires_valid_email() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let payments = Arc::new(MemoryPaymentStore::default());
        let service = service(Arc::clone(&shipments), payments.clone());

        let err = service
            .submit_standard(
                &Submitter::guest("not-an-email"),
                standard_form(PaymentMethod::BankTransfer, Some("TESTREF123")),
            )
            .await
            .unwrap_err();

        assert!(err.message.contains("sender_email"));
        assert!(shipments.rows().is_empty());
    }

    #[tokio::test]
    async fn test_waybill_cod_submission() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let payments = Arc::new(MemoryPaymentStore::default());
        let service = service(Arc::clone(&shipments), payments.clone());

        let result = service
            .submit_waybill(
                &Submitter::guest("guest@example.com"),
                WaybillSubmission {
                    sender_name: "Ada".to_string(),
                    sender_phone: "+2348012345678".to_string(),
                    receiver_name: "Ben".to_string(),
                    receiver_phone: "+2348087654321".to_string(),
                    park_name: "Jibowu Park".to_string(),
                    recipient_id: "NIN-1234".to_string(),
                    package_description: "Carton".to_string(),
                    payment: PaymentOutcome {
                        method: PaymentMethod::DropoffCod,
                        reference: None,
                    },
                },
            )
            .await
            .unwrap();

        assert!(result.shipment.tracking_number.starts_with("JBL-WB-"));
        assert_eq!(
            result.shipment.waybill_number.as_deref(),
            Some(result.shipment.tracking_number.as_str())
        );
        assert_eq!(result.shipment.payment_state, Some(PaymentState::CodPending));
        assert_eq!(result.shipment.user_id, None);
        assert_eq!(result.payment.amount, 3000);
        assert_eq!(result.payment.reference, "COD");
        assert_eq!(result.payment.status, PaymentStatus::CodPending);
    }

    #[tokio::test]
    async fn test_payment_insert_failure_keeps_shipment() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let service = service(Arc::clone(&shipments), Arc::new(RejectingPaymentStore));
        let submitter = Submitter {
            user_id: Some(Uuid::new_v4()),
            email: "ada@example.com".to_string(),
        };

        let result = service
            .submit_standard(
                &submitter,
                standard_form(PaymentMethod::BankTransfer, Some("TESTREF123")),
            )
            .await;

        // No rollback: the shipment row outlives the failed payment insert.
        assert!(result.is_err());
        assert_eq!(shipments.rows().len(), 1);
    }
}
