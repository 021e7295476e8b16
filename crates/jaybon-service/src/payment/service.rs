//! Admin payment management and gateway reference minting.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use jaybon_core::error::AppError;
use jaybon_entity::payment::{Payment, PaymentBucket, PaymentStatus};
use jaybon_entity::shipment::PaymentState;

use crate::context::RequestContext;
use crate::shipment::codes;
use crate::store::{PaymentStore, ShipmentStore};

/// Payment listing, confirmation, and decline operations.
#[derive(Debug, Clone)]
pub struct PaymentService {
    payment_store: Arc<dyn PaymentStore>,
    shipment_store: Arc<dyn ShipmentStore>,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(
        payment_store: Arc<dyn PaymentStore>,
        shipment_store: Arc<dyn ShipmentStore>,
    ) -> Self {
        Self {
            payment_store,
            shipment_store,
        }
    }

    /// Mints a payment reference for the gateway popup.
    pub fn mint_reference(&self) -> String {
        codes::generate_payment_reference()
    }

    /// Lists payments newest first, filtered by bucket.
    ///
    /// Filtering happens after the fetch so that records with a missing
    /// method land in the transfer buckets (legacy rule).
    pub async fn list(&self, bucket: PaymentBucket) -> Result<Vec<Payment>, AppError> {
        let payments = self.payment_store.find_all().await?;
        Ok(payments
            .into_iter()
            .filter(|p| bucket.matches(p.method, p.status))
            .collect())
    }

    /// Confirms a payment as received.
    ///
    /// Also flips the linked shipment's payment state to paid. The two
    /// writes are independent; when the shipment update fails the payment
    /// stays confirmed and the failure is only logged.
    pub async fn confirm(&self, ctx: &RequestContext, id: Uuid) -> Result<Payment, AppError> {
        let payment = self.require_open(id, PaymentStatus::Received).await?;
        let confirmed = self.payment_store.confirm(id, ctx.user_id).await?;

        if let Err(e) = self
            .shipment_store
            .set_payment_state(&payment.tracking_number, PaymentState::Paid)
            .await
        {
            warn!(
                payment_id = %id,
                tracking_number = %payment.tracking_number,
                error = %e,
                "Payment confirmed but linked shipment update failed"
            );
        }

        info!(payment_id = %id, operator = %ctx.user_id, "Payment confirmed");
        Ok(confirmed)
    }

    /// Declines a payment. No shipment side effect.
    pub async fn decline(&self, ctx: &RequestContext, id: Uuid) -> Result<Payment, AppError> {
        self.require_open(id, PaymentStatus::Declined).await?;
        let declined = self.payment_store.decline(id, ctx.user_id).await?;
        info!(payment_id = %id, operator = %ctx.user_id, "Payment declined");
        Ok(declined)
    }

    /// Loads a payment and checks the one-way transition guard.
    async fn require_open(&self, id: Uuid, target: PaymentStatus) -> Result<Payment, AppError> {
        let payment = self
            .payment_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Payment {id} not found")))?;

        if !payment.status.can_transition_to(target) {
            return Err(AppError::conflict(format!(
                "Payment is already {} and cannot become {}",
                payment.status, target
            )));
        }
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jaybon_entity::payment::model::CreatePayment;
    use jaybon_entity::payment::PaymentMethod;
    use jaybon_entity::shipment::model::CreateShipment;
    use jaybon_entity::shipment::{ShipmentStatus, ShipmentType};
    use jaybon_entity::user::UserRole;

    use crate::store::memory::{MemoryPaymentStore, MemoryShipmentStore};

    fn admin_ctx() -> RequestContext {
        RequestContext::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            UserRole::Admin,
            "ops@example.com".to_string(),
        )
    }

    async fn seed(
        shipments: &MemoryShipmentStore,
        payments: &MemoryPaymentStore,
        tracking_number: &str,
    ) -> Payment {
        crate::store::ShipmentStore::create(
            shipments,
            &CreateShipment {
                user_id: None,
                shipment_type: ShipmentType::Normal,
                tracking_number: tracking_number.to_string(),
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
            },
        )
        .await
        .unwrap();

        crate::store::PaymentStore::create(
            payments,
            &CreatePayment {
                user_id: None,
                tracking_number: tracking_number.to_string(),
                customer_name: "Ada".to_string(),
                customer_email: "ada@example.com".to_string(),
                amount: 3000,
                method: Some(PaymentMethod::BankTransfer),
                reference: "TESTREF123".to_string(),
                status: PaymentStatus::Processing,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_confirm_flips_linked_shipment_payment_state() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let payments = Arc::new(MemoryPaymentStore::default());
        let service = PaymentService::new(
            Arc::clone(&payments) as Arc<dyn PaymentStore>,
            Arc::clone(&shipments) as Arc<dyn ShipmentStore>,
        );
        let payment = seed(&shipments, &payments, "JBL-1700000000000-123").await;

        let confirmed = service.confirm(&admin_ctx(), payment.id).await.unwrap();

        assert_eq!(confirmed.status, PaymentStatus::Received);
        assert!(confirmed.confirmed_at.is_some());
        let shipment = shipments.rows().into_iter().next().unwrap();
        assert_eq!(shipment.payment_state, Some(PaymentState::Paid));
    }

    #[tokio::test]
    async fn test_confirmed_payment_cannot_be_declined() {
        let shipments = Arc::new(MemoryShipmentStore::default());
        let payments = Arc::new(MemoryPaymentStore::default());
        let service = PaymentService::new(
            Arc::clone(&payments) as Arc<dyn PaymentStore>,
            Arc::clone(&shipments) as Arc<dyn ShipmentStore>,
        );
        let payment = seed(&shipments, &payments, "JBL-1700000000000-123").await;

        service.confirm(&admin_ctx(), payment.id).await.unwrap();
        let err = service.decline(&admin_ctx(), payment.id).await.unwrap_err();
        assert!(err.message.contains("already"));
    }
}
