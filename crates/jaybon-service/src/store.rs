//! Storage traits the services depend on.
//!
//! Services hold `Arc<dyn ShipmentStore>` / `Arc<dyn PaymentStore>`
//! rather than the concrete Postgres repositories, so the submission
//! and payment orchestrators can run against in-memory stores in tests.
//! The repositories implement these traits by delegation.

use async_trait::async_trait;
use uuid::Uuid;

use jaybon_core::result::AppResult;
use jaybon_database::repositories::{PaymentRepository, ShipmentRepository};
use jaybon_entity::payment::model::CreatePayment;
use jaybon_entity::payment::Payment;
use jaybon_entity::shipment::model::CreateShipment;
use jaybon_entity::shipment::{PaymentState, Shipment, ShipmentStatus};

/// Shipment persistence operations used by the service layer.
#[async_trait]
pub trait ShipmentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new shipment.
    async fn create(&self, data: &CreateShipment) -> AppResult<Shipment>;

    /// List a user's shipments, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Shipment>>;

    /// Find a shipment by exact tracking number.
    async fn find_by_tracking_number(&self, code: &str) -> AppResult<Option<Shipment>>;

    /// Find a shipment by exact waybill number.
    async fn find_by_waybill_number(&self, code: &str) -> AppResult<Option<Shipment>>;

    /// Overwrite status and location, stamping the update time.
    async fn update_status(
        &self,
        id: Uuid,
        status: ShipmentStatus,
        current_location: &str,
    ) -> AppResult<Shipment>;

    /// Set the payment state recorded on a shipment, by tracking number.
    async fn set_payment_state(
        &self,
        tracking_number: &str,
        state: PaymentState,
    ) -> AppResult<()>;

    /// Delete a shipment by primary key.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Payment persistence operations used by the service layer.
#[async_trait]
pub trait PaymentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new payment.
    async fn create(&self, data: &CreatePayment) -> AppResult<Payment>;

    /// Find a payment by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>>;

    /// List all payments, newest first.
    async fn find_all(&self) -> AppResult<Vec<Payment>>;

    /// Mark a payment received, stamping the confirming operator and time.
    async fn confirm(&self, id: Uuid, confirmed_by: Uuid) -> AppResult<Payment>;

    /// Mark a payment declined, stamping the declining operator and time.
    async fn decline(&self, id: Uuid, declined_by: Uuid) -> AppResult<Payment>;
}

#[async_trait]
impl ShipmentStore for ShipmentRepository {
    async fn create(&self, data: &CreateShipment) -> AppResult<Shipment> {
        ShipmentRepository::create(self, data).await
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Shipment>> {
        ShipmentRepository::find_by_user(self, user_id).await
    }

    async fn find_by_tracking_number(&self, code: &str) -> AppResult<Option<Shipment>> {
        ShipmentRepository::find_by_tracking_number(self, code).await
    }

    async fn find_by_waybill_number(&self, code: &str) -> AppResult<Option<Shipment>> {
        ShipmentRepository::find_by_waybill_number(self, code).await
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ShipmentStatus,
        current_location: &str,
    ) -> AppResult<Shipment> {
        ShipmentRepository::update_status(self, id, status, current_location).await
    }

    async fn set_payment_state(
        &self,
        tracking_number: &str,
        state: PaymentState,
    ) -> AppResult<()> {
        ShipmentRepository::set_payment_state(self, tracking_number, state).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        ShipmentRepository::delete(self, id).await
    }
}

#[async_trait]
impl PaymentStore for PaymentRepository {
    async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        PaymentRepository::create(self, data).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
        PaymentRepository::find_by_id(self, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Payment>> {
        PaymentRepository::find_all(self).await
    }

    async fn confirm(&self, id: Uuid, confirmed_by: Uuid) -> AppResult<Payment> {
        PaymentRepository::confirm(self, id, confirmed_by).await
    }

    async fn decline(&self, id: Uuid, declined_by: Uuid) -> AppResult<Payment> {
        PaymentRepository::decline(self, id, declined_by).await
    }
}

/// In-memory stores backing the service-layer tests.
#[cfg(test)]
pub(crate) mod memory {
    use std::sync::Mutex;

    use chrono::Utc;

    use jaybon_core::error::AppError;
    use jaybon_entity::payment::PaymentStatus;

    use super::*;

    /// `Vec`-backed shipment store.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryShipmentStore {
        rows: Mutex<Vec<Shipment>>,
    }

    impl MemoryShipmentStore {
        pub(crate) fn rows(&self) -> Vec<Shipment> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ShipmentStore for MemoryShipmentStore {
        async fn create(&self, data: &CreateShipment) -> AppResult<Shipment> {
            let now = Utc::now();
            let shipment = Shipment {
                id: Uuid::new_v4(),
                user_id: data.user_id,
                shipment_type: data.shipment_type,
                tracking_number: data.tracking_number.clone(),
                waybill_number: data.waybill_number.clone(),
                sender_name: data.sender_name.clone(),
                sender_phone: data.sender_phone.clone(),
                receiver_name: data.receiver_name.clone(),
                receiver_phone: data.receiver_phone.clone(),
                pickup_area: data.pickup_area.clone(),
                pickup_landmark: data.pickup_landmark.clone(),
                delivery_area: data.delivery_area.clone(),
                delivery_landmark: data.delivery_landmark.clone(),
                park_name: data.park_name.clone(),
                recipient_id: data.recipient_id.clone(),
                package_description: data.package_description.clone(),
                service_type: data.service_type.clone(),
                status: data.status,
                current_location: data.current_location.clone(),
                payment_state: data.payment_state,
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().push(shipment.clone());
            Ok(shipment)
        }

        async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Shipment>> {
            let mut rows: Vec<_> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.user_id == Some(user_id))
                .cloned()
                .collect();
            rows.reverse();
            Ok(rows)
        }

        async fn find_by_tracking_number(&self, code: &str) -> AppResult<Option<Shipment>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.tracking_number == code)
                .cloned())
        }

        async fn find_by_waybill_number(&self, code: &str) -> AppResult<Option<Shipment>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.waybill_number.as_deref() == Some(code))
                .cloned())
        }

        async fn update_status(
            &self,
            id: Uuid,
            status: ShipmentStatus,
            current_location: &str,
        ) -> AppResult<Shipment> {
            let mut rows = self.rows.lock().unwrap();
            let shipment = rows
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::not_found(format!("Shipment {id} not found")))?;
            shipment.status = status;
            shipment.current_location = current_location.to_string();
            shipment.updated_at = Utc::now();
            Ok(shipment.clone())
        }

        async fn set_payment_state(
            &self,
            tracking_number: &str,
            state: PaymentState,
        ) -> AppResult<()> {
            let mut rows = self.rows.lock().unwrap();
            let shipment = rows
                .iter_mut()
                .find(|s| s.tracking_number == tracking_number)
                .ok_or_else(|| {
                    AppError::not_found(format!(
                        "No shipment with tracking number {tracking_number}"
                    ))
                })?;
            shipment.payment_state = Some(state);
            shipment.updated_at = Utc::now();
            Ok(())
        }

        async fn delete(&self, id: Uuid) -> AppResult<()> {
            self.rows.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }
    }

    /// `Vec`-backed payment store.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryPaymentStore {
        rows: Mutex<Vec<Payment>>,
    }

    impl MemoryPaymentStore {
        pub(crate) fn rows(&self) -> Vec<Payment> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentStore for MemoryPaymentStore {
        async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
            let payment = Payment {
                id: Uuid::new_v4(),
                user_id: data.user_id,
                tracking_number: data.tracking_number.clone(),
                customer_name: data.customer_name.clone(),
                customer_email: data.customer_email.clone(),
                amount: data.amount,
                method: data.method,
                reference: data.reference.clone(),
                status: data.status,
                confirmed_at: None,
                confirmed_by: None,
                declined_at: None,
                declined_by: None,
                created_at: Utc::now(),
            };
            self.rows.lock().unwrap().push(payment.clone());
            Ok(payment)
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn find_all(&self) -> AppResult<Vec<Payment>> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.reverse();
            Ok(rows)
        }

        async fn confirm(&self, id: Uuid, confirmed_by: Uuid) -> AppResult<Payment> {
            let mut rows = self.rows.lock().unwrap();
            let payment = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::not_found(format!("Payment {id} not found")))?;
            payment.status = PaymentStatus::Received;
            payment.confirmed_at = Some(Utc::now());
            payment.confirmed_by = Some(confirmed_by);
            Ok(payment.clone())
        }

        async fn decline(&self, id: Uuid, declined_by: Uuid) -> AppResult<Payment> {
            let mut rows = self.rows.lock().unwrap();
            let payment = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::not_found(format!("Payment {id} not found")))?;
            payment.status = PaymentStatus::Declined;
            payment.declined_at = Some(Utc::now());
            payment.declined_by = Some(declined_by);
            Ok(payment.clone())
        }
    }
}
