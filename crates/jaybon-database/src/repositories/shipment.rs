//! Shipment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jaybon_core::error::{AppError, ErrorKind};
use jaybon_core::result::AppResult;
use jaybon_entity::shipment::model::CreateShipment;
use jaybon_entity::shipment::{PaymentState, Shipment, ShipmentStatus};

/// Repository for shipment CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ShipmentRepository {
    pool: PgPool,
}

impl ShipmentRepository {
    /// Create a new shipment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a shipment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Shipment>> {
        sqlx::query_as::<_, Shipment>("SELECT * FROM shipments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find shipment by id", e)
            })
    }

    /// Find a shipment by exact tracking number.
    pub async fn find_by_tracking_number(&self, code: &str) -> AppResult<Option<Shipment>> {
        sqlx::query_as::<_, Shipment>(
            "SELECT * FROM shipments WHERE tracking_number = $1 ORDER BY created_at ASC LIMIT 1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find shipment by tracking number",
                e,
            )
        })
    }

    /// Find a shipment by exact waybill number.
    pub async fn find_by_waybill_number(&self, code: &str) -> AppResult<Option<Shipment>> {
        sqlx::query_as::<_, Shipment>(
            "SELECT * FROM shipments WHERE waybill_number = $1 ORDER BY created_at ASC LIMIT 1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find shipment by waybill number",
                e,
            )
        })
    }

    /// List a user's shipments, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Shipment>> {
        sqlx::query_as::<_, Shipment>(
            "SELECT * FROM shipments WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user shipments", e)
        })
    }

    /// Insert a new shipment.
    pub async fn create(&self, data: &CreateShipment) -> AppResult<Shipment> {
        sqlx::query_as::<_, Shipment>(
            "INSERT INTO shipments (user_id, shipment_type, tracking_number, waybill_number, \
                                    sender_name, sender_phone, receiver_name, receiver_phone, \
                                    pickup_area, pickup_landmark, delivery_area, delivery_landmark, \
                                    park_name, recipient_id, package_description, service_type, \
                                    status, current_location, payment_state) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.shipment_type)
        .bind(&data.tracking_number)
        .bind(&data.waybill_number)
        .bind(&data.sender_name)
        .bind(&data.sender_phone)
        .bind(&data.receiver_name)
        .bind(&data.receiver_phone)
        .bind(&data.pickup_area)
        .bind(&data.pickup_landmark)
        .bind(&data.delivery_area)
        .bind(&data.delivery_landmark)
        .bind(&data.park_name)
        .bind(&data.recipient_id)
        .bind(&data.package_description)
        .bind(&data.service_type)
        .bind(data.status)
        .bind(&data.current_location)
        .bind(data.payment_state)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create shipment", e))
    }

    /// Overwrite status and location, stamping the update time.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ShipmentStatus,
        current_location: &str,
    ) -> AppResult<Shipment> {
        sqlx::query_as::<_, Shipment>(
            "UPDATE shipments SET status = $2, current_location = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(current_location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update shipment status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Shipment {id} not found")))
    }

    /// Set the payment state recorded on a shipment, by tracking number.
    pub async fn set_payment_state(
        &self,
        tracking_number: &str,
        state: PaymentState,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE shipments SET payment_state = $2, updated_at = NOW() \
             WHERE tracking_number = $1",
        )
        .bind(tracking_number)
        .bind(state)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set payment state", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "No shipment with tracking number {tracking_number}"
            )));
        }
        Ok(())
    }

    /// Delete a shipment by primary key.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM shipments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete shipment", e)
            })?;
        Ok(())
    }
}
