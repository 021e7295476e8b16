//! Payment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jaybon_core::error::{AppError, ErrorKind};
use jaybon_core::result::AppResult;
use jaybon_entity::payment::model::CreatePayment;
use jaybon_entity::payment::Payment;

/// Repository for payment CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a payment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find payment by id", e)
            })
    }

    /// List all payments, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))
    }

    /// Insert a new payment.
    pub async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (user_id, tracking_number, customer_name, customer_email, \
                                   amount, method, reference, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.tracking_number)
        .bind(&data.customer_name)
        .bind(&data.customer_email)
        .bind(data.amount)
        .bind(data.method)
        .bind(&data.reference)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create payment", e))
    }

    /// Mark a payment received, stamping the confirming operator and time.
    pub async fn confirm(&self, id: Uuid, confirmed_by: Uuid) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "UPDATE payments SET status = 'received', confirmed_at = NOW(), confirmed_by = $2 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(confirmed_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to confirm payment", e))?
        .ok_or_else(|| AppError::not_found(format!("Payment {id} not found")))
    }

    /// Mark a payment declined, stamping the declining operator and time.
    pub async fn decline(&self, id: Uuid, declined_by: Uuid) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "UPDATE payments SET status = 'declined', declined_at = NOW(), declined_by = $2 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(declined_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to decline payment", e))?
        .ok_or_else(|| AppError::not_found(format!("Payment {id} not found")))
    }
}
