//! Admin-only handlers — shipment search, status updates, and payment
//! management.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use jaybon_core::error::AppError;
use crate::error::ApiError;
use jaybon_entity::payment::{Payment, PaymentBucket};
use jaybon_entity::shipment::{Shipment, ShipmentStatus};

use crate::dto::request::{PaymentListQuery, ShipmentSearchQuery, UpdateStatusRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/shipments/search?code=...
pub async fn search_shipment(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ShipmentSearchQuery>,
) -> Result<Json<ApiResponse<Shipment>>, ApiError> {
    let code = query.code.trim();
    if code.is_empty() {
        return Err(AppError::validation("A tracking or waybill code is required").into());
    }

    let shipment = state
        .shipment_service
        .search_by_code(code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No shipment found for code {code}")))?;

    Ok(Json(ApiResponse::ok(shipment)))
}

/// PUT /api/admin/shipments/{id}/status
pub async fn update_shipment_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<Shipment>>, ApiError> {
    let status: ShipmentStatus = req.status.parse()?;
    let shipment = state
        .shipment_service
        .update_status(id, status, &req.current_location)
        .await?;

    Ok(Json(ApiResponse::ok(shipment)))
}

/// GET /api/admin/payments?bucket=...
pub async fn list_payments(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<PaymentListQuery>,
) -> Result<Json<ApiResponse<Vec<Payment>>>, ApiError> {
    let bucket = match query.bucket.as_deref() {
        Some(raw) => raw.parse::<PaymentBucket>()?,
        None => PaymentBucket::All,
    };

    let payments = state.payment_service.list(bucket).await?;
    Ok(Json(ApiResponse::ok(payments)))
}

/// POST /api/admin/payments/{id}/confirm
pub async fn confirm_payment(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Payment>>, ApiError> {
    let payment = state.payment_service.confirm(&admin, id).await?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// POST /api/admin/payments/{id}/decline
pub async fn decline_payment(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Payment>>, ApiError> {
    let payment = state.payment_service.decline(&admin, id).await?;
    Ok(Json(ApiResponse::ok(payment)))
}
