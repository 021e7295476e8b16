//! Public tracking lookup handler. No authentication required.

use axum::Json;
use axum::extract::{Path, Query, State};

use jaybon_core::error::AppError;
use crate::error::ApiError;
use jaybon_entity::shipment::ShipmentType;
use jaybon_service::tracking::TrackingInfo;

use crate::dto::request::TrackingQuery;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/tracking/{code}
pub async fn track(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<TrackingQuery>,
) -> Result<Json<ApiResponse<TrackingInfo>>, ApiError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::validation("A tracking number is required").into());
    }

    let shipment_type: ShipmentType = query.shipment_type.parse()?;
    let info = state.tracking_service.lookup(code, shipment_type).await?;

    Ok(Json(ApiResponse::ok(info)))
}
