//! Payment reference minting for the gateway popup.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;

use crate::dto::response::{ApiResponse, ReferenceResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/payments/reference
pub async fn mint_reference(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<ReferenceResponse>>, ApiError> {
    let reference = state.payment_service.mint_reference();
    Ok(Json(ApiResponse::ok(ReferenceResponse { reference })))
}
