//! User self-service handlers.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use jaybon_entity::user::model::UpdateProfile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.me(auth.context()).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .account_service
        .update_profile(
            auth.context(),
            UpdateProfile {
                display_name: req.display_name,
                phone: req.phone,
                company: req.company,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}
