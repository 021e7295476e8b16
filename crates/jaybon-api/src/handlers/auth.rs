//! Auth handlers — signup, login, logout, me, email verification.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use jaybon_core::error::AppError;
use crate::error::ApiError;
use jaybon_service::account::service as account;

use crate::dto::request::{LoginRequest, SignupRequest, VerifyEmailQuery};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .account_service
        .signup(account::SignupRequest {
            email: req.email,
            password: req.password,
            display_name: req.display_name,
            phone: req.phone,
            company: req.company,
        })
        .await?;

    Ok(Json(ApiResponse::ok(auth_response(result))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .account_service
        .login(account::LoginRequest {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(auth_response(result))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.account_service.logout(auth.context()).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.me(auth.context()).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// POST /api/auth/resend-verification
pub async fn resend_verification(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    // The minted token is handed to the mail delivery pipeline, not the
    // caller.
    let _token = state
        .account_service
        .resend_verification(auth.context())
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Verification email sent".to_string(),
    })))
}

/// GET /api/auth/verify?token=...
pub async fn verify_email(
    State(state): State<AppState>,
    Query(query): Query<VerifyEmailQuery>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.verify_email(&query.token).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

fn auth_response(result: account::AuthResult) -> AuthResponse {
    AuthResponse {
        access_token: result.opened.access_token,
        token_expires_at: result.opened.token_expires_at,
        user: UserResponse::from(&result.user),
    }
}
