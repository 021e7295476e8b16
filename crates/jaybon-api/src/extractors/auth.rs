//! `AuthUser` extractor — pulls JWT from the Authorization header, validates, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use jaybon_core::error::AppError;
use jaybon_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // Decode the JWT and check the session row behind it
        let claims = state.session_manager.validate(token).await?;

        let ctx = RequestContext::new(
            claims.user_id(),
            claims.session_id(),
            claims.role,
            claims.email,
        );

        Ok(AuthUser(ctx))
    }
}

/// Extracted context for routes that accept anonymous requests.
///
/// A missing Authorization header yields `None` (guest); a present but
/// invalid token is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<RequestContext>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(OptionalAuthUser(None));
        }

        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;
        Ok(OptionalAuthUser(Some(ctx)))
    }
}

/// Extracted context that additionally requires the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;

        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required").into());
        }

        Ok(AdminUser(ctx))
    }
}
