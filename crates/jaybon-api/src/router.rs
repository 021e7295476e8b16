//! Route definitions for the Jaybon HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(shipment_routes())
        .merge(payment_routes())
        .merge(tracking_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, logout, me, email verification
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route(
            "/auth/resend-verification",
            post(handlers::auth::resend_verification),
        )
        .route("/auth/verify", get(handlers::auth::verify_email))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_profile))
        .route("/users/me", put(handlers::user::update_profile))
}

/// Shipment submission, dashboard, and quotes
fn shipment_routes() -> Router<AppState> {
    Router::new()
        .route("/shipments", get(handlers::shipment::list_shipments))
        .route("/shipments", post(handlers::shipment::submit_shipment))
        .route(
            "/shipments/waybill",
            post(handlers::shipment::submit_waybill),
        )
        .route("/shipments/quote", get(handlers::shipment::quote))
}

/// Payment gateway support endpoints
fn payment_routes() -> Router<AppState> {
    Router::new().route(
        "/payments/reference",
        post(handlers::payment::mint_reference),
    )
}

/// Public tracking endpoint (no auth required)
fn tracking_routes() -> Router<AppState> {
    Router::new().route("/tracking/{code}", get(handlers::tracking::track))
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/shipments/search",
            get(handlers::admin::search_shipment),
        )
        .route(
            "/admin/shipments/{id}/status",
            put(handlers::admin::update_shipment_status),
        )
        .route("/admin/payments", get(handlers::admin::list_payments))
        .route(
            "/admin/payments/{id}/confirm",
            post(handlers::admin::confirm_payment),
        )
        .route(
            "/admin/payments/{id}/decline",
            post(handlers::admin::decline_payment),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
