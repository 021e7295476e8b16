//! Application builder — wires repositories, services, and state into a
//! running Axum server.

use std::sync::Arc;

use jaybon_auth::jwt::{JwtDecoder, JwtEncoder};
use jaybon_auth::password::{PasswordHasher, PasswordPolicy};
use jaybon_auth::session::SessionManager;
use jaybon_core::config::AppConfig;
use jaybon_core::error::AppError;
use jaybon_database::DatabasePool;
use jaybon_database::repositories::{
    PaymentRepository, SessionRepository, ShipmentRepository, UserRepository,
};
use jaybon_relay::trackfeed::TrackfeedClient;
use jaybon_relay::webhook::WebhookNotifier;
use jaybon_service::account::AccountService;
use jaybon_service::payment::PaymentService;
use jaybon_service::shipment::ShipmentService;
use jaybon_service::store::{PaymentStore, ShipmentStore};
use jaybon_service::tracking::TrackingService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and a database
/// pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let session_repo = Arc::new(SessionRepository::new(db.pool().clone()));
    let shipment_repo = Arc::new(ShipmentRepository::new(db.pool().clone()));
    let payment_repo = Arc::new(PaymentRepository::new(db.pool().clone()));
    let shipment_store: Arc<dyn ShipmentStore> = shipment_repo.clone();
    let payment_store: Arc<dyn PaymentStore> = payment_repo.clone();

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&session_repo),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        &config.auth,
    ));

    // ── Relay clients ────────────────────────────────────────────
    let notifier = Arc::new(WebhookNotifier::new(config.relay.clone()));
    let trackfeed = Arc::new(TrackfeedClient::new(config.trackfeed.clone()));

    // ── Services ─────────────────────────────────────────────────
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        PasswordPolicy::new(config.auth.password_min_length),
        Arc::clone(&session_manager),
        config.auth.verification_resend_cooldown_seconds,
    ));
    let shipment_service = Arc::new(ShipmentService::new(
        Arc::clone(&shipment_store),
        Arc::clone(&payment_store),
        Arc::clone(&notifier),
    ));
    let payment_service = Arc::new(PaymentService::new(
        Arc::clone(&payment_store),
        Arc::clone(&shipment_store),
    ));
    let tracking_service = Arc::new(TrackingService::new(
        Arc::clone(&shipment_store),
        Arc::clone(&trackfeed),
    ));

    AppState {
        config: Arc::new(config),
        db,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        session_manager,
        user_repo,
        session_repo,
        shipment_repo,
        payment_repo,
        account_service,
        shipment_service,
        payment_service,
        tracking_service,
    }
}

/// Runs the Jaybon server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db);
    let db = state.db.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Jaybon server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Jaybon server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
