//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jaybon_auth::jwt::decoder::JwtDecoder;
use jaybon_auth::jwt::encoder::JwtEncoder;
use jaybon_auth::password::hasher::PasswordHasher;
use jaybon_auth::session::manager::SessionManager;
use jaybon_core::config::AppConfig;

use jaybon_database::DatabasePool;
use jaybon_database::repositories::payment::PaymentRepository;
use jaybon_database::repositories::session::SessionRepository;
use jaybon_database::repositories::shipment::ShipmentRepository;
use jaybon_database::repositories::user::UserRepository;

use jaybon_service::account::service::AccountService;
use jaybon_service::payment::service::PaymentService;
use jaybon_service::shipment::service::ShipmentService;
use jaybon_service::tracking::service::TrackingService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool wrapper
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,
    /// Shipment repository
    pub shipment_repo: Arc<ShipmentRepository>,
    /// Payment repository
    pub payment_repo: Arc<PaymentRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account lifecycle service
    pub account_service: Arc<AccountService>,
    /// Shipment submission and dashboard service
    pub shipment_service: Arc<ShipmentService>,
    /// Payment management service
    pub payment_service: Arc<PaymentService>,
    /// Public tracking service
    pub tracking_service: Arc<TrackingService>,
}
