//! Session lifecycle manager — open on login, validate per request,
//! close on logout.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use jaybon_core::config::auth::AuthConfig;
use jaybon_core::error::AppError;
use jaybon_database::repositories::SessionRepository;
use jaybon_entity::session::Session;
use jaybon_entity::user::User;

use crate::jwt::{Claims, JwtDecoder, JwtEncoder};

/// Result of opening a session.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OpenedSession {
    /// The created session row.
    pub session: Session,
    /// Signed access token carrying the session ID.
    pub access_token: String,
    /// When the access token expires.
    pub token_expires_at: chrono::DateTime<Utc>,
}

/// Manages the session lifecycle against the database.
#[derive(Debug, Clone)]
pub struct SessionManager {
    session_repo: Arc<SessionRepository>,
    jwt_encoder: Arc<JwtEncoder>,
    jwt_decoder: Arc<JwtDecoder>,
    session_ttl_hours: i64,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        session_repo: Arc<SessionRepository>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            session_repo,
            jwt_encoder,
            jwt_decoder,
            session_ttl_hours: config.session_ttl_hours as i64,
        }
    }

    /// Opens a new session for an authenticated user and issues a token.
    ///
    /// Expired and revoked sessions are swept on each login, best-effort;
    /// a sweep failure does not block the login.
    pub async fn open(&self, user: &User) -> Result<OpenedSession, AppError> {
        match self.session_repo.purge_expired(Utc::now()).await {
            Ok(purged) if purged > 0 => info!(purged, "Purged stale sessions"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Stale session purge failed"),
        }

        let expires_at = Utc::now() + chrono::Duration::hours(self.session_ttl_hours);
        let session = self.session_repo.create(user.id, expires_at).await?;

        let (access_token, token_expires_at) =
            self.jwt_encoder
                .generate_access_token(user.id, session.id, user.role, &user.email)?;

        info!(user_id = %user.id, session_id = %session.id, "Session opened");

        Ok(OpenedSession {
            session,
            access_token,
            token_expires_at,
        })
    }

    /// Validates a bearer token and the session behind it.
    ///
    /// The token signature alone is not enough: the session row must
    /// still exist, be unrevoked, and be unexpired.
    pub async fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.jwt_decoder.decode_access_token(token)?;

        let session = self
            .session_repo
            .find_by_id(claims.session_id())
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;

        if !session.is_active() {
            return Err(AppError::authentication("Session has ended. Please sign in again."));
        }

        Ok(claims)
    }

    /// Closes a session (logout). Idempotent.
    pub async fn close(&self, session_id: Uuid) -> Result<(), AppError> {
        self.session_repo.revoke(session_id).await?;
        info!(session_id = %session_id, "Session closed");
        Ok(())
    }
}
