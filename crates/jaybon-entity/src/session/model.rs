//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An active user session.
///
/// Sessions are created on login and revoked on logout or expiry. The
/// session ID is embedded in the JWT and validated on every request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session expires (absolute timeout).
    pub expires_at: DateTime<Utc>,
    /// When the session was revoked by logout, if it has been.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check whether the session is still active (not revoked and not expired).
    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none() && self.expires_at > Utc::now()
    }

    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        let session = Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
            revoked_at: None,
        };
        assert!(session.is_active());

        let revoked = Session {
            revoked_at: Some(Utc::now()),
            ..session.clone()
        };
        assert!(!revoked.is_active());

        let expired = Session {
            expires_at: Utc::now() - chrono::Duration::seconds(1),
            ..session
        };
        assert!(!expired.is_active());
    }
}
