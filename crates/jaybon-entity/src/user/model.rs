//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user of the Jaybon portal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique email address used for login.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Contact phone number (`+234` format).
    pub phone: Option<String>,
    /// Company name, for corporate accounts.
    pub company: Option<String>,
    /// User role.
    pub role: UserRole,
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// Outstanding email verification token, if any.
    #[serde(skip_serializing)]
    pub verification_token: Option<String>,
    /// When a verification email was last sent. Drives the resend cooldown.
    pub verification_sent_at: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Seconds remaining before another verification email may be sent.
    ///
    /// Returns 0 when no email has been sent yet or the cooldown elapsed.
    pub fn verification_cooldown_remaining(&self, cooldown_seconds: i64) -> i64 {
        match self.verification_sent_at {
            Some(sent_at) => {
                let elapsed = (Utc::now() - sent_at).num_seconds();
                (cooldown_seconds - elapsed).max(0)
            }
            None => 0,
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub display_name: String,
    /// Contact phone number (optional).
    pub phone: Option<String>,
    /// Company name (optional).
    pub company: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New company name.
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(sent_at: Option<DateTime<Utc>>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: "Ada".to_string(),
            phone: None,
            company: None,
            role: UserRole::Customer,
            email_verified: false,
            verification_token: None,
            verification_sent_at: sent_at,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_cooldown_zero_when_never_sent() {
        let user = sample_user(None);
        assert_eq!(user.verification_cooldown_remaining(60), 0);
    }

    #[test]
    fn test_cooldown_counts_down() {
        let user = sample_user(Some(Utc::now() - chrono::Duration::seconds(45)));
        let remaining = user.verification_cooldown_remaining(60);
        assert!(remaining > 0 && remaining <= 15);
    }

    #[test]
    fn test_cooldown_elapsed() {
        let user = sample_user(Some(Utc::now() - chrono::Duration::seconds(120)));
        assert_eq!(user.verification_cooldown_remaining(60), 0);
    }
}
