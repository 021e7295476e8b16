//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Server-side session TTL in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Cooldown between verification email resends, in seconds.
    #[serde(default = "default_resend_cooldown")]
    pub verification_resend_cooldown_seconds: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            session_ttl_hours: default_session_ttl(),
            password_min_length: default_password_min(),
            verification_resend_cooldown_seconds: default_resend_cooldown(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    60
}

fn default_session_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    6
}

fn default_resend_cooldown() -> i64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.password_min_length, 6);
        assert_eq!(config.verification_resend_cooldown_seconds, 60);
        assert_eq!(config.session_ttl_hours, 24);
    }
}
