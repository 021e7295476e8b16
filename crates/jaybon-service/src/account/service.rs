//! Account service — signup, login, logout, profile, and the email
//! verification side channel with its resend cooldown.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use jaybon_auth::password::{PasswordHasher, PasswordPolicy};
use jaybon_auth::session::manager::{OpenedSession, SessionManager};
use jaybon_core::error::AppError;
use jaybon_database::repositories::UserRepository;
use jaybon_entity::user::model::{CreateUser, UpdateProfile};
use jaybon_entity::user::{User, UserRole};

use crate::context::RequestContext;
use crate::shipment::validate;

/// Signup request data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Login request data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Result of a successful signup or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResult {
    /// The authenticated user.
    pub user: User,
    /// The opened session and its token.
    pub opened: OpenedSession,
}

/// Handles account lifecycle operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
    sessions: Arc<SessionManager>,
    resend_cooldown_seconds: i64,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: PasswordPolicy,
        sessions: Arc<SessionManager>,
        resend_cooldown_seconds: i64,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            policy,
            sessions,
            resend_cooldown_seconds,
        }
    }

    /// Creates an account and opens a first session.
    ///
    /// A verification token is minted immediately; the caller is expected
    /// to deliver it out of band.
    pub async fn signup(&self, req: SignupRequest) -> Result<AuthResult, AppError> {
        if !validate::validate_email(&req.email) {
            return Err(AppError::validation("Enter a valid email address"));
        }
        self.policy.check(&req.password)?;
        if req.display_name.trim().is_empty() {
            return Err(AppError::validation("Display name is required"));
        }

        let phone = match req.phone {
            Some(raw) if !raw.trim().is_empty() => {
                let normalized = validate::normalize_phone(&raw);
                if !validate::validate_phone(&normalized) {
                    return Err(AppError::validation(
                        "Enter a valid phone number (+234 followed by 10 digits)",
                    ));
                }
                Some(normalized)
            }
            _ => None,
        };

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email: req.email.trim().to_lowercase(),
                password_hash,
                display_name: req.display_name.trim().to_string(),
                phone,
                company: req.company.filter(|c| !c.trim().is_empty()),
                role: UserRole::Customer,
            })
            .await?;

        let token = new_verification_token();
        self.user_repo
            .set_verification_token(user.id, &token, Utc::now())
            .await?;

        info!(user_id = %user.id, "Account created");

        let opened = self.sessions.open(&user).await?;
        Ok(AuthResult { user, opened })
    }

    /// Authenticates a user and opens a session.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(req.email.trim())
            .await?
            .ok_or_else(|| {
                AppError::authentication("No account found with this email. Please sign up first.")
            })?;

        let valid = self
            .hasher
            .verify_password(&req.password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication(
                "Incorrect password. Please try again.",
            ));
        }

        self.user_repo.touch_last_login(user.id).await?;
        let opened = self.sessions.open(&user).await?;

        info!(user_id = %user.id, "User logged in");
        Ok(AuthResult { user, opened })
    }

    /// Closes the current session.
    pub async fn logout(&self, ctx: &RequestContext) -> Result<(), AppError> {
        self.sessions.close(ctx.session_id).await
    }

    /// Loads the current user's full record.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.find_user(ctx.user_id).await
    }

    /// Updates the current user's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        mut update: UpdateProfile,
    ) -> Result<User, AppError> {
        if let Some(name) = &update.display_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Display name cannot be empty"));
            }
        }
        if let Some(raw) = update.phone.take() {
            let normalized = validate::normalize_phone(&raw);
            if !validate::validate_phone(&normalized) {
                return Err(AppError::validation(
                    "Enter a valid phone number (+234 followed by 10 digits)",
                ));
            }
            update.phone = Some(normalized);
        }

        let user = self.user_repo.update_profile(ctx.user_id, &update).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Re-sends the verification email, subject to the cooldown.
    ///
    /// Returns the minted token so the caller can deliver it.
    pub async fn resend_verification(&self, ctx: &RequestContext) -> Result<String, AppError> {
        let user = self.find_user(ctx.user_id).await?;

        if user.email_verified {
            return Err(AppError::conflict("This email is already verified"));
        }

        let remaining = user.verification_cooldown_remaining(self.resend_cooldown_seconds);
        if remaining > 0 {
            return Err(AppError::rate_limit(format!(
                "Please wait {remaining} seconds before requesting another verification email"
            )));
        }

        let token = new_verification_token();
        self.user_repo
            .set_verification_token(user.id, &token, Utc::now())
            .await?;

        info!(user_id = %user.id, "Verification email re-sent");
        Ok(token)
    }

    /// Marks an email verified by its token.
    pub async fn verify_email(&self, token: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_verification_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid or expired verification link"))?;

        let verified = self.user_repo.mark_verified(user.id).await?;
        info!(user_id = %verified.id, "Email verified");
        Ok(verified)
    }

    async fn find_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

fn new_verification_token() -> String {
    Uuid::new_v4().simple().to_string()
}
