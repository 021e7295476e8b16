//! # jaybon-auth
//!
//! Authentication primitives for the Jaybon portal.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `session` — Server-side session lifecycle (open, validate, close)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
pub use session::SessionManager;
