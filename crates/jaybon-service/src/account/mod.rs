//! Account lifecycle: signup, login, profile, email verification.

pub mod service;

pub use service::{AccountService, LoginRequest, SignupRequest};
