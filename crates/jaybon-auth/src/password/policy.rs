//! Minimum-length password policy.

use jaybon_core::error::AppError;

/// Enforces the password policy at signup.
///
/// The only rule is a minimum length; there is no complexity requirement.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy with the given minimum length.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Checks a candidate password against the policy.
    pub fn check(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        let policy = PasswordPolicy::new(6);
        assert!(policy.check("12345").is_err());
        assert!(policy.check("123456").is_ok());
    }
}
