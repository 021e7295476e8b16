//! Pure form validators.
//!
//! Each failed check produces an error keyed by field name; submission is
//! blocked while any required field is blank or invalid.

use std::collections::BTreeMap;

use jaybon_core::error::AppError;

/// Accumulates per-field validation errors.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Whether any errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts into a validation `AppError` listing every field, or
    /// `Ok(())` when empty.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let detail = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(AppError::validation(detail))
    }

    /// Checks that a required field is non-blank.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required");
        }
    }

    /// Checks a phone field.
    pub fn require_phone(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required");
        } else if !validate_phone(value) {
            self.add(field, "Enter a valid phone number (+234 followed by 10 digits)");
        }
    }

    /// Checks an email field.
    pub fn require_email(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required");
        } else if !validate_email(value.trim()) {
            self.add(field, "Enter a valid email address");
        }
    }
}

/// Validates a Nigerian phone number: `+234` followed by exactly 10 digits.
pub fn validate_phone(phone: &str) -> bool {
    let Some(rest) = phone.strip_prefix("+234") else {
        return false;
    };
    rest.len() == 10 && rest.chars().all(|c| c.is_ascii_digit())
}

/// Normalizes raw phone input the way the forms do: force the `+234`
/// prefix, strip every non-digit after it, and truncate to 10 digits.
pub fn normalize_phone(input: &str) -> String {
    let rest = input
        .trim()
        .strip_prefix("+234")
        .unwrap_or(input.trim());
    let digits: String = rest.chars().filter(|c| c.is_ascii_digit()).take(10).collect();
    format!("+234{digits}")
}

/// Validates a minimal `local@domain.tld` email shape.
pub fn validate_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let is_run = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace());
    if !is_run(local) || !is_run(domain) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => is_run(head) && is_run(tld),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_exact_shape() {
        assert!(validate_phone("+2348012345678"));
    }

    #[test]
    fn test_phone_rejects_wrong_lengths_and_prefixes() {
        assert!(!validate_phone("+234801234567")); // 9 digits
        assert!(!validate_phone("+23480123456789")); // 11 digits
        assert!(!validate_phone("08012345678")); // missing prefix
        assert!(!validate_phone("+234801234567a"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("0801 234 5678"), "+2348012345678");
        assert_eq!(normalize_phone("+234 (801) 234-5678"), "+2348012345678");
        // Overlong input is truncated to 10 digits.
        assert_eq!(normalize_phone("80123456789012"), "+2348012345678");
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@mail.example.com"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a.b.co"));
        assert!(!validate_email("a@b co.ng"));
        assert!(!validate_email("a@.co"));
    }

    #[test]
    fn test_require_email() {
        let mut errors = FieldErrors::new();
        errors.require_email("sender_email", "guest@example.com");
        assert!(errors.is_empty());

        let mut errors = FieldErrors::new();
        errors.require_email("sender_email", "not-an-email");
        errors.require_email("other_email", " ");
        let err = errors.into_result().unwrap_err();
        assert!(err.message.contains("sender_email"));
        assert!(err.message.contains("other_email"));
    }

    #[test]
    fn test_field_errors_collect_by_key() {
        let mut errors = FieldErrors::new();
        errors.require("sender_name", "  ");
        errors.require_phone("sender_phone", "0801");
        errors.require("package_description", "Documents");

        let err = errors.into_result().unwrap_err();
        assert!(err.message.contains("sender_name"));
        assert!(err.message.contains("sender_phone"));
        assert!(!err.message.contains("package_description"));
    }
}
