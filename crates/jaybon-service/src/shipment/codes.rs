//! Tracking, waybill, and payment reference code generation.
//!
//! Codes are built from the current Unix time in milliseconds plus a
//! random suffix. Uniqueness is only as strong as the suffix; no
//! persistence-side check is performed and a same-millisecond collision
//! is accepted as rare enough for display purposes.

use chrono::Utc;
use rand::RngExt;

/// Prefix shared by all generated codes.
const CODE_PREFIX: &str = "JBL";

/// Generates a standard tracking code: `JBL-<millis>-<3 digits>`.
pub fn generate_tracking_code() -> String {
    format_code(CODE_PREFIX, Utc::now().timestamp_millis(), random_suffix())
}

/// Generates a waybill code: `JBL-WB-<millis>-<3 digits>`.
pub fn generate_waybill_code() -> String {
    format_code(
        &format!("{CODE_PREFIX}-WB"),
        Utc::now().timestamp_millis(),
        random_suffix(),
    )
}

/// Generates a payment reference for the gateway popup:
/// `JBL-PAY-<millis>-<random 0..=999999>`.
pub fn generate_payment_reference() -> String {
    let suffix = rand::rng().random_range(0..=999_999u32);
    format!(
        "{CODE_PREFIX}-PAY-{}-{suffix}",
        Utc::now().timestamp_millis()
    )
}

fn format_code(prefix: &str, millis: i64, suffix: u32) -> String {
    format!("{prefix}-{millis}-{suffix}")
}

fn random_suffix() -> u32 {
    rand::rng().random_range(100..=999)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(code: &str) -> Vec<&str> {
        code.split('-').collect()
    }

    #[test]
    fn test_tracking_code_shape() {
        let code = generate_tracking_code();
        let parts = parts(&code);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "JBL");
        assert!(parts[1].parse::<i64>().is_ok());
        let suffix: u32 = parts[2].parse().unwrap();
        assert_eq!(parts[2].len(), 3);
        assert!((100..=999).contains(&suffix));
    }

    #[test]
    fn test_waybill_code_shape() {
        let code = generate_waybill_code();
        let parts = parts(&code);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "JBL");
        assert_eq!(parts[1], "WB");
        assert!(parts[2].parse::<i64>().is_ok());
        assert!((100..=999).contains(&parts[3].parse::<u32>().unwrap()));
    }

    #[test]
    fn test_payment_reference_shape() {
        let reference = generate_payment_reference();
        let parts = parts(&reference);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "JBL");
        assert_eq!(parts[1], "PAY");
        assert!(parts[2].parse::<i64>().is_ok());
        assert!(parts[3].parse::<u32>().unwrap() <= 999_999);
    }

    #[test]
    fn test_same_millisecond_codes_may_collide() {
        // Two codes minted in the same millisecond differ only in the
        // 3-digit suffix; nothing else guarantees uniqueness.
        let a = format_code("JBL", 1_700_000_000_000, 123);
        let b = format_code("JBL", 1_700_000_000_000, 123);
        assert_eq!(a, b);
    }
}
