//! Contact phone format check
//!
//! A valid phone is 8 to 16 ASCII digits whose first digit is 1-9. No
//! separators, no leading `+`.

use boom_core::models::ValidationReason;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{7,15}$").expect("phone pattern compiles"));

/// Check a phone number against the accepted format
#[inline]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Reason to report for a present-but-malformed phone
pub fn check_phone(phone: Option<&str>) -> Option<ValidationReason> {
    match phone {
        Some(p) if !p.is_empty() && !is_valid_phone(p) => Some(ValidationReason::InvalidPhoneFormat {
            phone: p.to_string(),
        }),
        _ => None,
    }
}
