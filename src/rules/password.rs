// src/rules/password.rs

use super::text::utf16_len;
use crate::common::ValidationResult;

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 128;

pub const WEAK_PASSWORD_WARNING: &str = "For better security, use a mix of letters and numbers";

/// Length is enforced; letter/digit mix is only advised.
///
/// Length is measured in UTF-16 code units, the unit browsers report for
/// form input lengths.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::fail("Password is required");
    }

    let length = utf16_len(password);
    if length < PASSWORD_MIN_LENGTH {
        return ValidationResult::fail(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LENGTH
        ));
    }
    if length > PASSWORD_MAX_LENGTH {
        return ValidationResult::fail(format!(
            "Password must be less than {} characters",
            PASSWORD_MAX_LENGTH
        ));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return ValidationResult::ok_with_warning(WEAK_PASSWORD_WARNING);
    }

    ValidationResult::ok()
}
