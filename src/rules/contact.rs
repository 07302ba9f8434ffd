// src/rules/contact.rs

use regex::Regex;
use std::sync::LazyLock;

use crate::common::{ValidationConfig, ValidationResult};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern compiles"));

pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::fail("Email is required");
    }

    if !EMAIL_RE.is_match(email) {
        return ValidationResult::fail("Please enter a valid email address");
    }

    ValidationResult::ok()
}

/// Whether the address belongs to the institution (staff or student domain).
pub fn is_institutional_email(email: &str, config: &ValidationConfig) -> bool {
    email.ends_with(&config.primary_email_domain) || email.ends_with(&config.student_email_domain)
}

pub fn validate_phone(phone: &str, required: bool) -> ValidationResult {
    if phone.trim().is_empty() {
        return if required {
            ValidationResult::fail("Phone number is required")
        } else {
            ValidationResult::ok()
        };
    }

    let digits: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();

    if !PHONE_RE.is_match(&digits) {
        return ValidationResult::fail("Please enter a valid 10-digit phone number");
    }

    ValidationResult::ok()
}
