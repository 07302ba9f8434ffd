// src/rules/links.rs

use url::Url;

use crate::common::ValidationResult;

/// Accepts absolute `http`/`https` URLs. Unparseable input is a failed check.
pub fn validate_url(value: &str, required: bool) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            ValidationResult::fail("URL is required")
        } else {
            ValidationResult::ok()
        };
    }

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => ValidationResult::ok(),
        _ => ValidationResult::fail("Please enter a valid URL"),
    }
}
