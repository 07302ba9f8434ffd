// src/rules/text.rs

use regex::Regex;
use std::sync::LazyLock;

use crate::common::{Blank, ValidationResult};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles"));

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;

/// Bounds for [`validate_text_length`]. Everything is optional by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthOptions {
    pub required: bool,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthOptions {
    pub fn required(min: usize, max: usize) -> Self {
        Self {
            required: true,
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Input length as the browser counts it (UTF-16 code units).
pub(crate) fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_name(name: &str, field_name: &str) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail(format!("{} is required", field_name));
    }

    let length = utf16_len(trimmed);
    if length < NAME_MIN_LENGTH {
        return ValidationResult::fail(format!(
            "{} must be at least {} characters long",
            field_name, NAME_MIN_LENGTH
        ));
    }
    if length > NAME_MAX_LENGTH {
        return ValidationResult::fail(format!(
            "{} must be less than {} characters",
            field_name, NAME_MAX_LENGTH
        ));
    }

    if !NAME_RE.is_match(trimmed) {
        return ValidationResult::fail(format!(
            "{} can only contain letters, spaces, hyphens, and apostrophes",
            field_name
        ));
    }

    ValidationResult::ok()
}

/// Fails when the value is missing or, for text, blank.
pub fn validate_required<T: Blank + ?Sized>(value: Option<&T>, field_name: &str) -> ValidationResult {
    match value {
        Some(v) if !v.is_blank() => ValidationResult::ok(),
        _ => ValidationResult::fail(format!("{} is required", field_name)),
    }
}

pub fn validate_text_length(value: &str, field_name: &str, options: LengthOptions) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if options.required {
            ValidationResult::fail(format!("{} is required", field_name))
        } else {
            ValidationResult::ok()
        };
    }

    let length = utf16_len(trimmed);
    if let Some(min) = options.min {
        if length < min {
            return ValidationResult::fail(format!(
                "{} must be at least {} characters",
                field_name, min
            ));
        }
    }
    if let Some(max) = options.max {
        if length > max {
            return ValidationResult::fail(format!(
                "{} must be no more than {} characters",
                field_name, max
            ));
        }
    }

    ValidationResult::ok()
}
