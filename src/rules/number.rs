// src/rules/number.rs

use crate::common::{Blank, NumericInput, ValidationResult};

/// Constraints for [`validate_number`]. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberOptions {
    pub required: bool,
    pub integer: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberOptions {
    pub fn integer_between(min: f64, max: f64) -> Self {
        Self {
            required: false,
            integer: true,
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Absent and blank text are "not supplied"; `Number(0.0)` is a supplied zero.
pub fn validate_number(
    value: Option<&NumericInput>,
    field_name: &str,
    options: NumberOptions,
) -> ValidationResult {
    let value = match value {
        Some(v) if !v.is_blank() => v,
        _ => {
            return if options.required {
                ValidationResult::fail(format!("{} is required", field_name))
            } else {
                ValidationResult::ok()
            };
        }
    };

    let number = match value {
        NumericInput::Number(n) => Some(*n),
        NumericInput::Text(text) => text.trim().parse::<f64>().ok(),
    };

    let number = match number {
        Some(n) if n.is_finite() => n,
        _ => return ValidationResult::fail(format!("{} must be a valid number", field_name)),
    };

    if options.integer && number.fract() != 0.0 {
        return ValidationResult::fail(format!("{} must be a whole number", field_name));
    }

    if let Some(min) = options.min {
        if number < min {
            return ValidationResult::fail(format!("{} must be at least {}", field_name, min));
        }
    }

    if let Some(max) = options.max {
        if number > max {
            return ValidationResult::fail(format!("{} must be at most {}", field_name, max));
        }
    }

    ValidationResult::ok()
}
