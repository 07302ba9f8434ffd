// Common validation types and traits

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::error::ApiError;

/// Outcome of a single field rule.
///
/// A passing result always has an empty `message`; a failing one always has a
/// non-empty one. Build it through [`ValidationResult::ok`],
/// [`ValidationResult::ok_with_warning`] or [`ValidationResult::fail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValidationResultWire")]
pub struct ValidationResult {
    valid: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
            warning: None,
        }
    }

    /// Valid, with a non-blocking hint for the user
    pub fn ok_with_warning(warning: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: String::new(),
            warning: Some(warning.into()),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            warning: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}

#[derive(Deserialize)]
struct ValidationResultWire {
    valid: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    warning: Option<String>,
}

impl TryFrom<ValidationResultWire> for ValidationResult {
    type Error = String;

    fn try_from(wire: ValidationResultWire) -> Result<Self, Self::Error> {
        match (wire.valid, wire.message.is_empty()) {
            (true, true) => Ok(Self {
                valid: true,
                message: String::new(),
                warning: wire.warning,
            }),
            (false, false) => Ok(Self::fail(wire.message)),
            (true, false) => Err("a valid result cannot carry an error message".to_string()),
            (false, true) => Err("an invalid result needs an error message".to_string()),
        }
    }
}

/// Field name -> message. A missing key means the field passed.
pub type FormErrors = BTreeMap<String, String>;

/// Result of running every field rule of a form.
///
/// Validity is derived from the error map: the form passed iff no field
/// recorded an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AggregateResultWire", into = "AggregateResultWire")]
pub struct AggregateResult {
    errors: FormErrors,
    warnings: FormErrors,
}

impl AggregateResult {
    pub fn new() -> Self {
        Self {
            errors: FormErrors::new(),
            warnings: FormErrors::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.insert(field.to_string(), message.to_string());
    }

    /// Records a field rule outcome under `field`.
    ///
    /// Returns whether the field passed so callers can gate cross-field checks.
    pub fn record(&mut self, field: &str, result: ValidationResult) -> bool {
        if !result.is_valid() {
            self.add_error(field, result.message());
            return false;
        }
        if let Some(warning) = result.warning() {
            self.add_warning(field, warning);
        }
        true
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn warnings(&self) -> &FormErrors {
        &self.warnings
    }

    pub fn into_errors(self) -> FormErrors {
        self.errors
    }
}

impl Default for AggregateResult {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON shape of [`AggregateResult`]; `valid` is written out for the UI and
/// checked against `errors` on the way in.
#[derive(Serialize, Deserialize)]
struct AggregateResultWire {
    valid: bool,
    #[serde(default)]
    errors: FormErrors,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    warnings: FormErrors,
}

impl From<AggregateResult> for AggregateResultWire {
    fn from(result: AggregateResult) -> Self {
        Self {
            valid: result.is_valid(),
            errors: result.errors,
            warnings: result.warnings,
        }
    }
}

impl TryFrom<AggregateResultWire> for AggregateResult {
    type Error = String;

    fn try_from(wire: AggregateResultWire) -> Result<Self, Self::Error> {
        if wire.valid != wire.errors.is_empty() {
            return Err(format!(
                "valid={} does not match {} field error(s)",
                wire.valid,
                wire.errors.len()
            ));
        }
        Ok(Self {
            errors: wire.errors,
            warnings: wire.warnings,
        })
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> AggregateResult;
}

/// Rejects a failed aggregate the way API handlers do: logs the field errors
/// and turns them into a `400 VALIDATION_ERROR`.
pub fn ensure_valid(result: AggregateResult, context: &str) -> Result<AggregateResult, ApiError> {
    if result.is_valid() {
        return Ok(result);
    }

    warn!(
        context = %context,
        errors = ?result.errors(),
        "Validation failed"
    );
    Err(ApiError::from(result))
}

/// Values that can be checked for presence by `validate_required`.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

// Numbers and booleans are present whatever their value, zero and false included.
impl Blank for f64 {
    fn is_blank(&self) -> bool {
        false
    }
}

impl Blank for i64 {
    fn is_blank(&self) -> bool {
        false
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        false
    }
}

/// A numeric form field as it arrives from the UI or a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl Blank for NumericInput {
    fn is_blank(&self) -> bool {
        match self {
            NumericInput::Number(_) => false,
            NumericInput::Text(text) => text.is_blank(),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}
