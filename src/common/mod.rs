// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ValidationConfig};
pub use error::{parse_json, ApiError};
pub use helpers::safe_email_log;
pub use validation::{
    ensure_valid, AggregateResult, Blank, FormErrors, NumericInput, ValidationResult, Validator,
};
