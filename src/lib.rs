// src/lib.rs
//! Validation rules for the event-management app.
//!
//! Field rules live in [`rules`]; [`events`] and [`registration`] compose them
//! into whole-form validators that report every failing field at once.
//! [`common`] holds the shared result types and the HTTP error seam used by
//! the API layer.

// ============================================================================
// MODULES
// ============================================================================

pub mod common;
pub mod events;
pub mod registration;
pub mod rules;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use common::{
    ensure_valid, AggregateResult, ApiError, FormErrors, NumericInput, ValidationConfig,
    ValidationResult, Validator,
};
pub use events::{validate_event_form, validate_event_payload, EventForm, EventPayload};
pub use registration::{validate_registration_form, RegistrationForm};
