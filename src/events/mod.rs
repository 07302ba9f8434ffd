// src/events/mod.rs

pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
pub use validators::{
    validate_event_form, validate_event_payload, EventFormValidator, EventPayloadValidator,
};
