// src/registration/mod.rs

pub mod models;
pub mod validators;


// Re-export commonly used items
pub use models::RegistrationForm;
pub use validators::{validate_registration_form, RegistrationFormValidator};
