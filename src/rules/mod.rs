// src/rules/mod.rs
//! Field-level rules. Each takes a raw form value and returns a
//! `ValidationResult`; none of them perform I/O or panic on bad input.

pub mod contact;
pub mod links;
pub mod number;
pub mod password;
pub mod temporal;
pub mod text;


// Re-export commonly used items
pub use contact::{is_institutional_email, validate_email, validate_phone};
pub use links::validate_url;
pub use number::{validate_number, NumberOptions};
pub use password::validate_password;
pub use temporal::{
    parse_date_value, time_to_minutes, validate_date, validate_future_date,
    validate_future_date_as_of, validate_time, DateValue,
};
pub use text::{validate_name, validate_required, validate_text_length, LengthOptions};
