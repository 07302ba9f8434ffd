// src/registration/validators.rs

use tracing::debug;

use super::models::RegistrationForm;
use crate::common::{safe_email_log, AggregateResult, ValidationConfig, Validator};
use crate::rules::{
    is_institutional_email, validate_email, validate_name, validate_password, validate_phone,
    validate_required,
};

pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Registration form rules.
///
/// External registrants (non-institutional email) must name their college or
/// organization; institutional users may leave it blank.
#[derive(Debug, Clone)]
pub struct RegistrationFormValidator {
    config: ValidationConfig,
    phone_required: bool,
}

impl Default for RegistrationFormValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl RegistrationFormValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            phone_required: true,
        }
    }

    pub fn phone_optional(mut self) -> Self {
        self.phone_required = false;
        self
    }
}

impl Validator<RegistrationForm> for RegistrationFormValidator {
    fn validate(&self, data: &RegistrationForm) -> AggregateResult {
        let mut result = AggregateResult::new();

        result.record("email", validate_email(&data.email));
        result.record("password", validate_password(&data.password));

        // Validate confirmation against the raw password, no trimming
        if data.confirm_password.is_empty() {
            result.add_error("confirmPassword", CONFIRM_PASSWORD_REQUIRED);
        } else if data.confirm_password != data.password {
            result.add_error("confirmPassword", PASSWORDS_DO_NOT_MATCH);
        }

        result.record("firstName", validate_name(&data.first_name, "First name"));
        result.record("lastName", validate_name(&data.last_name, "Last name"));
        result.record("phone", validate_phone(&data.phone, self.phone_required));

        let institutional = is_institutional_email(&data.email, &self.config);
        if !institutional {
            result.record(
                "collegeName",
                validate_required(Some(data.college_name.as_str()), "College/Organization name"),
            );
        }

        if !result.is_valid() {
            debug!(
                form = "registration",
                email = %safe_email_log(&data.email),
                institutional,
                error_count = result.errors().len(),
                "Registration form failed validation"
            );
        }

        result
    }
}

pub fn validate_registration_form(form: &RegistrationForm) -> AggregateResult {
    RegistrationFormValidator::default().validate(form)
}
