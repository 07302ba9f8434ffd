// src/common/config.rs
//! Runtime configuration for the rule engine.
//! Institutional email domains can be overridden per deployment.

use std::env;
use thiserror::Error;
use tracing::{debug, warn};

/// Domain suffix of staff/faculty addresses.
pub const PRIMARY_EMAIL_DOMAIN: &str = "@university.edu";

/// Domain suffix of student addresses.
pub const STUDENT_EMAIL_DOMAIN: &str = "@student.university.edu";

pub const PRIMARY_DOMAIN_VAR: &str = "INSTITUTION_EMAIL_DOMAIN";
pub const STUDENT_DOMAIN_VAR: &str = "STUDENT_EMAIL_DOMAIN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid email domain for {var}: '{value}' (expected something like @example.edu)")]
    InvalidDomain { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub primary_email_domain: String,
    pub student_email_domain: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            primary_email_domain: PRIMARY_EMAIL_DOMAIN.to_string(),
            student_email_domain: STUDENT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl ValidationConfig {
    pub fn new(
        primary_email_domain: &str,
        student_email_domain: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            primary_email_domain: check_domain(PRIMARY_DOMAIN_VAR, primary_email_domain)?,
            student_email_domain: check_domain(STUDENT_DOMAIN_VAR, student_email_domain)?,
        })
    }

    /// Loads domains from the environment (and `.env` if present).
    /// Unset variables fall back to the built-in domains.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let primary =
            env::var(PRIMARY_DOMAIN_VAR).unwrap_or_else(|_| PRIMARY_EMAIL_DOMAIN.to_string());
        let student =
            env::var(STUDENT_DOMAIN_VAR).unwrap_or_else(|_| STUDENT_EMAIL_DOMAIN.to_string());

        let config = Self::new(&primary, &student)?;
        debug!(
            primary = %config.primary_email_domain,
            student = %config.student_email_domain,
            "Loaded validation config"
        );
        Ok(config)
    }

    /// Like [`ValidationConfig::from_env`], but a bad value only logs a warning.
    pub fn from_env_or_default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                warn!("{}. Falling back to default email domains.", e);
                Self::default()
            }
        }
    }
}

fn check_domain(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let domain = value.trim();
    let well_formed = domain.starts_with('@')
        && domain.len() > 1
        && domain[1..].contains('.')
        && !domain[1..].contains('@')
        && !domain.chars().any(char::is_whitespace);

    if well_formed {
        Ok(domain.to_string())
    } else {
        Err(ConfigError::InvalidDomain {
            var,
            value: value.to_string(),
        })
    }
}
