// src/registration/models.rs

use serde::{Deserialize, Serialize};

/// Sign-up form as submitted by the UI.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub college_name: String,
}
