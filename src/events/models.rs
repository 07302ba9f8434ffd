// src/events/models.rs

use serde::{Deserialize, Serialize};

use crate::common::NumericInput;

// ============================================================================
// Event Models
// ============================================================================

/// Event creation form as submitted by the UI.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<NumericInput>,
}

/// Event create/update body received by the API
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub venue: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<NumericInput>,
}
