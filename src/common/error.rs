// Error handling types for the API boundary

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{AggregateResult, FormErrors};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    ValidationError { message: String, fields: FormErrors },
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::ValidationError { message, .. } => write!(f, "Validation Error: {}", message),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::InternalServer(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "FormErrors::is_empty")]
    pub fields: FormErrors,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.code().to_string();
        match err {
            ApiError::BadRequest(msg) => ErrorResponse {
                error: msg,
                code,
                fields: FormErrors::new(),
            },
            ApiError::ValidationError { message, fields } => ErrorResponse {
                error: message,
                code,
                fields,
            },
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal error while validating request");
                ErrorResponse {
                    error: msg,
                    code,
                    fields: FormErrors::new(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// Converts a failed aggregate into a validation error
impl From<AggregateResult> for ApiError {
    fn from(result: AggregateResult) -> Self {
        if result.is_valid() {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors()
                .iter()
                .map(|(field, message)| format!("{}: {}", field, message))
                .collect();
            ApiError::ValidationError {
                message: error_messages.join(", "),
                fields: result.into_errors(),
            }
        }
    }
}

/// Deserializes a JSON request body, mapping malformed input to `400 BAD_REQUEST`.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}
