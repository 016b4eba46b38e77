//! Shared JSON body for every error response.

use serde::Serialize;

/// `{ "number": ..., "error": true, "code": ..., "message": ... }`
///
/// `number` echoes the offending raw input and is omitted when there is
/// none (missing parameter, unmatched route).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub error: bool,
    pub code: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            number: None,
            error: true,
            code,
            message: message.into(),
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}
