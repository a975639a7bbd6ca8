//! Shared error response shape for the HTTP API.

use serde::Serialize;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_sets_code() {
        let error = ErrorResponse::bad_request("Invalid id");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid id");
    }

    #[test]
    fn not_found_sets_code() {
        let error = ErrorResponse::not_found("Property not found");
        assert_eq!(error.code, "NOT_FOUND");
    }

    #[test]
    fn serializes_without_extras() {
        let json = serde_json::to_value(ErrorResponse::internal("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "INTERNAL_ERROR", "message": "boom"}));
    }
}
