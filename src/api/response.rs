//! Response types for the Hours Allocation Engine API.
//!
//! This module defines the success payload for `/allocate` along with the
//! error envelope the handler returns for rejected requests.

use serde::{Deserialize, Serialize};

use crate::allocation::ValidationSummary;
use crate::models::AllocationRecord;

/// Success payload for the `/allocate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    /// The allocation records, in input row order with split records in
    /// their fixed primary-then-maquila order.
    pub records: Vec<AllocationRecord>,
    /// The per-(date, area, employee) validation view.
    pub validation: ValidationSummary,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serializes_without_empty_details() {
        let error = ApiError::new("MALFORMED_JSON", "bad body");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details() {
        let error = ApiError::with_details("CONFIG_ERROR", "boom", "more");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"more\""));
    }

}
