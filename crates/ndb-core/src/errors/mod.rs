// ABOUTME: Unified error types for NDB client operations
// ABOUTME: Defines ErrorCode numbering and the NdbError enum with structured context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every fallible operation in the client returns [`NdbResult`]. Errors carry
//! enough structure to tell a transport failure from a malformed payload or a
//! missing field, and each one maps onto a stable [`ErrorCode`].

use serde::Serialize;

/// Standard error codes, grouped by numeric range
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller supplied an invalid argument
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent from a payload
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A field was present with the wrong shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // External Services (5000-5999)
    /// The service answered with an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// The service rejected the API key
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// The service rate limited the request
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,

    // Configuration (6000-6999)
    /// Client configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Response body could not be decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
    /// Operation is declared but has no implementation
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented = 9004,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ExternalServiceError => "The nutrition database returned an error",
            Self::ExternalServiceUnavailable => "The nutrition database is unreachable",
            Self::ExternalAuthFailed => "The nutrition database rejected the API key",
            Self::ExternalRateLimited => "The nutrition database rate limit was exceeded",
            Self::ConfigInvalid => "Client configuration is invalid",
            Self::SerializationError => "Response deserialization failed",
            Self::NotImplemented => "The operation is not implemented",
        }
    }
}

/// Errors produced by the NDB client and its value-object factories
#[derive(Debug, thiserror::Error)]
pub enum NdbError {
    /// Connection, DNS, TLS, or timeout failure; built without the request URL
    #[cfg(feature = "transport-errors")]
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success HTTP status without a recognizable service error body
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The service reported an error in its JSON body
    #[error("NDB API error: {message}")]
    Api {
        /// Message reported by the service
        message: String,
    },

    /// Response body parsed but did not have the expected structure
    #[error("Malformed response ({context}): {reason}")]
    MalformedResponse {
        /// Where in the response the problem was found
        context: &'static str,
        /// What was wrong
        reason: String,
    },

    /// Response body was not valid JSON
    #[error("Invalid JSON in {context}")]
    Json {
        /// What was being decoded
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A required key was absent from a source mapping
    #[error("Missing field '{field}' in {entity}")]
    MissingField {
        /// Entity being constructed
        entity: &'static str,
        /// Name of the missing key
        field: &'static str,
    },

    /// A key was present with a value of the wrong shape
    #[error("Invalid field '{field}' in {entity}: expected {expected}")]
    InvalidField {
        /// Entity being constructed
        entity: &'static str,
        /// Name of the offending key
        field: &'static str,
        /// Description of the accepted shape
        expected: &'static str,
    },

    /// Caller supplied an invalid argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation is declared but unimplemented
    #[error("Operation '{operation}' is not implemented")]
    NotImplemented {
        /// Name of the operation
        operation: &'static str,
    },

    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NdbError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a malformed response error
    #[must_use]
    pub fn malformed(context: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context,
            reason: reason.into(),
        }
    }

    /// Map this error onto its standard error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            #[cfg(feature = "transport-errors")]
            Self::Transport(_) => ErrorCode::ExternalServiceUnavailable,
            Self::HttpStatus { status, .. } => match *status {
                401 | 403 => ErrorCode::ExternalAuthFailed,
                429 => ErrorCode::ExternalRateLimited,
                _ => ErrorCode::ExternalServiceError,
            },
            Self::Api { .. } => ErrorCode::ExternalServiceError,
            Self::MalformedResponse { .. } | Self::InvalidField { .. } => ErrorCode::InvalidFormat,
            Self::Json { .. } => ErrorCode::SerializationError,
            Self::MissingField { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::NotImplemented { .. } => ErrorCode::NotImplemented,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Whether the same request could plausibly succeed later.
    ///
    /// The client itself never retries; this is for callers that do.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            #[cfg(feature = "transport-errors")]
            Self::Transport(_) => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for NDB operations
pub type NdbResult<T> = Result<T, NdbError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        let unauthorized = NdbError::HttpStatus {
            status: 403,
            body: String::new(),
        };
        assert_eq!(unauthorized.code(), ErrorCode::ExternalAuthFailed);
        assert!(!unauthorized.is_retryable());

        let throttled = NdbError::HttpStatus {
            status: 429,
            body: String::new(),
        };
        assert_eq!(throttled.code(), ErrorCode::ExternalRateLimited);
        assert!(throttled.is_retryable());

        let unavailable = NdbError::HttpStatus {
            status: 503,
            body: "down".to_owned(),
        };
        assert_eq!(unavailable.code(), ErrorCode::ExternalServiceError);
        assert!(unavailable.is_retryable());
    }

    #[test]
    fn test_missing_field_message() {
        let error = NdbError::MissingField {
            entity: "SearchResult",
            field: "offset",
        };
        assert_eq!(error.code(), ErrorCode::MissingRequiredField);
        assert_eq!(error.to_string(), "Missing field 'offset' in SearchResult");
    }

    #[test]
    fn test_not_implemented() {
        let error = NdbError::NotImplemented {
            operation: "search_list",
        };
        assert_eq!(error.code(), ErrorCode::NotImplemented);
        assert!(error.to_string().contains("search_list"));
    }

    #[test]
    fn test_error_code_serializes_as_name() {
        let json = serde_json::to_string(&ErrorCode::InvalidFormat).unwrap();
        assert_eq!(json, "\"INVALID_FORMAT\"");
        assert!(!ErrorCode::ConfigInvalid.description().is_empty());
    }
}
