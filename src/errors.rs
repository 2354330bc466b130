// ABOUTME: Structured error types for Nutrition Tracker API client operations
// ABOUTME: Configuration, input validation, upstream API, and transport error kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use thiserror::Error;

/// Result alias for client operations
pub type ClientResult<T> = Result<T, NutritionError>;

/// Errors returned by the Nutrition Tracker API client
#[derive(Debug, Error)]
pub enum NutritionError {
    /// Client construction was rejected due to invalid configuration
    #[error("Configuration error: {reason}")]
    Configuration {
        /// Why the configuration was rejected
        reason: String,
    },

    /// The food description was rejected before any network activity
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Why the query was rejected
        reason: &'static str,
    },

    /// The upstream API returned a non-200 status or reported failure in its body
    #[error("API error: {message}")]
    Api {
        /// HTTP status code for non-200 responses, `None` when the failure
        /// was detected from the response body
        status_code: Option<u16>,
        /// Error message from the response body, or a generic fallback
        message: String,
    },

    /// Transport-level failure (connection, TLS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl NutritionError {
    /// HTTP status code attached to an API error, if any
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_uses_message() {
        let err = NutritionError::Api {
            status_code: Some(404),
            message: "not found".to_owned(),
        };
        assert_eq!(err.to_string(), "API error: not found");
    }

    #[test]
    fn test_status_code_accessor() {
        let err = NutritionError::Api {
            status_code: Some(429),
            message: "rate limited".to_owned(),
        };
        assert_eq!(err.status_code(), Some(429));

        let err = NutritionError::Api {
            status_code: None,
            message: "Request failed".to_owned(),
        };
        assert_eq!(err.status_code(), None);

        let err = NutritionError::InvalidQuery {
            reason: "food description text is required",
        };
        assert_eq!(err.status_code(), None);
    }
}
