// ABOUTME: Nutrition Tracker API client for natural-language nutrition queries
// ABOUTME: Handles request dispatch, response decoding, and nutrient projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition Tracker API client
//!
//! Wraps the upstream `/v1/calculate/natural` endpoint: callers supply a
//! free-text food description and receive the upstream nutrient totals as a
//! [`NutritionFacts`] table.

use crate::config::NutritionConfig;
use crate::constants::{CALCULATE_NATURAL_PATH, RAPIDAPI_HOST_HEADER, RAPIDAPI_KEY_HEADER};
use crate::errors::{ClientResult, NutritionError};
use crate::http_client::client_with_timeouts;
use crate::models::{NutrientReading, NutritionFacts};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Fallback message when a non-200 response carries no usable `"error"` field
const UNKNOWN_ERROR_FALLBACK: &str = "Unknown error occurred";

/// Fallback message when a 200 response does not report success
const REQUEST_FAILED_FALLBACK: &str = "Request failed";

/// Request body for the natural-language calculation endpoint
#[derive(Debug, Serialize)]
struct CalculateRequest<'a> {
    /// Natural-language food description
    text: &'a str,
}

/// Client for the Nutrition Tracker API
///
/// Owns the API key and a pooled HTTP transport. The transport is reused
/// across sequential calls; the client holds no per-call state.
#[derive(Debug)]
pub struct NutritionClient {
    client: Client,
    config: NutritionConfig,
}

impl NutritionClient {
    /// Create a client with the given RapidAPI key and default endpoints
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::Configuration` if the key is empty or
    /// whitespace-only.
    pub fn new(api_key: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(NutritionConfig::new(api_key))
    }

    /// Create a client from environment variables
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::Configuration` if `NUTRITION_API_KEY` is
    /// unset or blank.
    pub fn from_env() -> ClientResult<Self> {
        Self::with_config(NutritionConfig::from_env()?)
    }

    /// Create a client with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::Configuration` if the API key is empty or
    /// whitespace-only.
    pub fn with_config(config: NutritionConfig) -> ClientResult<Self> {
        config.validate()?;
        let client = client_with_timeouts(config.timeout, config.connect_timeout);
        Ok(Self { client, config })
    }

    /// Get the client configuration
    #[must_use]
    pub fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Calculate nutrition for a natural-language food description
    ///
    /// Examples: `"100g chicken breast"`, `"2 eggs and 1 cup rice"`.
    ///
    /// Returns the upstream `totalNutrients` table keyed by nutrient name. An
    /// empty table is a valid result when the upstream reports success but
    /// lists no nutrients.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The description is empty or whitespace-only
    /// - The HTTP request fails (connection, TLS, timeout)
    /// - The API returns a non-200 status or a body without `success: true`
    pub async fn calculate(&self, text: &str) -> ClientResult<NutritionFacts> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NutritionError::InvalidQuery {
                reason: "food description text is required",
            });
        }

        let url = format!("{}{CALCULATE_NATURAL_PATH}", self.config.base_url);
        debug!(url = %url, "Dispatching nutrition calculation request");

        let response = self
            .client
            .post(&url)
            .header(RAPIDAPI_KEY_HEADER, &self.config.api_key)
            .header(RAPIDAPI_HOST_HEADER, &self.config.api_host)
            .json(&CalculateRequest { text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_else(|e| {
            warn!("Failed to read response body: {e}");
            String::new()
        });

        decode_calculate_response(status, &body)
    }
}

/// Decode an upstream response into a nutrient table
///
/// Status is checked first, then the body's `success` flag; only then is the
/// `totalNutrients` section projected.
fn decode_calculate_response(status: StatusCode, body: &str) -> ClientResult<NutritionFacts> {
    if status != StatusCode::OK {
        return Err(NutritionError::Api {
            status_code: Some(status.as_u16()),
            message: extract_error_message(body)
                .unwrap_or_else(|| UNKNOWN_ERROR_FALLBACK.to_owned()),
        });
    }

    let payload: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    if payload.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(NutritionError::Api {
            status_code: None,
            message: extract_error_message(body)
                .unwrap_or_else(|| REQUEST_FAILED_FALLBACK.to_owned()),
        });
    }

    Ok(project_nutrients(&payload))
}

/// Project the `totalNutrients` section of a success payload
///
/// Entries must carry a numeric `value` and a string `unit`; extra fields are
/// tolerated, anything else is skipped. A missing section yields an empty
/// table.
fn project_nutrients(payload: &Value) -> NutritionFacts {
    let Some(entries) = payload.get("totalNutrients").and_then(Value::as_object) else {
        return NutritionFacts::new();
    };

    let mut facts = NutritionFacts::new();
    for (name, entry) in entries {
        match serde_json::from_value::<NutrientReading>(entry.clone()) {
            Ok(reading) => facts.insert(name.clone(), reading),
            Err(e) => debug!(nutrient = %name, "Skipping malformed nutrient entry: {e}"),
        }
    }
    facts
}

/// Extract the top-level `"error"` string field from a response body
///
/// Returns `None` for non-JSON bodies or when the field is absent or not a
/// string.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("error")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}
