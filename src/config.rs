// ABOUTME: Configuration for the Nutrition Tracker API client
// ABOUTME: API key, endpoint settings, timeouts, env loading, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::{self, env_config};
use crate::errors::NutritionError;
use std::time::Duration;

/// Configuration for the Nutrition Tracker API client
///
/// Validated once at client construction and immutable afterwards. The
/// endpoint fields default to the production RapidAPI gateway; tests point
/// them at a local mock upstream instead.
#[derive(Debug, Clone)]
pub struct NutritionConfig {
    /// RapidAPI key used to authenticate requests
    pub api_key: String,
    /// Base URL for the Nutrition Tracker API
    pub base_url: String,
    /// Value sent in the RapidAPI host header
    pub api_host: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: constants::DEFAULT_BASE_URL.to_owned(),
            api_host: constants::DEFAULT_API_HOST.to_owned(),
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(constants::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl NutritionConfig {
    /// Create a configuration with the given API key and default endpoints
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `NUTRITION_API_KEY` (required), with optional `NUTRITION_API_BASE`
    /// and `NUTRITION_API_HOST` overrides.
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::Configuration` if `NUTRITION_API_KEY` is unset.
    pub fn from_env() -> Result<Self, NutritionError> {
        let api_key = env_config::api_key().ok_or_else(|| NutritionError::Configuration {
            reason: "NUTRITION_API_KEY is not set".to_owned(),
        })?;

        Ok(Self {
            api_key,
            base_url: env_config::api_base(),
            api_host: env_config::api_host(),
            ..Self::default()
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::Configuration` if the API key is empty or
    /// whitespace-only.
    pub fn validate(&self) -> Result<(), NutritionError> {
        if self.api_key.trim().is_empty() {
            return Err(NutritionError::Configuration {
                reason: "API key is required. Get yours at: \
                         https://rapidapi.com/anonymous617461746174/api/nutrition-tracker-api"
                    .to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_production() {
        let config = NutritionConfig::default();

        assert_eq!(config.base_url, "https://nutrition-tracker-api.p.rapidapi.com");
        assert_eq!(config.api_host, "nutrition-tracker-api.p.rapidapi.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_new_sets_api_key() {
        let config = NutritionConfig::new("my_key");

        assert_eq!(config.api_key, "my_key");
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = NutritionConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace_key() {
        let config = NutritionConfig::new("   \t ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_non_blank_key() {
        let config = NutritionConfig::new("k");
        assert!(config.validate().is_ok());
    }
}
