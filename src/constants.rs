// ABOUTME: Endpoint paths, header names, and default settings for the Nutrition Tracker API
// ABOUTME: Environment-variable accessors for overridable configuration values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Default base URL for the Nutrition Tracker API
pub const DEFAULT_BASE_URL: &str = "https://nutrition-tracker-api.p.rapidapi.com";

/// Host header value expected by the RapidAPI gateway
pub const DEFAULT_API_HOST: &str = "nutrition-tracker-api.p.rapidapi.com";

/// Endpoint path for natural-language nutrition calculation
pub const CALCULATE_NATURAL_PATH: &str = "/v1/calculate/natural";

/// Header carrying the RapidAPI key
pub const RAPIDAPI_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Header carrying the RapidAPI target host
pub const RAPIDAPI_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Environment variable configuration
pub mod env_config {
    use std::env;

    /// Get the RapidAPI key from the environment
    #[must_use]
    pub fn api_key() -> Option<String> {
        env::var("NUTRITION_API_KEY").ok()
    }

    /// Get the API base URL from environment or default
    #[must_use]
    pub fn api_base() -> String {
        env::var("NUTRITION_API_BASE").unwrap_or_else(|_| super::DEFAULT_BASE_URL.to_owned())
    }

    /// Get the API host header value from environment or default
    #[must_use]
    pub fn api_host() -> String {
        env::var("NUTRITION_API_HOST").unwrap_or_else(|_| super::DEFAULT_API_HOST.to_owned())
    }
}
