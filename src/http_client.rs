// ABOUTME: HTTP client construction with timeout configuration for API calls
// ABOUTME: Builds reqwest clients with request and connection timeouts applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Build an HTTP client with the given request and connection timeouts
///
/// The returned client pools connections and may be reused across sequential
/// calls. Falls back to a default client if builder configuration fails.
#[must_use]
pub fn client_with_timeouts(timeout: Duration, connect_timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}
