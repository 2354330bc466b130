// ABOUTME: Main library entry point for the Nutrition Tracker API client
// ABOUTME: Exposes the client, configuration, domain models, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrition Tracker API Client
//!
//! An async Rust client for the Nutrition Tracker API on RapidAPI. Send a
//! natural-language food description and get back 25+ nutrients with values
//! and units.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nutrition_tracker_client::NutritionClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NutritionClient::new("YOUR_RAPIDAPI_KEY")?;
//!     let facts = client.calculate("100g grilled chicken breast").await?;
//!
//!     if let Some(protein) = facts.get("Protein") {
//!         println!("Protein: {} {}", protein.value, protein.unit);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate follows a small modular layout:
//! - **Client**: request dispatch and response decoding for the
//!   `/v1/calculate/natural` endpoint
//! - **Config**: API key, endpoint, and timeout configuration with
//!   environment-variable loading
//! - **Models**: typed nutrient data returned to callers
//! - **Errors**: structured error kinds for configuration, input, API, and
//!   transport failures
//!
//! Get a key at <https://rapidapi.com/anonymous617461746174/api/nutrition-tracker-api>.

/// Nutrition API client and response decoding
pub mod client;
/// Client configuration and validation
pub mod config;
/// Endpoint paths, header names, and environment configuration
pub mod constants;
/// Structured error types for client operations
pub mod errors;
/// HTTP client construction with timeout configuration
pub mod http_client;
/// Domain models for nutrient data
pub mod models;

pub use client::NutritionClient;
pub use config::NutritionConfig;
pub use errors::{ClientResult, NutritionError};
pub use models::{NutrientReading, NutritionFacts};
