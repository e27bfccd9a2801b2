// ABOUTME: Main library entry point for the meal plan server
// ABOUTME: LLM-generated meal and workout plans enriched with food database nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Server
//!
//! An HTTP service that asks a chat-completion LLM for personalized meal and
//! workout plans, then resolves the generated food items against the
//! `FatSecret` food database to produce a combined nutrition summary.
//!
//! ## Architecture
//!
//! - **llm**: Chat-completion provider trait and the `OpenAI`-compatible client
//! - **external**: `FatSecret` client with a cached client-credentials token
//! - **nutrition**: Serving selection, quantity scaling, and nutrient aggregation
//! - **services**: Meal plan, workout plan, and combined plan generation
//! - **store**: In-memory plan storage with pagination
//! - **routes**: Axum handlers under `/api/v1`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplan_server::config::environment::ServerConfig;
//! use mealplan_server::server::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(&config)?;
//!     mealplan_server::server::run(resources, &config).await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Unified error handling (re-exported from the core crate)
pub mod errors {
    pub use mealplan_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
}

/// External API clients (`FatSecret` food database)
pub mod external;

/// LLM provider abstraction for plan generation
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request correlation
pub mod middleware;

/// Wire models (re-exported from the core crate)
pub mod models {
    pub use mealplan_core::models::*;
}

/// Nutrition aggregation pipeline
pub mod nutrition;

/// `HTTP` routes organized by domain
pub mod routes;

/// Server assembly: shared resources, router, and serve loop
pub mod server;

/// Plan generation services
pub mod services;

/// In-memory plan storage
pub mod store;
