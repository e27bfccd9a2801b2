// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrient reference table, LLM request defaults, and food database defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the remote system or domain they belong to.

/// Nutrient table: output keys, food database field names, units, and RDI values
pub mod nutrients;

pub use nutrients::Nutrient;

/// Defaults for chat-completion requests
pub mod llm {
    /// Default chat-completions endpoint
    pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
    /// Default model identifier
    pub const DEFAULT_MODEL: &str = "gpt-4.1";
    /// Sampling temperature used for plan generation
    pub const PLAN_TEMPERATURE: f32 = 0.8;
    /// Maximum completion tokens for plan generation
    pub const PLAN_MAX_TOKENS: u32 = 1024;
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
}

/// Defaults for the `FatSecret` food database
pub mod fatsecret {
    /// REST endpoint for method calls
    pub const DEFAULT_BASE_URL: &str = "https://platform.fatsecret.com/rest/server.api";
    /// OAuth 2.0 token endpoint
    pub const DEFAULT_AUTH_URL: &str = "https://oauth.fatsecret.com/connect/token";
    /// OAuth scope requested with client credentials
    pub const OAUTH_SCOPE: &str = "basic";
    /// Number of search candidates requested per food name
    pub const SEARCH_MAX_RESULTS: u32 = 3;
    /// Seconds subtracted from `expires_in` before a cached token is considered stale
    pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 300;
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "FatSecret API";
}

/// Defaults applied when cleaning LLM-generated items
pub mod plan_defaults {
    /// Default quantity for a food item
    pub const TOTAL_FOOD: f64 = 1.0;
    /// Default unit for a food item
    pub const UNIT: &str = "serving";
    /// Serving size written into a cleaned meal plan entry
    pub const CLEANED_SERVING_SIZE: f64 = 100.0;
    /// Serving size assumed when a stored plan entry lacks one
    pub const FOOD_ITEM_SERVING_SIZE: f64 = 1.0;
    /// Default number of sets for a workout exercise
    pub const WORKOUT_SETS: u32 = 3;
    /// Default repetitions for a workout exercise
    pub const WORKOUT_REPS: &str = "10";
    /// Default rest between sets
    pub const WORKOUT_REST: &str = "60s";
    /// Value stored when the user gives no additional goal
    pub const ACCOMPLISH: &str = "N/A";
}
