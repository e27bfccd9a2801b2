// ABOUTME: FatSecret Platform API client for food search and per-serving nutrient data
// ABOUTME: Handles the OAuth 2.0 client-credentials token cache and response-shape quirks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `FatSecret` Platform API Client
//!
//! The food database is reached through two REST methods on a single endpoint:
//! `foods.search` to turn a free-text food name into a food id and
//! `food.get.v2` to fetch the servings of that food.
//!
//! # Response quirks
//! - `foods.food` and `food.servings.serving` are a JSON object when there is
//!   exactly one entry and an array otherwise.
//! - Numeric fields are usually encoded as strings (`"31.02"`).
//! - An empty search has no `foods.food` key at all.
//! - Method errors come back with HTTP 200 and an `error` object.
//!
//! # Authentication
//! Requests carry a bearer token obtained with the client-credentials grant.
//! The token is cached until `expires_in - 300` seconds after it was issued.
//!
//! # Example
//! ```rust,no_run
//! use mealplan_server::config::FatSecretConfig;
//! use mealplan_server::external::{FatSecretClient, FoodDatabase};
//!
//! # async fn example(config: FatSecretConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let client = FatSecretClient::new(config)?;
//! if let Some(food_id) = client.search_food("chicken breast").await? {
//!     let details = client.get_food_details(&food_id).await?;
//!     println!("{} has {} servings", details.food_name, details.servings.len());
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::config::FatSecretConfig;
use crate::errors::{AppError, AppResult};
use mealplan_core::constants::{fatsecret, Nutrient};

/// Request timeout for food database calls
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Public data types
// ============================================================================

/// One serving description of a food with its nutrient values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Serving {
    /// Human readable measurement ("1 cup", "100 g")
    #[serde(default)]
    pub measurement_description: String,
    /// Number of measurement units the nutrient values refer to
    #[serde(default, deserialize_with = "lenient_f64")]
    pub number_of_units: Option<f64>,
    /// Remaining serving fields, nutrient values included, as sent by the API
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Serving {
    /// Create a serving with no nutrient values
    #[must_use]
    pub fn new(measurement_description: impl Into<String>, number_of_units: f64) -> Self {
        Self {
            measurement_description: measurement_description.into(),
            number_of_units: Some(number_of_units),
            fields: Map::new(),
        }
    }

    /// Set a nutrient value
    #[must_use]
    pub fn with_nutrient(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.fields
            .insert(nutrient.fatsecret_field().to_owned(), Value::from(value));
        self
    }

    /// Value of a nutrient for this serving; missing or unparseable values read as zero
    #[must_use]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.fields
            .get(nutrient.fatsecret_field())
            .and_then(value_as_f64)
            .unwrap_or(0.0)
    }
}

/// Food record with every serving the database knows for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetails {
    /// Database food id
    pub food_id: String,
    /// Display name
    pub food_name: String,
    /// Available servings, in API order
    pub servings: Vec<Serving>,
}

// ============================================================================
// Food database abstraction
// ============================================================================

/// Lookup operations the nutrition pipeline needs from a food database
#[async_trait]
pub trait FoodDatabase: Send + Sync {
    /// Find the id of the best match for a food name; `None` when nothing matches
    async fn search_food(&self, name: &str) -> AppResult<Option<String>>;

    /// Fetch the servings and nutrient values of a food
    async fn get_food_details(&self, food_id: &str) -> AppResult<FoodDetails>;
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(deserialize_with = "lenient_i64")]
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: Value,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Option<SearchFoods>,
}

#[derive(Debug, Deserialize)]
struct SearchFoods {
    #[serde(default)]
    food: Option<OneOrMany<FoodSummary>>,
}

#[derive(Debug, Deserialize)]
struct FoodSummary {
    #[serde(deserialize_with = "string_or_number")]
    food_id: String,
}

#[derive(Debug, Deserialize)]
struct FoodGetResponse {
    food: FoodRecord,
}

#[derive(Debug, Deserialize)]
struct FoodRecord {
    #[serde(deserialize_with = "string_or_number")]
    food_id: String,
    #[serde(default)]
    food_name: String,
    #[serde(default)]
    servings: Option<ServingList>,
}

#[derive(Debug, Deserialize)]
struct ServingList {
    #[serde(default)]
    serving: Option<OneOrMany<Serving>>,
}

impl From<FoodRecord> for FoodDetails {
    fn from(record: FoodRecord) -> Self {
        Self {
            food_id: record.food_id,
            food_name: record.food_name,
            servings: record
                .servings
                .and_then(|list| list.serving)
                .map(Vec::from)
                .unwrap_or_default(),
        }
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_f64))
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    value_as_f64(&raw)
        .map(|secs| secs as i64)
        .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {raw}")))
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

// ============================================================================
// Token cache
// ============================================================================

/// Access token with its effective expiry
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            expires_at: issued_at
                + ChronoDuration::seconds(
                    response.expires_in - fatsecret::TOKEN_EXPIRY_MARGIN_SECS,
                ),
        }
    }

    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

// ============================================================================
// Client
// ============================================================================

/// `FatSecret` REST client with a shared access token
pub struct FatSecretClient {
    config: FatSecretConfig,
    http_client: reqwest::Client,
    token: RwLock<Option<CachedToken>>,
}

impl FatSecretClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: FatSecretConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
            token: RwLock::new(None),
        })
    }

    /// Return a valid access token, requesting a new one when the cached token is stale
    ///
    /// # Errors
    ///
    /// Returns `ExternalAuthFailed` if the token endpoint rejects the credentials
    /// or cannot be reached.
    pub async fn access_token(&self) -> AppResult<String> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref().filter(|t| t.is_valid_at(Utc::now())) {
                return Ok(token.access_token.clone());
            }
        }

        let mut cached = self.token.write().await;
        // Another request may have refreshed while we waited for the lock
        if let Some(token) = cached.as_ref().filter(|t| t.is_valid_at(Utc::now())) {
            return Ok(token.access_token.clone());
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    async fn request_token(&self) -> AppResult<CachedToken> {
        let auth_failed = || {
            AppError::external_auth(
                fatsecret::SERVICE_NAME,
                "Failed to authenticate with nutrition API",
            )
        };

        let issued_at = Utc::now();
        let response = self
            .http_client
            .post(&self.config.auth_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("scope", fatsecret::OAUTH_SCOPE),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Error getting access token: {}", e);
                auth_failed().with_source(e)
            })?;

        if !response.status().is_success() {
            error!(
                "Token endpoint returned HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            );
            return Err(auth_failed());
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            error!("Malformed token response: {}", e);
            auth_failed().with_source(e)
        })?;

        info!(
            expires_in = token_response.expires_in,
            "Obtained food database access token"
        );
        Ok(CachedToken::from_response(token_response, issued_at))
    }

    /// Call a REST method and return the decoded JSON body
    async fn call_method(&self, params: &[(&str, &str)]) -> AppResult<Value> {
        let token = self.access_token().await?;

        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(params)
            .query(&[("format", "json")])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(fatsecret::SERVICE_NAME, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                fatsecret::SERVICE_NAME,
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::external_service(fatsecret::SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        if body.get("error").is_some() {
            let api_error: ApiErrorResponse = serde_json::from_value(body)?;
            return Err(AppError::external_service(
                fatsecret::SERVICE_NAME,
                format!(
                    "method error {}: {}",
                    api_error.error.code, api_error.error.message
                ),
            ));
        }

        Ok(body)
    }
}

#[async_trait]
impl FoodDatabase for FatSecretClient {
    async fn search_food(&self, name: &str) -> AppResult<Option<String>> {
        let max_results = fatsecret::SEARCH_MAX_RESULTS.to_string();
        let body = self
            .call_method(&[
                ("method", "foods.search"),
                ("search_expression", name),
                ("max_results", &max_results),
            ])
            .await?;

        let search: SearchResponse = serde_json::from_value(body).map_err(|e| {
            AppError::external_service(
                fatsecret::SERVICE_NAME,
                format!("Unexpected search response: {e}"),
            )
        })?;

        let food_id = search
            .foods
            .and_then(|foods| foods.food)
            .map(Vec::from)
            .and_then(|foods| foods.into_iter().next())
            .map(|food| food.food_id);

        debug!(food = %name, food_id = ?food_id, "Food search complete");
        Ok(food_id)
    }

    async fn get_food_details(&self, food_id: &str) -> AppResult<FoodDetails> {
        let body = self
            .call_method(&[("method", "food.get.v2"), ("food_id", food_id)])
            .await?;

        let response: FoodGetResponse = serde_json::from_value(body).map_err(|e| {
            AppError::external_service(
                fatsecret::SERVICE_NAME,
                format!("Unexpected food response: {e}"),
            )
        })?;

        Ok(response.food.into())
    }
}

// ============================================================================
// Mock client
// ============================================================================

/// In-memory food database for tests (no API calls)
///
/// Search matches when the stored food name contains the query, ignoring case.
pub struct MockFoodDatabase {
    foods: HashMap<String, FoodDetails>,
    failing_details: HashSet<String>,
    rejects_credentials: bool,
}

impl MockFoodDatabase {
    /// Create a mock with chicken breast, apple, and oatmeal
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_food(FoodDetails {
                food_id: "1641".to_owned(),
                food_name: "Chicken Breast".to_owned(),
                servings: vec![
                    Serving::new("100 g", 100.0)
                        .with_nutrient(Nutrient::Calories, 165.0)
                        .with_nutrient(Nutrient::Protein, 31.02)
                        .with_nutrient(Nutrient::Fat, 3.57)
                        .with_nutrient(Nutrient::Cholesterol, 85.0)
                        .with_nutrient(Nutrient::Sodium, 74.0),
                    Serving::new("piece", 1.0)
                        .with_nutrient(Nutrient::Calories, 284.0)
                        .with_nutrient(Nutrient::Protein, 53.4)
                        .with_nutrient(Nutrient::Fat, 6.1),
                ],
            })
            .with_food(FoodDetails {
                food_id: "35718".to_owned(),
                food_name: "Apple".to_owned(),
                servings: vec![Serving::new("medium", 1.0)
                    .with_nutrient(Nutrient::Calories, 95.0)
                    .with_nutrient(Nutrient::Carbs, 25.13)
                    .with_nutrient(Nutrient::Fiber, 4.4)
                    .with_nutrient(Nutrient::Sugar, 18.91)
                    .with_nutrient(Nutrient::VitaminC, 8.4)],
            })
            .with_food(FoodDetails {
                food_id: "4881".to_owned(),
                food_name: "Oatmeal".to_owned(),
                servings: vec![Serving::new("cup", 1.0)
                    .with_nutrient(Nutrient::Calories, 166.0)
                    .with_nutrient(Nutrient::Protein, 5.94)
                    .with_nutrient(Nutrient::Carbs, 28.08)
                    .with_nutrient(Nutrient::Iron, 2.1)],
            })
    }

    /// Create a mock with no foods
    #[must_use]
    pub fn empty() -> Self {
        Self {
            foods: HashMap::new(),
            failing_details: HashSet::new(),
            rejects_credentials: false,
        }
    }

    /// Add a food
    #[must_use]
    pub fn with_food(mut self, food: FoodDetails) -> Self {
        self.foods.insert(food.food_id.clone(), food);
        self
    }

    /// Make detail lookups for a food id fail with an external service error
    #[must_use]
    pub fn with_failing_details(mut self, food_id: impl Into<String>) -> Self {
        self.failing_details.insert(food_id.into());
        self
    }

    /// Make every lookup fail as if the token endpoint rejected our credentials
    #[must_use]
    pub fn with_rejected_credentials(mut self) -> Self {
        self.rejects_credentials = true;
        self
    }

    fn check_credentials(&self) -> AppResult<()> {
        if self.rejects_credentials {
            return Err(AppError::external_auth(
                fatsecret::SERVICE_NAME,
                "Failed to authenticate with nutrition API",
            ));
        }
        Ok(())
    }
}

impl Default for MockFoodDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodDatabase for MockFoodDatabase {
    async fn search_food(&self, name: &str) -> AppResult<Option<String>> {
        self.check_credentials()?;
        let query = name.to_lowercase();
        let mut matches: Vec<&FoodDetails> = self
            .foods
            .values()
            .filter(|food| food.food_name.to_lowercase().contains(&query))
            .collect();
        matches.sort_by(|a, b| a.food_id.cmp(&b.food_id));
        Ok(matches.first().map(|food| food.food_id.clone()))
    }

    async fn get_food_details(&self, food_id: &str) -> AppResult<FoodDetails> {
        self.check_credentials()?;
        if self.failing_details.contains(food_id) {
            warn!(food_id, "Mock food database simulating a details failure");
            return Err(AppError::external_service(
                fatsecret::SERVICE_NAME,
                format!("HTTP 500: details unavailable for {food_id}"),
            ));
        }
        self.foods
            .get(food_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Food with id {food_id} not found")))
    }
}
