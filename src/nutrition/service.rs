// ABOUTME: Nutrition service resolving food items against the food database concurrently
// ABOUTME: Skips unresolvable items and fails only when nothing could be resolved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::calculator::{combine, scale_serving, ItemNutrition};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::FoodDatabase;
use crate::logging::AppLogger;
use crate::models::{FoodItem, NutritionResponse};

/// Message returned when none of the requested foods resolved
pub const NO_FOODS_FOUND: &str =
    "Could not find nutritional information for any of the provided foods";

/// Runs search, details, and scaling for each food item and combines the results
#[derive(Clone)]
pub struct NutritionService {
    food_database: Arc<dyn FoodDatabase>,
}

impl NutritionService {
    /// Create a service backed by a food database
    #[must_use]
    pub fn new(food_database: Arc<dyn FoodDatabase>) -> Self {
        Self { food_database }
    }

    /// Compute the combined nutrition of `items`
    ///
    /// Items are looked up concurrently. Items the database does not know, or
    /// whose details cannot be fetched, are left out of the total.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no item resolves, or `ExternalAuthFailed`
    /// when the food database rejects our credentials.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub async fn calculate(&self, items: &[FoodItem]) -> AppResult<NutritionResponse> {
        let started = Instant::now();

        let lookups = join_all(items.iter().map(|item| self.resolve_item(item))).await;

        let mut resolved = Vec::with_capacity(lookups.len());
        for lookup in lookups {
            if let Some(item) = lookup? {
                resolved.push(item);
            }
        }

        info!(
            requested = items.len(),
            resolved = resolved.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Nutrition lookup complete"
        );

        if resolved.is_empty() {
            return Err(AppError::not_found(NO_FOODS_FOUND));
        }

        Ok(combine(&resolved))
    }

    /// Resolve one item; `Ok(None)` means the item is skipped
    async fn resolve_item(&self, item: &FoodItem) -> AppResult<Option<ItemNutrition>> {
        let food_id = match self.food_database.search_food(&item.name).await {
            Ok(Some(food_id)) => food_id,
            Ok(None) => {
                AppLogger::log_food_lookup(&item.name, "not_found");
                return Ok(None);
            }
            Err(e) => return Self::skip_or_abort(item, "search_failed", e),
        };

        let details = match self.food_database.get_food_details(&food_id).await {
            Ok(details) => details,
            Err(e) => return Self::skip_or_abort(item, "details_failed", e),
        };

        let scaled = scale_serving(&details, item.total_food, &item.unit, item.serving_size);
        if scaled.is_none() {
            AppLogger::log_food_lookup(&item.name, "no_servings");
        } else {
            debug!(food = %item.name, food_id = %food_id, "Resolved food item");
        }
        Ok(scaled)
    }

    /// Authentication failures abort the whole calculation; anything else skips the item
    fn skip_or_abort(
        item: &FoodItem,
        outcome: &str,
        error: AppError,
    ) -> AppResult<Option<ItemNutrition>> {
        if error.code == ErrorCode::ExternalAuthFailed {
            return Err(error);
        }
        warn!(food = %item.name, error = %error, "Skipping food item");
        AppLogger::log_food_lookup(&item.name, outcome);
        Ok(None)
    }
}
