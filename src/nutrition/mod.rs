// ABOUTME: Nutrition aggregation pipeline for LLM-generated food items
// ABOUTME: Search, details, serving selection, quantity scaling, and combination with RDI percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Pipeline
//!
//! Turns a list of loosely specified [`FoodItem`](crate::models::FoodItem)s
//! into one [`NutritionResponse`](crate::models::NutritionResponse):
//!
//! 1. search the food database for each item name
//! 2. fetch the servings of the first match
//! 3. pick the serving matching the item unit
//! 4. scale its nutrients by the requested quantity
//! 5. sum everything and attach recommended daily intake percentages
//!
//! Steps 3 to 5 are pure functions in [`calculator`]; [`NutritionService`]
//! drives the remote lookups.

/// Serving selection, scaling, and aggregation
pub mod calculator;
/// Concurrent food lookups
pub mod service;

pub use calculator::{combine, scale_serving, select_serving, ItemNutrition};
pub use service::{NutritionService, NO_FOODS_FOUND};
