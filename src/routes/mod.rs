// ABOUTME: Route module organization for the meal plan server HTTP endpoints
// ABOUTME: Groups handlers by domain and assembles them under the /api/v1 prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the service layer.

use axum::Router;
use std::sync::Arc;

use crate::server::ServerResources;

/// Health check route
pub mod health;
/// Meal plan routes
pub mod meal_plans;
/// Nutrition calculation route
pub mod nutrition;
/// Workout plan routes
pub mod workout_plans;

/// Health check route handlers
pub use health::HealthRoutes;
/// Meal plan route handlers
pub use meal_plans::MealPlanRoutes;
/// Nutrition route handlers
pub use nutrition::NutritionRoutes;
/// Workout plan route handlers
pub use workout_plans::WorkoutPlanRoutes;

/// Prefix shared by every API route
pub const API_PREFIX: &str = "/api/v1";

/// All API routes, without the prefix
pub fn api_routes(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(MealPlanRoutes::routes(Arc::clone(resources)))
        .merge(NutritionRoutes::routes(Arc::clone(resources)))
        .merge(WorkoutPlanRoutes::routes(Arc::clone(resources)))
}
