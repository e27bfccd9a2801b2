// ABOUTME: Route handlers for meal plan generation, lookup, and listing
// ABOUTME: POST optionally attaches a nutrition summary via ?include_nutrition=true
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan routes
//!
//! Generated plans are stored in memory; the nutrition summary returned with
//! `include_nutrition` is not stored alongside the plan.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::server::ServerResources;
use crate::store::PageParams;

/// Query parameters for `POST /meal-plans`
#[derive(Debug, Default, Deserialize)]
pub struct CreateMealPlanQuery {
    /// Compute nutrition for the generated items
    #[serde(default)]
    pub include_nutrition: bool,
}

/// Meal plan routes implementation
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/meal-plans",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/meal-plans/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle POST /meal-plans
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CreateMealPlanQuery>,
        Json(profile): Json<UserProfile>,
    ) -> Result<Response, AppError> {
        if query.include_nutrition {
            let result = resources
                .meal_plan_service
                .generate_with_nutrition(profile)
                .await?;
            resources.meal_plan_store.insert(result.meal_plan.clone());
            return Ok((StatusCode::OK, Json(result)).into_response());
        }

        let plan = resources.meal_plan_service.generate(profile).await?;
        resources.meal_plan_store.insert(plan.clone());
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle GET /meal-plans/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let plan = resources
            .meal_plan_store
            .get(&id)
            .ok_or_else(|| AppError::not_found("Meal plan not found"))?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle GET /meal-plans?skip=&limit=
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(page): Query<PageParams>,
    ) -> Result<Response, AppError> {
        let plans = resources.meal_plan_store.list(page);
        Ok((StatusCode::OK, Json(plans)).into_response())
    }
}
