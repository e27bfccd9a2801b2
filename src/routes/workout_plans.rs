// ABOUTME: Route handlers for workout plan generation, lookup, and listing
// ABOUTME: Mirrors the meal plan endpoints without nutrition enrichment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::server::ServerResources;
use crate::store::PageParams;

/// Workout plan routes implementation
pub struct WorkoutPlanRoutes;

impl WorkoutPlanRoutes {
    /// Create all workout plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/workout-plans",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/workout-plans/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle POST /workout-plans
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(profile): Json<UserProfile>,
    ) -> Result<Response, AppError> {
        let plan = resources.workout_plan_service.generate(profile).await?;
        resources.workout_plan_store.insert(plan.clone());
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle GET /workout-plans/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let plan = resources
            .workout_plan_store
            .get(&id)
            .ok_or_else(|| AppError::not_found("Workout plan not found"))?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle GET /workout-plans?skip=&limit=
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(page): Query<PageParams>,
    ) -> Result<Response, AppError> {
        let plans = resources.workout_plan_store.list(page);
        Ok((StatusCode::OK, Json(plans)).into_response())
    }
}
