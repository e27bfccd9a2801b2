// ABOUTME: Route handler computing a combined nutrition summary for posted food items
// ABOUTME: Delegates to the nutrition service; unresolvable input yields 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::FoodItem;
use crate::server::ServerResources;

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the nutrition calculation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/calculate-nutrition", post(Self::handle_calculate))
            .with_state(resources)
    }

    /// Handle POST /calculate-nutrition
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        Json(items): Json<Vec<FoodItem>>,
    ) -> Result<Response, AppError> {
        let summary = resources.nutrition_service.calculate(&items).await?;
        Ok((StatusCode::OK, Json(summary)).into_response())
    }
}
