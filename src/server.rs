// ABOUTME: Server assembly holding shared services and stores for the HTTP handlers
// ABOUTME: Builds the layered axum router and runs it with graceful ctrl-c shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Services and stores are created once at startup and shared with every
//! handler through `Arc<ServerResources>` router state.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use crate::external::{FatSecretClient, FoodDatabase};
use crate::llm::{LlmProvider, OpenAiCompatibleProvider};
use crate::middleware::request_id_middleware;
use crate::models::{MealPlan, WorkoutPlan};
use crate::nutrition::NutritionService;
use crate::routes::{api_routes, API_PREFIX};
use crate::services::{MealPlanService, WorkoutPlanService};
use crate::store::PlanStore;

/// Upper bound on a single request, covering one completion plus food lookups
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 180;

/// Shared state handed to every route handler
pub struct ServerResources {
    /// Meal plan generation
    pub meal_plan_service: MealPlanService,
    /// Workout plan generation
    pub workout_plan_service: WorkoutPlanService,
    /// Standalone nutrition calculation
    pub nutrition_service: NutritionService,
    /// Generated meal plans
    pub meal_plan_store: PlanStore<MealPlan>,
    /// Generated workout plans
    pub workout_plan_store: PlanStore<WorkoutPlan>,
}

impl ServerResources {
    /// Wire services around the given providers with empty stores
    #[must_use]
    pub fn new(llm: Arc<dyn LlmProvider>, food_database: Arc<dyn FoodDatabase>) -> Self {
        let nutrition_service = NutritionService::new(food_database);
        Self {
            meal_plan_service: MealPlanService::new(Arc::clone(&llm), nutrition_service.clone()),
            workout_plan_service: WorkoutPlanService::new(llm),
            nutrition_service,
            meal_plan_store: PlanStore::new(),
            workout_plan_store: PlanStore::new(),
        }
    }

    /// Build the production providers from configuration
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let llm = OpenAiCompatibleProvider::new(config.llm.clone())?;
        let food_database = FatSecretClient::new(config.fatsecret.clone())?;
        info!(
            provider = llm.name(),
            model = llm.default_model(),
            "Plan generation provider initialized"
        );
        Ok(Self::new(Arc::new(llm), Arc::new(food_database)))
    }
}

/// Full application router with the API mounted under `/api/v1`
///
/// Requests exceeding [`HTTP_REQUEST_TIMEOUT_SECS`] are answered with 408.
#[allow(deprecated)]
pub fn router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .nest(API_PREFIX, api_routes(resources))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            HTTP_REQUEST_TIMEOUT_SECS,
        )))
}

/// Bind the configured address and serve until ctrl-c
pub async fn run(resources: ServerResources, config: &ServerConfig) -> anyhow::Result<()> {
    let app = router(&Arc::new(resources));
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {address}"))?;

    info!("HTTP server listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
