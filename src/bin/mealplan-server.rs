// ABOUTME: Meal plan server binary entry point
// ABOUTME: Loads environment configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Server Binary
//!
//! Starts the HTTP API for LLM-generated meal and workout plans.

use anyhow::Result;
use clap::Parser;
use mealplan_server::{
    config::environment::ServerConfig, logging, routes::API_PREFIX, server,
    server::ServerResources,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mealplan-server")]
#[command(about = "Meal Plan API - LLM-generated meal and workout plans with nutrition summaries")]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Meal Plan API");
    info!("{}", config.summary());

    let resources = ServerResources::from_config(&config)?;

    display_available_endpoints(&config);

    if let Err(e) = server::run(resources, &config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}{API_PREFIX}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("   Health:             GET  {base}/health");
    info!("   Create Meal Plan:   POST {base}/meal-plans?include_nutrition=true|false");
    info!("   List Meal Plans:    GET  {base}/meal-plans?skip=&limit=");
    info!("   Get Meal Plan:      GET  {base}/meal-plans/{{id}}");
    info!("   Create Workout:     POST {base}/workout-plans");
    info!("   List Workouts:      GET  {base}/workout-plans?skip=&limit=");
    info!("   Get Workout:        GET  {base}/workout-plans/{{id}}");
    info!("   Nutrition:          POST {base}/calculate-nutrition");
    info!("=== End of Endpoint List ===");
}
