// ABOUTME: Integration tests for the FatSecret client against a local stub of the food API
// ABOUTME: Covers token caching, request parameters, response shapes, and auth failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod helpers;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use helpers::axum_test::AxumTestRequest;
use helpers::mocks::ScriptedLlm;
use mealplan_core::constants::Nutrient;
use mealplan_server::config::FatSecretConfig;
use mealplan_server::errors::ErrorCode;
use mealplan_server::external::{FatSecretClient, FoodDatabase};
use mealplan_server::models::FoodItem;
use mealplan_server::nutrition::NutritionService;
use mealplan_server::server::{router, ServerResources};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const STUB_TOKEN: &str = "stub-token";

type Params = HashMap<String, String>;

/// Recorded traffic of the stubbed food API
#[derive(Default)]
struct StubState {
    reject_token: bool,
    token_requests: AtomicUsize,
    token_forms: Mutex<Vec<Params>>,
    method_calls: Mutex<Vec<(Params, Option<String>)>>,
}

impl StubState {
    fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    fn method_calls(&self) -> Vec<(Params, Option<String>)> {
        self.method_calls.lock().unwrap().clone()
    }
}

async fn issue_token(State(state): State<Arc<StubState>>, Form(form): Form<Params>) -> Response {
    state.token_requests.fetch_add(1, Ordering::SeqCst);
    state.token_forms.lock().unwrap().push(form);

    if state.reject_token {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid_client"})),
        )
            .into_response();
    }

    Json(json!({
        "access_token": STUB_TOKEN,
        "token_type": "Bearer",
        "expires_in": 86400
    }))
    .into_response()
}

async fn server_api(
    State(state): State<Arc<StubState>>,
    Query(params): Query<Params>,
    headers: HeaderMap,
) -> Json<Value> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    state
        .method_calls
        .lock()
        .unwrap()
        .push((params.clone(), authorization));

    let method = params.get("method").map(String::as_str);
    let body = match method {
        Some("foods.search") => search_body(params.get("search_expression").map(String::as_str)),
        Some("food.get.v2") => food_body(params.get("food_id").map(String::as_str)),
        _ => json!({"error": {"code": 2, "message": "Unknown method"}}),
    };
    Json(body)
}

fn search_body(expression: Option<&str>) -> Value {
    match expression {
        Some("apple") => json!({
            "foods": {"food": {"food_id": "35718", "food_name": "Apples"}, "total_results": "1"}
        }),
        Some("banana") => json!({
            "foods": {"food": [{"food_id": 5388}, {"food_id": "9999"}], "total_results": "2"}
        }),
        Some("broken") => json!({"error": {"code": 106, "message": "Invalid ID"}}),
        _ => json!({"foods": {"max_results": "3", "total_results": "0"}}),
    }
}

fn food_body(food_id: Option<&str>) -> Value {
    match food_id {
        Some("35718") => json!({
            "food": {
                "food_id": "35718",
                "food_name": "Apples",
                "servings": {
                    "serving": {
                        "measurement_description": "medium",
                        "number_of_units": "1.000",
                        "calories": "95",
                        "vitamin_c": "8.4"
                    }
                }
            }
        }),
        _ => json!({"error": {"code": 106, "message": "Invalid ID"}}),
    }
}

/// Serve the stub on an ephemeral port and return a client configuration pointing at it
async fn spawn_stub(state: Arc<StubState>) -> FatSecretConfig {
    let app = Router::new()
        .route("/connect/token", post(issue_token))
        .route("/rest/server.api", get(server_api))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FatSecretConfig {
        base_url: format!("http://{address}/rest/server.api"),
        auth_url: format!("http://{address}/connect/token"),
        client_id: "stub-client".to_owned(),
        client_secret: "stub-secret".to_owned(),
    }
}

async fn client_with(state: &Arc<StubState>) -> FatSecretClient {
    FatSecretClient::new(spawn_stub(Arc::clone(state)).await).unwrap()
}

fn rejecting_stub() -> Arc<StubState> {
    Arc::new(StubState {
        reject_token: true,
        ..StubState::default()
    })
}

#[tokio::test]
async fn test_token_is_requested_once_across_lookups() {
    let state = Arc::new(StubState::default());
    let client = client_with(&state).await;

    client.search_food("apple").await.unwrap();
    client.get_food_details("35718").await.unwrap();
    client.search_food("banana").await.unwrap();

    assert_eq!(state.token_requests(), 1);
    assert_eq!(state.method_calls().len(), 3);

    let forms = state.token_forms.lock().unwrap().clone();
    assert_eq!(forms[0]["grant_type"], "client_credentials");
    assert_eq!(forms[0]["scope"], "basic");
    assert_eq!(forms[0]["client_id"], "stub-client");
    assert_eq!(forms[0]["client_secret"], "stub-secret");
}

#[tokio::test]
async fn test_search_sends_method_parameters_and_bearer_token() {
    let state = Arc::new(StubState::default());
    let client = client_with(&state).await;

    client.search_food("apple").await.unwrap();

    let calls = state.method_calls();
    let (params, authorization) = &calls[0];
    assert_eq!(params["method"], "foods.search");
    assert_eq!(params["search_expression"], "apple");
    assert_eq!(params["max_results"], "3");
    assert_eq!(params["format"], "json");
    assert_eq!(authorization.as_deref(), Some("Bearer stub-token"));
}

#[tokio::test]
async fn test_search_reads_single_and_list_results() {
    let state = Arc::new(StubState::default());
    let client = client_with(&state).await;

    assert_eq!(
        client.search_food("apple").await.unwrap().as_deref(),
        Some("35718")
    );
    assert_eq!(
        client.search_food("banana").await.unwrap().as_deref(),
        Some("5388")
    );
    assert_eq!(client.search_food("unobtainium").await.unwrap(), None);
}

#[tokio::test]
async fn test_food_details_parse_string_encoded_numbers() {
    let state = Arc::new(StubState::default());
    let client = client_with(&state).await;

    let details = client.get_food_details("35718").await.unwrap();

    let calls = state.method_calls();
    assert_eq!(calls[0].0["method"], "food.get.v2");
    assert_eq!(calls[0].0["food_id"], "35718");

    assert_eq!(details.food_id, "35718");
    assert_eq!(details.food_name, "Apples");
    assert_eq!(details.servings.len(), 1);
    let serving = &details.servings[0];
    assert_eq!(serving.measurement_description, "medium");
    assert_eq!(serving.number_of_units, Some(1.0));
    assert!((serving.nutrient(Nutrient::Calories) - 95.0).abs() < f64::EPSILON);
    assert!((serving.nutrient(Nutrient::VitaminC) - 8.4).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_error_body_with_http_200_is_an_error() {
    let state = Arc::new(StubState::default());
    let client = client_with(&state).await;

    let err = client.search_food("broken").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("Invalid ID"), "{}", err.message);
}

#[tokio::test]
async fn test_rejected_token_request_is_auth_failure() {
    let state = rejecting_stub();
    let client = client_with(&state).await;

    let err = client.search_food("apple").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert_eq!(err.http_status(), 503);
    assert!(state.method_calls().is_empty());
}

#[tokio::test]
async fn test_nutrition_totals_through_client_share_one_token() {
    let state = Arc::new(StubState::default());
    let service = NutritionService::new(Arc::new(client_with(&state).await));

    let apples = FoodItem {
        total_food: 2.0,
        unit: "medium".to_owned(),
        ..FoodItem::named("apple")
    };
    let summary = service
        .calculate(&[apples, FoodItem::named("dragonfruit")])
        .await
        .unwrap();

    assert_eq!(summary.calories.value, 190.0);
    assert_eq!(summary.vitamin_c.value, 16.8);
    assert_eq!(summary.vitamin_c.rdi_percent, Some(18.67));
    assert_eq!(state.token_requests(), 1);
}

#[tokio::test]
async fn test_calculate_nutrition_route_reports_rejected_credentials() {
    let config = spawn_stub(rejecting_stub()).await;
    let resources = Arc::new(ServerResources::new(
        Arc::new(ScriptedLlm::replying("[]")),
        Arc::new(FatSecretClient::new(config).unwrap()),
    ));

    let error: Value = AxumTestRequest::post("/api/v1/calculate-nutrition")
        .json(&json!([{"name": "apple"}]))
        .send(router(&resources))
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .json();

    assert_eq!(error["error"]["code"], "EXTERNAL_AUTH_FAILED");
}
