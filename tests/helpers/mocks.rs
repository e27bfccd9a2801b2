// ABOUTME: Scripted LLM provider and router builders for HTTP integration tests
// ABOUTME: Replays canned completions or upstream failures and records received prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use mealplan_server::errors::AppError;
use mealplan_server::external::MockFoodDatabase;
use mealplan_server::llm::{ChatRequest, ChatResponse, LlmProvider};
use mealplan_server::models::UserProfile;
use mealplan_server::server::{router, ServerResources};

/// What the scripted provider answers with
#[derive(Debug, Clone)]
enum Script {
    Content(String),
    UpstreamError { status: u16, message: String },
    Internal(String),
}

/// LLM provider returning the same scripted answer for every request
pub struct ScriptedLlm {
    script: Script,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedLlm {
    /// Answer every request with `content`
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            script: Script::Content(content.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request as if the upstream answered with `status`
    #[allow(dead_code)]
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            script: Script::UpstreamError {
                status,
                message: message.into(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with an internal error, as a malformed completion does
    #[allow(dead_code)]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            script: Script::Internal(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Content(content) => Ok(ChatResponse {
                content: content.clone(),
                model: self.default_model().to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Script::UpstreamError { status, message } => {
                Err(AppError::upstream(*status, message.clone()))
            }
            Script::Internal(message) => Err(AppError::internal(message.clone())),
        }
    }
}

/// Shared resources backed by `llm` and the default mock food database
pub fn resources_with(llm: Arc<ScriptedLlm>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(llm, Arc::new(MockFoodDatabase::new())))
}

/// Full application router backed by `llm` and the default mock food database
#[allow(dead_code)]
pub fn app_with(llm: Arc<ScriptedLlm>) -> Router {
    router(&resources_with(llm))
}

/// A profile accepted by every plan endpoint
#[allow(dead_code)]
pub fn sample_profile() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "gender": "female",
        "age": 28,
        "height": 165,
        "weight": 62.0,
        "desiredWeight": 58.0,
        "weeklyWeightLossGoal": 0.5,
        "trainingDay": 3,
        "workoutLocation": "home",
        "dietType": "vegetarian",
        "reachingGoals": "lose fat",
        "accomplish": "sleep better"
    }))
    .unwrap()
}

/// Meal plan completion naming foods the mock database knows
#[allow(dead_code)]
pub const MEAL_PLAN_COMPLETION: &str = r#"[
  {"mealPlanType": "Breakfast", "name": "Oatmeal", "totalFood": 1, "unit": "cup", "servingSize": 1},
  {"mealPlanType": "Snack", "name": "Apple", "totalFood": 2, "unit": "medium", "servingSize": 1, "notes": "crisp"}
]"#;

/// Workout completion with one incomplete exercise
#[allow(dead_code)]
pub const WORKOUT_PLAN_COMPLETION: &str = r#"```json
[
  {"day": "Monday", "focus": "Full body", "workoutPlan": [
    {"name": "Squats", "sets": 4, "reps": "12", "rest": "90s"},
    {"name": "Push-ups"}
  ]}
]
```"#;
