// ABOUTME: Shared LLM round trip for plan generation with timing and JSON extraction helpers
// ABOUTME: Maps malformed completions to "Error processing <plan>" internal errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use std::time::Instant;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::logging::AppLogger;
use mealplan_core::constants::llm;

/// Raw completion text and how long the model took to produce it
#[derive(Debug, Clone)]
pub struct PlanCompletion {
    /// Message content returned by the model
    pub content: String,
    /// Wall-clock seconds spent on the LLM call, rounded to 2 decimals
    pub response_time_seconds: f64,
}

/// Ask the model for a plan using the plan generation sampling settings
///
/// `plan_kind` names the plan in error messages ("meal plan", "workout plan").
pub async fn request_plan(
    llm_provider: &dyn LlmProvider,
    plan_kind: &str,
    system_prompt: &str,
    user_prompt: String,
) -> AppResult<PlanCompletion> {
    let request = ChatRequest::new(vec![
        ChatMessage::system(system_prompt.trim_end()),
        ChatMessage::user(user_prompt),
    ])
    .with_model(llm_provider.default_model())
    .with_temperature(llm::PLAN_TEMPERATURE)
    .with_max_tokens(llm::PLAN_MAX_TOKENS);

    let started = Instant::now();
    let result = llm_provider.complete(&request).await;
    let elapsed = started.elapsed();

    AppLogger::log_llm_call(
        llm_provider.default_model(),
        plan_kind,
        result.is_ok(),
        elapsed.as_millis() as u64,
    );

    let response = result.map_err(|e| {
        if e.code == ErrorCode::InternalError {
            AppError::internal(format!("Error processing {plan_kind}: {}", e.message))
        } else {
            e
        }
    })?;

    Ok(PlanCompletion {
        content: response.content,
        response_time_seconds: (elapsed.as_secs_f64() * 100.0).round() / 100.0,
    })
}

/// Parse completion text as a JSON array, tolerating a surrounding markdown code fence
#[must_use]
pub fn parse_json_array(content: &str) -> Option<Vec<Value>> {
    let trimmed = content.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    match serde_json::from_str(unfenced.trim()) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// String field with a default for missing or non-string values
#[must_use]
pub fn str_field(item: &Value, key: &str, default: &str) -> String {
    match item.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => default.to_owned(),
    }
}

/// Numeric field accepting numbers or numeric strings, with a default
#[must_use]
pub fn f64_field(item: &Value, key: &str, default: f64) -> f64 {
    match item.get(key) {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(default),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(default),
        _ => default,
    }
}
