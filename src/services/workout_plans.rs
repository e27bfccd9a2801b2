// ABOUTME: Workout plan generation from a user profile via the LLM
// ABOUTME: Normalizes days and exercises to the public workout plan shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::completion::{f64_field, parse_json_array, request_plan, str_field};
use crate::errors::AppResult;
use crate::llm::{prompts, LlmProvider};
use crate::models::{UserProfile, WorkoutItem, WorkoutPlan, WorkoutPlanDay};
use mealplan_core::constants::plan_defaults;

const PLAN_KIND: &str = "workout plan";

fn clean_exercise(item: &Value) -> WorkoutItem {
    let sets = f64_field(item, "sets", f64::from(plan_defaults::WORKOUT_SETS));
    WorkoutItem {
        name: str_field(item, "name", ""),
        sets: if sets.is_finite() && sets >= 0.0 {
            sets.round() as u32
        } else {
            plan_defaults::WORKOUT_SETS
        },
        reps: str_field(item, "reps", plan_defaults::WORKOUT_REPS),
        rest: str_field(item, "rest", plan_defaults::WORKOUT_REST),
    }
}

/// Reduce one LLM day object to the workout day fields
#[must_use]
pub fn clean_workout_day(item: &Value) -> WorkoutPlanDay {
    let workout_plan = item
        .get("workoutPlan")
        .and_then(Value::as_array)
        .map(|exercises| {
            exercises
                .iter()
                .filter(|exercise| exercise.is_object())
                .map(clean_exercise)
                .collect()
        })
        .unwrap_or_default();

    WorkoutPlanDay {
        day: str_field(item, "day", ""),
        focus: str_field(item, "focus", ""),
        workout_plan,
    }
}

/// Normalize completion text into a pretty-printed array of workout days
///
/// Returns `None` when the text is not a JSON array of objects.
#[must_use]
pub fn clean_workout_plan_text(content: &str) -> Option<String> {
    let items = parse_json_array(content)?;
    if !items.iter().all(Value::is_object) {
        return None;
    }
    let days: Vec<WorkoutPlanDay> = items.iter().map(clean_workout_day).collect();
    serde_json::to_string_pretty(&days).ok()
}

/// Generates workout plans
#[derive(Clone)]
pub struct WorkoutPlanService {
    llm: Arc<dyn LlmProvider>,
}

impl WorkoutPlanService {
    /// Create the service
    #[must_use]
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Generate a workout plan for a profile
    ///
    /// # Errors
    ///
    /// Propagates LLM failures the same way meal plan generation does.
    #[instrument(skip(self, profile), fields(training_days = profile.training_day))]
    pub async fn generate(&self, profile: UserProfile) -> AppResult<WorkoutPlan> {
        let completion = request_plan(
            self.llm.as_ref(),
            PLAN_KIND,
            prompts::WORKOUT_PLAN_SYSTEM_PROMPT,
            prompts::workout_plan_prompt(&profile),
        )
        .await?;

        let text = clean_workout_plan_text(&completion.content).unwrap_or_else(|| {
            warn!("Workout plan completion is not a JSON array; storing raw text");
            completion.content
        });

        let plan = WorkoutPlan::new(profile, text, completion.response_time_seconds);
        info!(
            plan_id = %plan.id,
            response_time_seconds = plan.response_time_seconds,
            "Generated workout plan"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_day_applies_exercise_defaults() {
        let day = clean_workout_day(&json!({
            "day": "Day 1",
            "focus": "Upper body",
            "notes": "warm up first",
            "workoutPlan": [
                {"name": "Push-up", "sets": 4, "reps": 12, "rest": "45s"},
                {"name": "Plank", "reps": "30s"},
                "stretch"
            ]
        }));
        assert_eq!(day.day, "Day 1");
        assert_eq!(day.workout_plan.len(), 2);
        assert_eq!(day.workout_plan[0].sets, 4);
        assert_eq!(day.workout_plan[0].reps, "12");
        assert_eq!(day.workout_plan[1].sets, 3);
        assert_eq!(day.workout_plan[1].rest, "60s");
    }

    #[test]
    fn test_clean_day_without_exercises() {
        let day = clean_workout_day(&json!({"focus": "Rest"}));
        assert_eq!(day.day, "");
        assert!(day.workout_plan.is_empty());
    }

    #[test]
    fn test_clean_plan_text_uses_workout_plan_key() {
        let text = clean_workout_plan_text(
            r#"[{"day":"Monday","focus":"Legs","workoutPlan":[{"name":"Squat","sets":"5","reps":"5","rest":"120s"}]}]"#,
        )
        .unwrap();
        let parsed: Vec<WorkoutPlanDay> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0].workout_plan[0].sets, 5);
        assert!(text.contains("\"workoutPlan\""));
        assert!(clean_workout_plan_text("Day 1: squats").is_none());
    }
}
