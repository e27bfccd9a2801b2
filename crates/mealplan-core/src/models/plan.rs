// ABOUTME: Generated meal and workout plan models
// ABOUTME: Includes the cleaned shapes of LLM meal entries and workout days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{NutritionResponse, UserProfile};

/// A generated meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Unique plan identifier
    pub id: String,
    /// Profile the plan was generated for
    pub user_profile: UserProfile,
    /// Plan body: a pretty-printed JSON array of entries, or raw LLM text
    pub meal_plan_text: String,
    /// Time spent waiting on the LLM
    pub response_time_seconds: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Create a plan with a fresh id and the current timestamp
    #[must_use]
    pub fn new(user_profile: UserProfile, meal_plan_text: String, response_time_seconds: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_profile,
            meal_plan_text,
            response_time_seconds,
            created_at: Utc::now(),
        }
    }
}

/// A meal plan paired with the nutrition summary of its items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanWithNutrition {
    /// The generated plan
    pub meal_plan: MealPlan,
    /// Nutrition summary, absent when it could not be computed
    pub nutrition: Option<NutritionResponse>,
}

/// One cleaned food entry of a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    /// BREAKFAST, LUNCH, DINNER, or SNACK
    pub meal_plan_type: String,
    /// Food name
    pub name: String,
    /// Quantity of food
    pub total_food: f64,
    /// Unit of measurement
    pub unit: String,
    /// Serving size
    pub serving_size: f64,
}

/// A single exercise in a workout day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutItem {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions, free text ("8-12", "30s")
    pub reps: String,
    /// Rest between sets, free text
    pub rest: String,
}

/// One training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlanDay {
    /// Day label ("Day 1", "Monday")
    pub day: String,
    /// Focus of the session
    pub focus: String,
    /// Exercises for the day
    #[serde(rename = "workoutPlan")]
    pub workout_plan: Vec<WorkoutItem>,
}

/// A generated workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Unique plan identifier
    pub id: String,
    /// Profile the plan was generated for
    pub user_profile: UserProfile,
    /// Plan body: a pretty-printed JSON array of days, or raw LLM text
    pub workout_plan_text: String,
    /// Time spent waiting on the LLM
    pub response_time_seconds: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Create a plan with a fresh id and the current timestamp
    #[must_use]
    pub fn new(
        user_profile: UserProfile,
        workout_plan_text: String,
        response_time_seconds: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_profile,
            workout_plan_text,
            response_time_seconds,
            created_at: Utc::now(),
        }
    }
}
