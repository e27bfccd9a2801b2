// ABOUTME: Wire models shared by the meal plan server and its tests
// ABOUTME: Re-exports profile, nutrition, and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Generated meal and workout plans
pub mod plan;
/// Food items and nutrition summaries
pub mod nutrition;
/// User profile used to personalize prompts
pub mod profile;

pub use nutrition::{FoodItem, NutrientInfo, NutritionResponse};
pub use plan::{
    MealPlan, MealPlanEntry, MealPlanWithNutrition, WorkoutItem, WorkoutPlan, WorkoutPlanDay,
};
pub use profile::UserProfile;
