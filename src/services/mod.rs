// ABOUTME: Plan generation services shared by the HTTP route handlers
// ABOUTME: Meal plans, workout plans, and the common LLM completion round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they decode the request, call a service here,
//! and store or render the result.

/// LLM round trip with timing, plus JSON helpers for completion text
pub mod completion;

/// Meal plan generation and nutrition enrichment
pub mod meal_plans;

/// Workout plan generation
pub mod workout_plans;

pub use meal_plans::MealPlanService;
pub use workout_plans::WorkoutPlanService;
