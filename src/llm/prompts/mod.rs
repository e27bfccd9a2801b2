// ABOUTME: Prompt builders for meal and workout plan generation
// ABOUTME: System prompts are loaded at compile time; user prompts embed the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Prompts
//!
//! System prompts live in markdown files next to this module so they can be
//! edited without touching code. User prompts are rendered from a
//! [`UserProfile`] and describe the exact JSON shape the model must return.

use crate::models::UserProfile;

/// System prompt for meal plan generation
pub const MEAL_PLAN_SYSTEM_PROMPT: &str = include_str!("meal_plan_system.md");

/// System prompt for workout plan generation
pub const WORKOUT_PLAN_SYSTEM_PROMPT: &str = include_str!("workout_plan_system.md");

/// Shared profile section used by both prompts
fn profile_section(user: &UserProfile) -> String {
    format!(
        "User Profile:\n\
         - Gender: {}\n\
         - Age: {}\n\
         - Height: {}cm\n\
         - Current Weight: {}kg\n\
         - Target Weight: {}kg\n\
         - Weekly Weight Goal: {}kg\n\
         - Training: {} days/week at {}\n\
         - Diet Type: {}\n\
         - Goals: {}, {}\n",
        user.gender,
        user.age,
        user.height,
        user.weight,
        user.desired_weight,
        user.weekly_weight_loss_goal,
        user.training_day,
        user.workout_location,
        user.diet_type.to_uppercase(),
        user.reaching_goals,
        user.accomplish,
    )
}

/// Render the meal plan request for a profile
#[must_use]
pub fn meal_plan_prompt(user: &UserProfile) -> String {
    format!(
        "You are a professional nutritionist AI. Based on the following user profile, \
         generate a simplified daily meal plan.\n\n\
         {profile}\n\
         Instructions:\n\
         - For each meal (BREAKFAST, LUNCH, DINNER, SNACK), suggest 3-5 healthy food items.\n\
         - For each food item, return a JSON object with EXACTLY the following format:\n\
         {{\n  \
           \"mealPlanType\": \"BREAKFAST\" | \"LUNCH\" | \"DINNER\" | \"SNACK\",\n  \
           \"name\": \"Food Name\",\n  \
           \"totalFood\": number,\n  \
           \"unit\": \"unit of measurement\",\n  \
           \"servingSize\": number\n\
         }}\n\n\
         - Return the full response as a list of JSON objects (not narrative text).\n\
         - Do NOT include any additional fields such as calories, protein, carbs, etc.\n\
         - Ensure the meal plan is balanced and appropriate for the user's profile and goals.\n",
        profile = profile_section(user),
    )
}

/// Render the workout plan request for a profile
///
/// The number of training days requested follows `training_day`.
#[must_use]
pub fn workout_plan_prompt(user: &UserProfile) -> String {
    format!(
        "You are a certified personal trainer AI. Based on the following user profile, \
         generate a weekly workout plan.\n\n\
         {profile}\n\
         Instructions:\n\
         - Create exactly {days} training days suited to training at {location}.\n\
         - For each day, return a JSON object with EXACTLY the following format:\n\
         {{\n  \
           \"day\": \"Day 1\",\n  \
           \"focus\": \"muscle group or training focus\",\n  \
           \"workoutPlan\": [\n    \
             {{\"name\": \"Exercise Name\", \"sets\": number, \"reps\": \"8-12\", \"rest\": \"60s\"}}\n  \
           ]\n\
         }}\n\n\
         - Include 4-6 exercises per day.\n\
         - Return the full response as a list of JSON objects (not narrative text).\n\
         - Ensure the plan supports the user's goals and weekly weight target.\n",
        profile = profile_section(user),
        days = user.training_day,
        location = user.workout_location,
    )
}
