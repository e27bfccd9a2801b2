// ABOUTME: User profile model used to personalize meal and workout prompts
// ABOUTME: Serialized with camelCase keys to match the public API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::plan_defaults;

/// Body measurements, goals, and preferences of the person a plan is for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Gender as given by the user
    pub gender: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: u32,
    /// Current weight in kilograms
    pub weight: f64,
    /// Target weight in kilograms
    pub desired_weight: f64,
    /// Weekly weight change goal in kilograms
    pub weekly_weight_loss_goal: f64,
    /// Training days per week
    pub training_day: u8,
    /// Where the user trains (gym, home, outdoors)
    pub workout_location: String,
    /// Diet type (balanced, keto, vegan)
    pub diet_type: String,
    /// Main fitness goal
    pub reaching_goals: String,
    /// Additional goals
    #[serde(default = "default_accomplish")]
    pub accomplish: String,
}

fn default_accomplish() -> String {
    plan_defaults::ACCOMPLISH.to_owned()
}
