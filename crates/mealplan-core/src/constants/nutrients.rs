// ABOUTME: Nutrient reference table used by the nutrition aggregation pipeline
// ABOUTME: Maps each nutrient to its output key, food database field, unit, and daily intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommended daily intake values follow the standard 2000 kcal reference diet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A nutrient reported in a nutrition summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    /// Energy
    Calories,
    /// Protein
    Protein,
    /// Total carbohydrate
    Carbs,
    /// Total fat
    Fat,
    /// Saturated fat
    SaturatedFat,
    /// Monounsaturated fat
    MonounsaturatedFat,
    /// Polyunsaturated fat
    PolyunsaturatedFat,
    /// Sugar
    Sugar,
    /// Dietary fiber
    Fiber,
    /// Cholesterol
    Cholesterol,
    /// Sodium
    Sodium,
    /// Potassium
    Potassium,
    /// Calcium
    Calcium,
    /// Iron
    Iron,
    /// Vitamin A (RAE)
    VitaminA,
    /// Vitamin C
    VitaminC,
}

impl Nutrient {
    /// All nutrients in reporting order
    pub const ALL: [Self; 16] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::SaturatedFat,
        Self::MonounsaturatedFat,
        Self::PolyunsaturatedFat,
        Self::Sugar,
        Self::Fiber,
        Self::Cholesterol,
        Self::Sodium,
        Self::Potassium,
        Self::Calcium,
        Self::Iron,
        Self::VitaminA,
        Self::VitaminC,
    ];

    /// Key used in JSON responses
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::SaturatedFat => "saturatedFat",
            Self::MonounsaturatedFat => "monounsaturatedFat",
            Self::PolyunsaturatedFat => "polyunsaturatedFat",
            Self::Sugar => "sugar",
            Self::Fiber => "fiber",
            Self::Cholesterol => "cholesterol",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::VitaminA => "vitaminA",
            Self::VitaminC => "vitaminC",
        }
    }

    /// Field name in a `FatSecret` serving object
    #[must_use]
    pub const fn fatsecret_field(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbohydrate",
            Self::Fat => "fat",
            Self::SaturatedFat => "saturated_fat",
            Self::MonounsaturatedFat => "monounsaturated_fat",
            Self::PolyunsaturatedFat => "polyunsaturated_fat",
            Self::Sugar => "sugar",
            Self::Fiber => "fiber",
            Self::Cholesterol => "cholesterol",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::VitaminA => "vitamin_a",
            Self::VitaminC => "vitamin_c",
        }
    }

    /// Unit the nutrient is reported in
    #[must_use]
    pub const fn default_unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein
            | Self::Carbs
            | Self::Fat
            | Self::SaturatedFat
            | Self::MonounsaturatedFat
            | Self::PolyunsaturatedFat
            | Self::Sugar
            | Self::Fiber => "g",
            Self::Cholesterol
            | Self::Sodium
            | Self::Potassium
            | Self::Calcium
            | Self::Iron
            | Self::VitaminC => "mg",
            Self::VitaminA => "mcg",
        }
    }

    /// Recommended daily intake in [`Self::default_unit`], if one is defined
    #[must_use]
    pub const fn rdi(self) -> Option<f64> {
        match self {
            Self::Protein => Some(50.0),
            Self::Carbs => Some(300.0),
            Self::Fat => Some(65.0),
            Self::SaturatedFat => Some(20.0),
            Self::Fiber => Some(25.0),
            Self::Cholesterol => Some(300.0),
            Self::Sodium => Some(2300.0),
            Self::Potassium => Some(4700.0),
            Self::Calcium => Some(1000.0),
            Self::Iron => Some(18.0),
            Self::VitaminA => Some(900.0),
            Self::VitaminC => Some(90.0),
            Self::Calories
            | Self::MonounsaturatedFat
            | Self::PolyunsaturatedFat
            | Self::Sugar => None,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
