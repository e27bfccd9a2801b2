// ABOUTME: Food item input and nutrition summary output models
// ABOUTME: NutritionResponse holds one NutrientInfo per tracked nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::{plan_defaults, Nutrient};

/// A food item to resolve against the food database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Food name used as the search expression
    pub name: String,
    /// Quantity of food
    #[serde(default = "default_total_food")]
    pub total_food: f64,
    /// Unit of measurement, matched against serving descriptions
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Serving size multiplier
    #[serde(default = "default_serving_size")]
    pub serving_size: f64,
}

impl FoodItem {
    /// Create a food item with default quantity, unit, and serving size
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_food: plan_defaults::TOTAL_FOOD,
            unit: plan_defaults::UNIT.to_owned(),
            serving_size: plan_defaults::FOOD_ITEM_SERVING_SIZE,
        }
    }
}

const fn default_total_food() -> f64 {
    plan_defaults::TOTAL_FOOD
}

fn default_unit() -> String {
    plan_defaults::UNIT.to_owned()
}

const fn default_serving_size() -> f64 {
    plan_defaults::FOOD_ITEM_SERVING_SIZE
}

/// Amount of one nutrient with its share of the recommended daily intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientInfo {
    /// Amount in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
    /// Percent of recommended daily intake, when one is defined
    pub rdi_percent: Option<f64>,
}

/// Combined nutrition summary for a list of food items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResponse {
    /// Energy
    pub calories: NutrientInfo,
    /// Protein
    pub protein: NutrientInfo,
    /// Carbohydrates
    pub carbs: NutrientInfo,
    /// Total fat
    pub fat: NutrientInfo,
    /// Saturated fat
    pub saturated_fat: NutrientInfo,
    /// Monounsaturated fat
    pub monounsaturated_fat: NutrientInfo,
    /// Polyunsaturated fat
    pub polyunsaturated_fat: NutrientInfo,
    /// Sugar
    pub sugar: NutrientInfo,
    /// Fiber
    pub fiber: NutrientInfo,
    /// Cholesterol
    pub cholesterol: NutrientInfo,
    /// Sodium
    pub sodium: NutrientInfo,
    /// Potassium
    pub potassium: NutrientInfo,
    /// Calcium
    pub calcium: NutrientInfo,
    /// Iron
    pub iron: NutrientInfo,
    /// Vitamin A
    pub vitamin_a: NutrientInfo,
    /// Vitamin C
    pub vitamin_c: NutrientInfo,
}

impl NutritionResponse {
    /// Build a summary by computing every nutrient with `f`
    pub fn from_fn(mut f: impl FnMut(Nutrient) -> NutrientInfo) -> Self {
        Self {
            calories: f(Nutrient::Calories),
            protein: f(Nutrient::Protein),
            carbs: f(Nutrient::Carbs),
            fat: f(Nutrient::Fat),
            saturated_fat: f(Nutrient::SaturatedFat),
            monounsaturated_fat: f(Nutrient::MonounsaturatedFat),
            polyunsaturated_fat: f(Nutrient::PolyunsaturatedFat),
            sugar: f(Nutrient::Sugar),
            fiber: f(Nutrient::Fiber),
            cholesterol: f(Nutrient::Cholesterol),
            sodium: f(Nutrient::Sodium),
            potassium: f(Nutrient::Potassium),
            calcium: f(Nutrient::Calcium),
            iron: f(Nutrient::Iron),
            vitamin_a: f(Nutrient::VitaminA),
            vitamin_c: f(Nutrient::VitaminC),
        }
    }

    /// Look up a nutrient by enum
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> &NutrientInfo {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein,
            Nutrient::Carbs => &self.carbs,
            Nutrient::Fat => &self.fat,
            Nutrient::SaturatedFat => &self.saturated_fat,
            Nutrient::MonounsaturatedFat => &self.monounsaturated_fat,
            Nutrient::PolyunsaturatedFat => &self.polyunsaturated_fat,
            Nutrient::Sugar => &self.sugar,
            Nutrient::Fiber => &self.fiber,
            Nutrient::Cholesterol => &self.cholesterol,
            Nutrient::Sodium => &self.sodium,
            Nutrient::Potassium => &self.potassium,
            Nutrient::Calcium => &self.calcium,
            Nutrient::Iron => &self.iron,
            Nutrient::VitaminA => &self.vitamin_a,
            Nutrient::VitaminC => &self.vitamin_c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_food_item_defaults() {
        let item: FoodItem = serde_json::from_value(json!({ "name": "Oatmeal" })).unwrap();
        assert_eq!(item, FoodItem::named("Oatmeal"));
        assert!((item.serving_size - 1.0).abs() < f64::EPSILON);
        assert_eq!(item.unit, "serving");
    }

    #[test]
    fn test_response_keys_match_nutrient_keys() {
        let response = NutritionResponse::from_fn(|n| NutrientInfo {
            value: 1.0,
            unit: n.default_unit().to_owned(),
            rdi_percent: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        for nutrient in Nutrient::ALL {
            assert_eq!(
                json[nutrient.key()]["unit"],
                nutrient.default_unit(),
                "missing key {nutrient}"
            );
            assert_eq!(response.get(nutrient).unit, nutrient.default_unit());
        }
    }
}
