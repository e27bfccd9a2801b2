// ABOUTME: Pure nutrition math: serving selection, quantity scaling, and aggregation
// ABOUTME: Produces a NutritionResponse with values and RDI percentages rounded to 2 decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use crate::external::{FoodDetails, Serving};
use crate::models::{NutrientInfo, NutritionResponse};
use mealplan_core::constants::Nutrient;

/// Unit reported for a nutrient no resolved item provided a unit for
const FALLBACK_UNIT: &str = "g";

/// Nutrient amounts for one resolved food item, already scaled to the requested quantity
#[derive(Debug, Clone, PartialEq)]
pub struct ItemNutrition {
    /// Name of the matched food
    pub food_name: String,
    /// Scaled value per nutrient
    pub values: HashMap<Nutrient, f64>,
    /// Unit per nutrient
    pub units: HashMap<Nutrient, String>,
}

/// Pick the serving whose description mentions `unit`, falling back to the first one
///
/// Matching is a case-insensitive substring test on `measurement_description`.
#[must_use]
pub fn select_serving<'a>(servings: &'a [Serving], unit: &str) -> Option<&'a Serving> {
    let wanted = unit.to_lowercase();
    servings
        .iter()
        .find(|serving| {
            serving
                .measurement_description
                .to_lowercase()
                .contains(&wanted)
        })
        .or_else(|| servings.first())
}

/// Scale the nutrients of the best matching serving by the requested quantity
///
/// With `n` the serving's `number_of_units` (1 when absent or not positive), every
/// value is multiplied by `(total_food / n) * (serving_size / n)`. Returns `None`
/// when the food has no servings.
#[must_use]
pub fn scale_serving(
    details: &FoodDetails,
    total_food: f64,
    unit: &str,
    serving_size: f64,
) -> Option<ItemNutrition> {
    let serving = select_serving(&details.servings, unit)?;

    let units_per_serving = serving
        .number_of_units
        .filter(|n| *n > 0.0)
        .unwrap_or(1.0);
    let multiplier = (total_food / units_per_serving) * (serving_size / units_per_serving);

    let values = Nutrient::ALL
        .iter()
        .map(|&nutrient| (nutrient, serving.nutrient(nutrient) * multiplier))
        .collect();
    let units = Nutrient::ALL
        .iter()
        .map(|&nutrient| (nutrient, nutrient.default_unit().to_owned()))
        .collect();

    Some(ItemNutrition {
        food_name: details.food_name.clone(),
        values,
        units,
    })
}

/// Round to 2 decimal places, exact halves going to the even neighbour
fn round_to_2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Sum every nutrient across items and attach RDI percentages
///
/// The percentage is computed from the unrounded total and rounded separately.
#[must_use]
pub fn combine(items: &[ItemNutrition]) -> NutritionResponse {
    NutritionResponse::from_fn(|nutrient| {
        let total: f64 = items
            .iter()
            .filter_map(|item| item.values.get(&nutrient))
            .sum();
        let unit = items
            .iter()
            .find_map(|item| item.units.get(&nutrient))
            .map_or(FALLBACK_UNIT, String::as_str);
        let rdi_percent = nutrient
            .rdi()
            .filter(|rdi| *rdi > 0.0)
            .map(|rdi| round_to_2(total / rdi * 100.0));

        NutrientInfo {
            value: round_to_2(total),
            unit: unit.to_owned(),
            rdi_percent,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(servings: Vec<Serving>) -> FoodDetails {
        FoodDetails {
            food_id: "1".into(),
            food_name: "Test Food".into(),
            servings,
        }
    }

    #[test]
    fn test_select_serving_matches_unit_case_insensitively() {
        let servings = vec![
            Serving::new("100 g", 100.0),
            Serving::new("1 Cup, chopped", 1.0),
        ];
        let chosen = select_serving(&servings, "cup").unwrap();
        assert_eq!(chosen.measurement_description, "1 Cup, chopped");
    }

    #[test]
    fn test_select_serving_falls_back_to_first() {
        let servings = vec![Serving::new("100 g", 100.0), Serving::new("slice", 1.0)];
        let chosen = select_serving(&servings, "serving").unwrap();
        assert_eq!(chosen.measurement_description, "100 g");
        assert!(select_serving(&[], "cup").is_none());
    }

    #[test]
    fn test_scale_serving_multiplier() {
        let details = food(vec![Serving::new("cup", 2.0)
            .with_nutrient(Nutrient::Protein, 10.0)
            .with_nutrient(Nutrient::Calories, 200.0)]);

        // (3 / 2) * (4 / 2) = 3
        let scaled = scale_serving(&details, 3.0, "cup", 4.0).unwrap();
        assert_eq!(scaled.values[&Nutrient::Protein], 30.0);
        assert_eq!(scaled.values[&Nutrient::Calories], 600.0);
        assert_eq!(scaled.values[&Nutrient::Fiber], 0.0);
        assert_eq!(scaled.units[&Nutrient::Calories], "kcal");
    }

    #[test]
    fn test_scale_serving_treats_missing_units_as_one() {
        let mut serving = Serving::new("medium", 0.0).with_nutrient(Nutrient::Iron, 1.5);
        serving.number_of_units = None;
        let scaled = scale_serving(&food(vec![serving]), 2.0, "medium", 1.0).unwrap();
        assert_eq!(scaled.values[&Nutrient::Iron], 3.0);
    }

    #[test]
    fn test_scale_serving_without_servings() {
        assert!(scale_serving(&food(Vec::new()), 1.0, "cup", 1.0).is_none());
    }

    #[test]
    fn test_combine_sums_rounds_and_computes_rdi() {
        let a = scale_serving(
            &food(vec![Serving::new("g", 1.0)
                .with_nutrient(Nutrient::Protein, 12.345)
                .with_nutrient(Nutrient::Sodium, 1150.0)
                .with_nutrient(Nutrient::Calories, 100.0)]),
            1.0,
            "g",
            1.0,
        )
        .unwrap();
        let b = scale_serving(
            &food(vec![Serving::new("g", 1.0)
                .with_nutrient(Nutrient::Protein, 12.345)
                .with_nutrient(Nutrient::Sodium, 1150.0)]),
            1.0,
            "g",
            1.0,
        )
        .unwrap();

        let combined = combine(&[a, b]);
        assert_eq!(combined.protein.value, 24.69);
        assert_eq!(combined.protein.unit, "g");
        assert_eq!(combined.protein.rdi_percent, Some(49.38));
        assert_eq!(combined.sodium.value, 2300.0);
        assert_eq!(combined.sodium.rdi_percent, Some(100.0));
        assert_eq!(combined.calories.value, 100.0);
        assert_eq!(combined.calories.unit, "kcal");
        assert_eq!(combined.calories.rdi_percent, None);
    }

    #[test]
    fn test_round_to_2_sends_exact_halves_to_even() {
        assert_eq!(round_to_2(0.125), 0.12);
        assert_eq!(round_to_2(0.375), 0.38);
        assert_eq!(round_to_2(-0.125), -0.12);
        assert_eq!(round_to_2(1.006), 1.01);
    }

    #[test]
    fn test_combine_rounds_exact_half_totals_to_even() {
        let item = scale_serving(
            &food(vec![Serving::new("g", 1.0).with_nutrient(Nutrient::Calories, 0.125)]),
            1.0,
            "g",
            1.0,
        )
        .unwrap();
        assert_eq!(combine(&[item]).calories.value, 0.12);
    }

    #[test]
    fn test_combine_empty_uses_fallback_unit() {
        let combined = combine(&[]);
        assert_eq!(combined.vitamin_a.value, 0.0);
        assert_eq!(combined.vitamin_a.unit, "g");
        assert_eq!(combined.vitamin_a.rdi_percent, Some(0.0));
    }
}
