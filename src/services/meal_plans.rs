// ABOUTME: Meal plan generation: prompt the LLM, normalize its items, and optionally add nutrition
// ABOUTME: Normalization keeps exactly the five meal entry fields with their defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::completion::{f64_field, parse_json_array, request_plan, str_field};
use crate::errors::AppResult;
use crate::llm::{prompts, LlmProvider};
use crate::models::{FoodItem, MealPlan, MealPlanEntry, MealPlanWithNutrition, UserProfile};
use crate::nutrition::NutritionService;
use mealplan_core::constants::plan_defaults;

const PLAN_KIND: &str = "meal plan";

/// Reduce one LLM item to the meal entry fields, applying defaults
#[must_use]
pub fn clean_meal_entry(item: &Value) -> MealPlanEntry {
    MealPlanEntry {
        meal_plan_type: str_field(item, "mealPlanType", ""),
        name: str_field(item, "name", ""),
        total_food: f64_field(item, "totalFood", plan_defaults::TOTAL_FOOD),
        unit: str_field(item, "unit", plan_defaults::UNIT),
        serving_size: f64_field(item, "servingSize", plan_defaults::CLEANED_SERVING_SIZE),
    }
}

/// Normalize completion text into a pretty-printed array of meal entries
///
/// Returns `None` when the text is not a JSON array of objects; callers keep
/// the raw text in that case.
#[must_use]
pub fn clean_meal_plan_text(content: &str) -> Option<String> {
    let items = parse_json_array(content)?;
    if !items.iter().all(Value::is_object) {
        return None;
    }
    let entries: Vec<MealPlanEntry> = items.iter().map(clean_meal_entry).collect();
    serde_json::to_string_pretty(&entries).ok()
}

/// Extract the food items of a stored meal plan for nutrition lookup
///
/// # Errors
///
/// Returns a serialization error if the plan text is not an array of items with names.
pub fn food_items_from_plan(meal_plan_text: &str) -> AppResult<Vec<FoodItem>> {
    Ok(serde_json::from_str(meal_plan_text)?)
}

/// Generates meal plans and attaches nutrition summaries
#[derive(Clone)]
pub struct MealPlanService {
    llm: Arc<dyn LlmProvider>,
    nutrition: NutritionService,
}

impl MealPlanService {
    /// Create the service
    #[must_use]
    pub fn new(llm: Arc<dyn LlmProvider>, nutrition: NutritionService) -> Self {
        Self { llm, nutrition }
    }

    /// Generate a meal plan for a profile
    ///
    /// # Errors
    ///
    /// Propagates LLM failures: upstream HTTP errors keep their status, and a
    /// completion without content becomes an "Error processing meal plan" error.
    #[instrument(skip(self, profile), fields(diet = %profile.diet_type))]
    pub async fn generate(&self, profile: UserProfile) -> AppResult<MealPlan> {
        let completion = request_plan(
            self.llm.as_ref(),
            PLAN_KIND,
            prompts::MEAL_PLAN_SYSTEM_PROMPT,
            prompts::meal_plan_prompt(&profile),
        )
        .await?;

        let text = clean_meal_plan_text(&completion.content).unwrap_or_else(|| {
            warn!("Meal plan completion is not a JSON array; storing raw text");
            completion.content
        });

        let plan = MealPlan::new(profile, text, completion.response_time_seconds);
        info!(
            plan_id = %plan.id,
            response_time_seconds = plan.response_time_seconds,
            "Generated meal plan"
        );
        Ok(plan)
    }

    /// Generate a meal plan and compute the nutrition of its items
    ///
    /// Nutrition is `None` when the plan text cannot be read as food items or
    /// when the lookup fails; the plan itself is always returned.
    ///
    /// # Errors
    ///
    /// Only plan generation errors are returned.
    pub async fn generate_with_nutrition(
        &self,
        profile: UserProfile,
    ) -> AppResult<MealPlanWithNutrition> {
        let meal_plan = self.generate(profile).await?;

        let nutrition = match food_items_from_plan(&meal_plan.meal_plan_text) {
            Ok(items) => match self.nutrition.calculate(&items).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!(plan_id = %meal_plan.id, error = %e, "Nutrition unavailable for meal plan");
                    None
                }
            },
            Err(e) => {
                warn!(plan_id = %meal_plan.id, error = %e, "Meal plan items are not readable food items");
                None
            }
        };

        Ok(MealPlanWithNutrition {
            meal_plan,
            nutrition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_entry_drops_extra_fields_and_applies_defaults() {
        let entry = clean_meal_entry(&json!({
            "mealPlanType": "LUNCH",
            "name": "Grilled Chicken",
            "calories": 300,
            "protein": 40
        }));
        assert_eq!(entry.meal_plan_type, "LUNCH");
        assert_eq!(entry.name, "Grilled Chicken");
        assert_eq!(entry.total_food, 1.0);
        assert_eq!(entry.unit, "serving");
        assert_eq!(entry.serving_size, 100.0);
    }

    #[test]
    fn test_clean_plan_text_is_pretty_printed() {
        let text = clean_meal_plan_text(
            r#"[{"mealPlanType":"BREAKFAST","name":"Oatmeal","totalFood":1,"unit":"cup","servingSize":1,"fiber":4}]"#,
        )
        .unwrap();
        assert!(text.starts_with("[\n  {\n    \"mealPlanType\": \"BREAKFAST\""));
        assert!(!text.contains("fiber"));
    }

    #[test]
    fn test_non_array_content_is_rejected() {
        assert!(clean_meal_plan_text("Sorry, I cannot help with that").is_none());
        assert!(clean_meal_plan_text(r#"{"meals": []}"#).is_none());
        assert!(clean_meal_plan_text(r#"["eggs", "toast"]"#).is_none());
    }

    #[test]
    fn test_food_items_from_cleaned_plan() {
        let text = clean_meal_plan_text(r#"[{"mealPlanType":"SNACK","name":"Apple","unit":"medium"}]"#)
            .unwrap();
        let items = food_items_from_plan(&text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Apple");
        assert_eq!(items[0].unit, "medium");
        assert_eq!(items[0].serving_size, 100.0);
        assert!(food_items_from_plan("not json").is_err());
    }
}
