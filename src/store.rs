// ABOUTME: In-memory plan storage keyed by plan id with offset pagination
// ABOUTME: Lists are ordered by creation time so pages are stable across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Deserialize;
use std::sync::Arc;

use crate::models::{MealPlan, WorkoutPlan};

/// Default page size for list endpoints
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// A plan that can be kept in a [`PlanStore`]
pub trait StoredPlan: Clone + Send + Sync + 'static {
    /// Unique id
    fn id(&self) -> &str;
    /// Creation timestamp used for ordering
    fn created_at(&self) -> DateTime<Utc>;
}

impl StoredPlan for MealPlan {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl StoredPlan for WorkoutPlan {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Offset pagination query parameters (`?skip=0&limit=10`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    /// Number of plans to skip
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of plans to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

const fn default_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Concurrent map of plans; clones share the same storage
#[derive(Clone)]
pub struct PlanStore<T: StoredPlan> {
    plans: Arc<DashMap<String, T>>,
}

impl<T: StoredPlan> PlanStore<T> {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            plans: Arc::new(DashMap::new()),
        }
    }

    /// Insert or replace a plan
    pub fn insert(&self, plan: T) {
        self.plans.insert(plan.id().to_owned(), plan);
    }

    /// Fetch a plan by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<T> {
        self.plans.get(id).map(|entry| entry.value().clone())
    }

    /// Number of stored plans
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// One page of plans, oldest first; ties are broken by id
    #[must_use]
    pub fn list(&self, page: PageParams) -> Vec<T> {
        let mut plans: Vec<T> = self
            .plans
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        plans.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        plans.into_iter().skip(page.skip).take(page.limit).collect()
    }
}

impl<T: StoredPlan> Default for PlanStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use chrono::Duration;

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "gender": "male", "age": 40, "height": 180, "weight": 90.0,
            "desiredWeight": 82.0, "weeklyWeightLossGoal": 0.5, "trainingDay": 3,
            "workoutLocation": "gym", "dietType": "balanced", "reachingGoals": "fitness"
        }))
        .unwrap()
    }

    fn plan_at(offset_secs: i64) -> MealPlan {
        let mut plan = MealPlan::new(profile(), "[]".into(), 0.5);
        plan.created_at = plan.created_at + Duration::seconds(offset_secs);
        plan
    }

    #[test]
    fn test_insert_get_and_len() {
        let store = PlanStore::new();
        assert!(store.is_empty());
        let plan = plan_at(0);
        store.insert(plan.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&plan.id), Some(plan));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_list_orders_by_creation_and_paginates() {
        let store = PlanStore::new();
        let newest = plan_at(20);
        let oldest = plan_at(-20);
        let middle = plan_at(0);
        for plan in [&newest, &oldest, &middle] {
            store.insert(plan.clone());
        }

        let all = store.list(PageParams::default());
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, [oldest.id.as_str(), middle.id.as_str(), newest.id.as_str()]);

        let page = store.list(PageParams { skip: 1, limit: 1 });
        assert_eq!(page[0].id, middle.id);

        assert!(store.list(PageParams { skip: 5, limit: 10 }).is_empty());
        assert!(store.list(PageParams { skip: 0, limit: 0 }).is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let store = PlanStore::new();
        let clone = store.clone();
        clone.insert(plan_at(0));
        assert_eq!(store.len(), 1);
    }
}
