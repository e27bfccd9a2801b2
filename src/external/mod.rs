// ABOUTME: External API client modules (FatSecret food database)
// ABOUTME: Exposes the food database trait, the live client, and an in-memory mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

pub mod fatsecret_client;

pub use fatsecret_client::{
    FatSecretClient, FoodDatabase, FoodDetails, MockFoodDatabase, Serving,
};
