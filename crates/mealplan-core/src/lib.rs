// ABOUTME: Core types and constants for the meal plan server
// ABOUTME: Foundation crate with error handling, plan models, and nutrient reference data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Core
//!
//! Foundation crate providing shared types for the meal plan server. It holds
//! everything that does not need network access so that the server crate and
//! its tests share a single definition of the wire models.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrient table (field names, units, RDI) and LLM defaults
//! - **models**: User profile, food item, nutrition summary, and plan models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Wire models for profiles, plans, and nutrition summaries
pub mod models;
