// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports environment-driven server, LLM, and food database configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, FatSecretConfig, LlmConfig, ServerConfig};
