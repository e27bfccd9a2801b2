// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads LLM and food database credentials, endpoints, and server binding from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use mealplan_core::constants::{fatsecret, llm};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Environment type for logging and defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Chat-completion API settings
#[derive(Clone)]
pub struct LlmConfig {
    /// Bearer key for the chat-completions endpoint
    pub api_key: String,
    /// Full chat-completions URL
    pub api_url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// `FatSecret` food database settings
#[derive(Clone)]
pub struct FatSecretConfig {
    /// REST endpoint for method calls
    pub base_url: String,
    /// OAuth 2.0 token endpoint
    pub auth_url: String,
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
}

impl fmt::Debug for FatSecretConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FatSecretConfig")
            .field("base_url", &self.base_url)
            .field("auth_url", &self.auth_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// LLM settings
    pub llm: LlmConfig,
    /// Food database settings
    pub fatsecret: FatSecretConfig,
}

impl ServerConfig {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
    /// Default bind address
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";

    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or a numeric value
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} environment variable is required"))
        };

        let config = Self {
            host: var_or("HOST", Self::DEFAULT_HOST),
            http_port: var_or("HTTP_PORT", &Self::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&var_or("ENVIRONMENT", "development")),
            llm: LlmConfig {
                api_key: required("API_KEY")?,
                api_url: var_or("API_URL", llm::DEFAULT_API_URL),
                model: var_or("MODEL", llm::DEFAULT_MODEL),
                timeout_secs: var_or("LLM_TIMEOUT_SECS", &llm::DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()
                    .context("Invalid LLM_TIMEOUT_SECS value")?,
            },
            fatsecret: FatSecretConfig {
                base_url: var_or("FAT_SECRET_BASEURL", fatsecret::DEFAULT_BASE_URL),
                auth_url: var_or("FAT_SECRET_AUTH_URL", fatsecret::DEFAULT_AUTH_URL),
                client_id: required("FAT_SECRET_CLIENT_ID")?,
                client_secret: required("FAT_SECRET_CLIENT_SECRET")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint URL is not absolute or the port is zero.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be non-zero"));
        }
        for (name, url) in [
            ("API_URL", &self.llm.api_url),
            ("FAT_SECRET_BASEURL", &self.fatsecret.base_url),
            ("FAT_SECRET_AUTH_URL", &self.fatsecret.auth_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!("{name} must be an http(s) URL, got {url}"));
            }
        }
        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Meal Plan Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - LLM Endpoint: {}\n\
             - LLM Model: {}\n\
             - Food Database: {}",
            self.bind_address(),
            self.environment,
            self.llm.api_url,
            self.llm.model,
            self.fatsecret.base_url,
        )
    }
}
