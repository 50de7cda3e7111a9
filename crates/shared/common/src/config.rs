//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all binaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_name: service_name.into(),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}
