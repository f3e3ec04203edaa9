//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from `{PREFIX}_HOST`, `{PREFIX}_PORT` and `RUST_LOG`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env(prefix: &str, service_name: &str, default_port: u16) -> Self {
        Self {
            service_name: service_name.to_string(),
            host: env::var(format!("{}_HOST", prefix)).unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Socket address string in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults_for_unset_prefix() {
        let config = ServiceConfig::from_env("UNSET_PREFIX_FOR_TEST", "sample-service", 4242);

        assert_eq!(config.service_name, "sample-service");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4242);
        assert_eq!(config.bind_addr(), "0.0.0.0:4242");
    }
}
