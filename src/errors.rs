use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Unified error type for everything around the pure transforms.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{}", api_message(.endpoint, .message))]
    Api {
        endpoint: Option<String>,
        message: String,
    },
    #[error("Invalid date range: {0}")]
    InvalidRange(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, DashboardError>;

fn api_message(endpoint: &Option<String>, message: &str) -> String {
    match endpoint {
        Some(name) => format!("Error loading {name}: {message}"),
        None => format!("API error: {message}"),
    }
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => DashboardError::Io(io),
            ConfigError::Serde(message) => DashboardError::Config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_mentions_endpoint_when_known() {
        let err = DashboardError::Api {
            endpoint: Some("transactions".into()),
            message: "db locked".into(),
        };
        assert_eq!(err.to_string(), "Error loading transactions: db locked");
    }

    #[test]
    fn config_serde_error_maps_to_config_variant() {
        let err = DashboardError::from(ConfigError::Serde("bad json".into()));
        assert!(matches!(err, DashboardError::Config(ref m) if m == "bad json"));
    }
}
