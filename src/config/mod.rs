//! Persistent dashboard preferences and their on-disk storage.

mod manager;
mod model;

use std::io;

use thiserror::Error;

pub use manager::{ConfigManager, HOME_ENV_VAR};
pub use model::DashboardConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}
