//! Error types for the remnant model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemnantError {
    /// Rejected at construction or reset, never mid-simulation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RemnantError>;

pub(crate) fn invalid(message: impl Into<String>) -> RemnantError {
    RemnantError::InvalidConfiguration(message.into())
}
