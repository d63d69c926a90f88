//! Error types for matchboard-core.

use thiserror::Error;

/// Errors returned by the board's lifecycle operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A required page element is absent.
    #[error("missing page element: #{0}")]
    MissingElement(String),

    /// A filter slot outside the three status slots.
    #[error("invalid filter slot: {0}")]
    InvalidSlot(usize),

    /// The platform refused to create a timer.
    #[error("failed to schedule timer: {0}")]
    Schedule(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from loading or validating a [`crate::BoardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed but unusable values.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Reasons a clock tick aborts. Consumed by the clock itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// One of the clock's display targets is not on the page.
    #[error("clock target missing: #{0}")]
    MissingTarget(String),
}
