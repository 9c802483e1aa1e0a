//! Structured error types for the Velella ecosystem.

use thiserror::Error;

/// Unified error type for all Velella operations.
#[derive(Debug, Error)]
pub enum VelellaError {
    /// Invalid input (empty or unsorted samples, bad arguments)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A computation has no defined result for the given input
    #[error("computation failed: {0}")]
    Computation(String),

    /// Invalid configuration value (out-of-range rates, negative weights)
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias used throughout the Velella ecosystem.
pub type Result<T> = std::result::Result<T, VelellaError>;
