//! Crate-wide error type.
//!
//! The algorithms themselves are infallible once handed a valid graph. Errors
//! come from configuration (vertex counts, coordinate bounds, size ranges) and
//! from the worker pool that runs the experiment.

use thiserror::Error;

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value is outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The rayon worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A worker panicked while holding shared state. The run cannot continue.
    #[error("shared state poisoned: {0}")]
    Poisoned(String),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
