//! Error type for the mining entry points.
//!
//! Only argument and configuration checks surface as errors. Tree mutations
//! report out-of-range handles through `bool` results instead.

use thiserror::Error;

/// Errors raised before any mining work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MiningError {
    /// An argument passed to a mining call is unusable
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// A `MinerConfig` field is out of range
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Which field and why
        message: String,
    },
}

impl MiningError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MiningError>;
