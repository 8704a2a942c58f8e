//! Error types for the banditlab library.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors that can occur while configuring or running a comparison.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// The strategy identifier does not name any known policy.
    #[error("unknown strategy: {name}")]
    UnknownStrategy { name: String },

    /// No arms are available in the reward environment.
    #[error("no arms available")]
    NoArmsAvailable,

    /// Invalid configuration value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}
