use thiserror::Error;

/// Everything that can go wrong while resolving a configuration. All
/// variants are produced before any simulation work begins; none are
/// recoverable mid-run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown regime \"{name}\"")]
    UnknownRegime { name: String },

    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("invalid tuning: {reason}")]
    InvalidTuning { reason: String },
}
