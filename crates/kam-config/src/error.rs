use thiserror::Error;

/// Failure to assemble a usable `KamConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer could not be parsed or a key has the wrong type.
    #[error("failed to load kam config: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but would break the reconciliation workflow.
    #[error("kam config field '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
