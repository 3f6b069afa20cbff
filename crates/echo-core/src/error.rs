//! Error types shared by the sensing core.

use thiserror::Error;

/// Errors surfaced by configuration checks and per-frame evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EchoError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("missing input: {0}")]
    MissingInput(String),
}

pub type Result<T> = std::result::Result<T, EchoError>;

pub(crate) fn ensure_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EchoError::InvalidConfiguration(format!(
            "{name} must be positive, got {value}"
        )))
    }
}
