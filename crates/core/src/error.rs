//! Library error type. Logical shortfalls (unstitched rooms, capped forest
//! growth) are logged, never returned.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    #[error("invalid dimensions {width}x{height}: both sides must be at least {min}")]
    InvalidDimensions { width: usize, height: usize, min: usize },

    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("builder finished without a map size")]
    MissingDimensions,

    #[error("invalid map: {reason}")]
    InvalidMap { reason: String },
}

impl GenError {
    pub(crate) fn invalid_map(reason: impl Into<String>) -> Self {
        Self::InvalidMap { reason: reason.into() }
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize, min: usize) -> Result<(), GenError> {
    if width < min || height < min {
        return Err(GenError::InvalidDimensions { width, height, min });
    }
    Ok(())
}

pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), GenError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GenError::ProbabilityOutOfRange { name, value });
    }
    Ok(())
}
