//! Errors returned by the noise estimator and profiler.

use std::fmt;

use crate::config::MIN_TRANSFORM_SIZE;

/// Error returned when building or feeding a noise estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The transform size is zero, too small or odd.
    InvalidTransformSize { transform_size: usize },
    /// The bin buffer could not be allocated.
    AllocationFailed { bins: usize },
    /// A submitted spectrum does not have one value per bin.
    SpectrumLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidTransformSize { transform_size } => write!(
                f,
                "invalid transform size {transform_size}; expected an even value >= {MIN_TRANSFORM_SIZE}",
            ),
            Self::AllocationFailed { bins } => {
                write!(f, "failed to allocate a noise spectrum of {bins} bins")
            }
            Self::SpectrumLengthMismatch { expected, actual } => write!(
                f,
                "spectrum has {actual} bins but the estimator was built for {expected}",
            ),
        }
    }
}

impl std::error::Error for Error {}
