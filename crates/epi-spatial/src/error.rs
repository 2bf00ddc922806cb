//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `epi-spatial`.  All of them are construction-time
/// configuration errors; nothing in this crate fails during a tick.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("{districts} districts cannot partition a grid {width} columns wide")]
    DistrictCount { districts: u32, width: u32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
