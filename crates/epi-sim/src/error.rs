use epi_behavior::BehaviorError;
use epi_core::EpiError;
use epi_spatial::SpatialError;
use thiserror::Error;

/// Construction-time failures.  A built `Sim` never fails mid-run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] EpiError),

    #[error("spatial setup error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("behavior model error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
