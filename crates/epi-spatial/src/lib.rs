//! `epi-spatial` — the 2-D world agents live in.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`grid`]      | `Grid` — dimensions, wrapping, Moore neighborhoods        |
//! | [`district`]  | `District`, `DistrictMap` — total column-strip partition  |
//! | [`occupancy`] | `Occupancy` — which agents stand in which cell            |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                        |
//!
//! Cells are addressed by [`epi_core::Cell`] and flattened row-major
//! (`y * width + x`) wherever a dense per-cell array is needed.

pub mod district;
pub mod error;
pub mod grid;
pub mod occupancy;

#[cfg(test)]
mod tests;

pub use district::{District, DistrictMap};
pub use error::{SpatialError, SpatialResult};
pub use grid::Grid;
pub use occupancy::Occupancy;
