//! `epi-core` — foundational types for the `epigrid` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `DistrictId`                               |
//! | [`cell`]        | `Cell` grid coordinate                                |
//! | [`time`]        | `Tick`, `TimeOfDay`, `SimClock`                       |
//! | [`rng`]         | `SimRng` (the single shared random source)            |
//! | [`health`]      | `HealthState`, `StateCounts`                          |
//! | [`policy`]      | `InterventionPolicy`, `PolicyKind`, `PolicyAction`    |
//! | [`config`]      | `EpiConfig`, `ControllerConfig`, `BehaviorConfig`     |
//! | [`error`]       | `EpiError`, `EpiResult`                               |

pub mod cell;
pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod policy;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{BehaviorConfig, ControllerConfig, EpiConfig, MAX_POPULATION};
pub use error::{EpiError, EpiResult};
pub use health::{HealthState, StateCounts};
pub use ids::{AgentId, DistrictId};
pub use policy::{InterventionPolicy, PolicyAction, PolicyKind};
pub use rng::SimRng;
pub use time::{SimClock, Tick, TimeOfDay};
