//! `epi-policy` — the district policy controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`census`]     | `DistrictCensus` — residents and Infected per district       |
//! | [`controller`] | `PolicyController` — threshold evaluation every D ticks      |
//! | [`command`]    | `EnforcementCommand`, `apply_commands`, fixed-policy setup   |
//! | [`event`]      | `PolicyEvent`, `PolicyLog` — the append-only policy record   |
//!
//! # Control loop
//!
//! Once per tick, after every agent has acted:
//!
//! 1. The scheduler takes a [`census`](census::take_census) of every district.
//! 2. [`PolicyController::step`] advances each district's counter and, at an
//!    evaluation point, compares the infection ratio with the thresholds.
//!    It returns decisions as data: enforcement commands plus log events.
//! 3. [`apply_commands`] is the only writer of the district flags and of the
//!    agents' `isolated` / `wearing_mask` columns during a run.

pub mod census;
pub mod command;
pub mod controller;
pub mod event;


pub use census::{DistrictCensus, take_census};
pub use command::{EnforcementCommand, apply_commands, fixed_policy_commands};
pub use controller::{ControllerStep, PolicyController};
pub use event::{PolicyEvent, PolicyLog};
