//! `epi-mobility` — where an activated agent goes this tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`movement`] | `Movement` — the resolved outcome of one activation           |
//! | [`engine`]   | `plan_movement` (decide) and `apply_movement` (write back)    |
//!
//! # Movement model
//!
//! The behavior model decides *whether* an agent moves; the time of day
//! decides *where*:
//!
//! | Phase              | Moving                                     | Not moving |
//! |--------------------|--------------------------------------------|------------|
//! | morning            | workplace, unless its district is locked   | residence  |
//! | afternoon, evening | random Moore neighbor                      | residence  |
//! | night              | residence                                  | residence  |
//!
//! Isolated agents skip this table entirely.  They stay put unless they
//! break the lockdown, in which case they take one random neighbor step.
//! Dead agents never move.

pub mod engine;
pub mod movement;


pub use engine::{apply_movement, plan_movement};
pub use movement::Movement;
