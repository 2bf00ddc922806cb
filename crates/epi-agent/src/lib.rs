//! `epi-agent` — Structure-of-Arrays storage for the simulated population.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`store`]     | `AgentStore` (SoA arrays, per-agent queries)              |
//! | [`builder`]   | `AgentStoreBuilder` (random population from a config)     |
//!
//! Agents are never removed.  A dead agent keeps its slot and every field
//! frozen at the value it had when it died.

pub mod builder;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use store::{AgentStore, MAX_AGENTS};
