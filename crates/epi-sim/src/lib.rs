//! `epi-sim` — the scheduler that drives an epidemic run.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Collect   — state counts (and per-agent rows) before anyone acts.
//!   ② Activate  — shuffle the living agents; for each in turn:
//!                   plan + apply movement  (epi-mobility)
//!                   disease step           (epi-disease)
//!                   mask re-decision after recovery
//!   ③ Control   — adaptive policy only: census → PolicyController::step
//!                 → apply_commands → policy log.
//!   ④ Snapshot  — district enforcement flags; advance the clock.
//! ```
//!
//! Everything runs on one thread with one RNG seeded once from
//! `config.seed`, so a configuration and seed fully determine the run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let config = EpiConfig::from_json_file(path)?;
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut NoopObserver);
//! for row in sim.time_series() {
//!     println!("{} {:?}", row.tick, row.counts);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{AgentStateRow, DistrictPolicyState, Metrics, PolicySnapshot, TickCounts};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
