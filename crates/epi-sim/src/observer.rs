//! Simulation observer trait for progress reporting and data collection.

use epi_core::{StateCounts, Tick};
use epi_policy::PolicyEvent;
use epi_spatial::DistrictMap;

use crate::AgentStateRow;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Everything passed to an observer is also
/// kept by the `Sim` and can be pulled after the run instead.
///
/// # Example — daily progress printer
///
/// ```rust
/// use epi_core::{StateCounts, Tick};
/// use epi_sim::SimObserver;
///
/// struct Daily;
///
/// impl SimObserver for Daily {
///     fn on_tick_start(&mut self, tick: Tick, counts: &StateCounts) {
///         if tick.0 % 4 == 0 {
///             println!("day {}: {} infected", tick.0 / 4, counts.infected);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick with the counts collected before any
    /// agent acts.
    fn on_tick_start(&mut self, _tick: Tick, _counts: &StateCounts) {}

    /// Called right after `on_tick_start` when per-agent rows are enabled.
    fn on_agent_rows(&mut self, _tick: Tick, _rows: &[AgentStateRow]) {}

    /// Called once for every event the policy controller emits.
    fn on_policy_event(&mut self, _event: &PolicyEvent) {}

    /// Called at the end of each tick, after enforcement has been applied.
    fn on_tick_end(&mut self, _tick: Tick, _districts: &DistrictMap) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
