//! The `OutputWriter` trait implemented by output backends.

use crate::{AgentStateCsvRow, OutputResult, PolicyLogRow, StateCountsRow};

/// Sink for the three record streams of a run.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved after the run.
pub trait OutputWriter {
    fn write_state_counts(&mut self, row: &StateCountsRow) -> OutputResult<()>;

    fn write_policy_event(&mut self, row: &PolicyLogRow) -> OutputResult<()>;

    /// Write a batch of per-agent rows for one tick.
    fn write_agent_states(&mut self, rows: &[AgentStateCsvRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
