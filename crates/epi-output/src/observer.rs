//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_core::{StateCounts, Tick};
use epi_policy::PolicyEvent;
use epi_sim::{AgentStateRow, SimObserver};

use crate::row::{AgentStateCsvRow, PolicyLogRow, StateCountsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams state counts, policy events and (when
/// enabled on the run) agent rows to any [`OutputWriter`].
///
/// `SimObserver` methods have no return value, so the first write error is
/// stored and later writes are skipped.  Check it with
/// [`take_error`][Self::take_error] after `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::warn!("output write failed: {e}");
            self.last_error = Some(e);
        }
    }

    fn failed(&self) -> bool {
        self.last_error.is_some()
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, tick: Tick, counts: &StateCounts) {
        if self.failed() {
            return;
        }
        let result = self.writer.write_state_counts(&StateCountsRow::new(tick, counts));
        self.store_err(result);
    }

    fn on_agent_rows(&mut self, _tick: Tick, rows: &[AgentStateRow]) {
        if self.failed() || rows.is_empty() {
            return;
        }
        let rows: Vec<AgentStateCsvRow> = rows.iter().map(AgentStateCsvRow::from).collect();
        let result = self.writer.write_agent_states(&rows);
        self.store_err(result);
    }

    fn on_policy_event(&mut self, event: &PolicyEvent) {
        if self.failed() {
            return;
        }
        let result = self.writer.write_policy_event(&PolicyLogRow::from(event));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        if self.failed() {
            return;
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
