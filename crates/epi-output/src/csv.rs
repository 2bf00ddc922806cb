//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentStateCsvRow, OutputResult, PolicyLogRow, StateCountsRow};

pub const STATE_COUNTS_FILE: &str = "state_counts.csv";
pub const POLICY_LOG_FILE: &str = "policy_log.csv";
pub const AGENT_STATES_FILE: &str = "agent_states.csv";

/// Writes run output to three CSV files in one directory.
pub struct CsvWriter {
    counts:   Writer<File>,
    policy:   Writer<File>,
    agents:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three files and write their headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut counts = Writer::from_path(dir.join(STATE_COUNTS_FILE))?;
        counts.write_record(["tick", "susceptible", "exposed", "infected", "recovered", "dead"])?;

        let mut policy = Writer::from_path(dir.join(POLICY_LOG_FILE))?;
        policy.write_record(["tick", "action", "district_id", "policy_type"])?;

        let mut agents = Writer::from_path(dir.join(AGENT_STATES_FILE))?;
        agents.write_record(["tick", "agent_id", "district_id", "state"])?;

        log::debug!("writing CSV output to {}", dir.display());
        Ok(Self { counts, policy, agents, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_state_counts(&mut self, row: &StateCountsRow) -> OutputResult<()> {
        self.counts.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.exposed.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
            row.dead.to_string(),
        ])?;
        Ok(())
    }

    fn write_policy_event(&mut self, row: &PolicyLogRow) -> OutputResult<()> {
        self.policy.write_record(&[
            row.tick.to_string(),
            row.action.to_owned(),
            row.district_id.to_string(),
            row.policy_type.to_owned(),
        ])?;
        Ok(())
    }

    fn write_agent_states(&mut self, rows: &[AgentStateCsvRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.district_id.to_string(),
                row.state.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.counts.flush()?;
        self.policy.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}
