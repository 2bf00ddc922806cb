//! Flat row types, one per output file.

use epi_core::{StateCounts, Tick};
use epi_policy::PolicyEvent;
use epi_sim::AgentStateRow;

/// One line of `state_counts.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCountsRow {
    pub tick:        u64,
    pub susceptible: usize,
    pub exposed:     usize,
    pub infected:    usize,
    pub recovered:   usize,
    pub dead:        usize,
}

impl StateCountsRow {
    pub fn new(tick: Tick, counts: &StateCounts) -> Self {
        Self {
            tick:        tick.0,
            susceptible: counts.susceptible,
            exposed:     counts.exposed,
            infected:    counts.infected,
            recovered:   counts.recovered,
            dead:        counts.dead,
        }
    }
}

/// One line of `policy_log.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyLogRow {
    pub tick:        u64,
    pub action:      &'static str,
    pub district_id: u32,
    pub policy_type: &'static str,
}

impl From<&PolicyEvent> for PolicyLogRow {
    fn from(event: &PolicyEvent) -> Self {
        Self {
            tick:        event.tick.0,
            action:      event.action.as_str(),
            district_id: event.district.0,
            policy_type: event.policy.as_str(),
        }
    }
}

/// One line of `agent_states.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStateCsvRow {
    pub tick:        u64,
    pub agent_id:    u32,
    pub district_id: u32,
    pub state:       &'static str,
}

impl From<&AgentStateRow> for AgentStateCsvRow {
    fn from(row: &AgentStateRow) -> Self {
        Self {
            tick:        row.tick.0,
            agent_id:    row.agent.0,
            district_id: row.district.0,
            state:       row.state.as_str(),
        }
    }
}
