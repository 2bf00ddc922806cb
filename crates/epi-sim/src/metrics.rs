//! Per-tick records accumulated during a run.

use epi_core::{AgentId, DistrictId, HealthState, StateCounts, Tick};
use epi_spatial::DistrictMap;

/// Population counts at the start of one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TickCounts {
    pub tick:   Tick,
    pub counts: StateCounts,
}

/// One agent's district and health state at the start of one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AgentStateRow {
    pub tick:     Tick,
    pub agent:    AgentId,
    pub district: DistrictId,
    pub state:    HealthState,
}

/// Enforcement flags of one district.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DistrictPolicyState {
    pub district: DistrictId,
    pub lockdown: bool,
    pub mask:     bool,
}

/// Enforcement flags of every district at the end of one tick.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PolicySnapshot {
    pub tick:      Tick,
    pub districts: Vec<DistrictPolicyState>,
}

impl PolicySnapshot {
    pub fn capture(tick: Tick, districts: &DistrictMap) -> Self {
        Self {
            tick,
            districts: districts
                .iter()
                .map(|d| DistrictPolicyState {
                    district: d.id,
                    lockdown: d.lockdown_active,
                    mask:     d.mask_mandate_active,
                })
                .collect(),
        }
    }

    /// Number of districts under lockdown.
    pub fn lockdowns(&self) -> usize {
        self.districts.iter().filter(|d| d.lockdown).count()
    }

    /// Number of districts with a mask mandate.
    pub fn mandates(&self) -> usize {
        self.districts.iter().filter(|d| d.mask).count()
    }
}

/// Everything the scheduler records, exposed through `Sim`'s accessors.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub time_series:    Vec<TickCounts>,
    pub agent_rows:     Vec<AgentStateRow>,
    pub policy_history: Vec<PolicySnapshot>,
}

impl Metrics {
    /// Highest Infected count seen so far and the tick it occurred.
    pub fn peak_infected(&self) -> Option<TickCounts> {
        self.time_series.iter().copied().max_by_key(|t| (t.counts.infected, std::cmp::Reverse(t.tick)))
    }
}
