//! Read-only simulation state passed to every behavior callback.

use epi_agent::AgentStore;
use epi_core::{AgentId, Tick, TimeOfDay};
use epi_spatial::{DistrictMap, Grid, Occupancy};

/// A read-only view of the world for one decision.
///
/// Built by the scheduler for each agent activation.  All borrows are
/// released before the activation's writes are applied, so a model always
/// sees the state left by the previously activated agent.
pub struct SimContext<'a> {
    pub tick:        Tick,
    pub time_of_day: TimeOfDay,

    pub agents:    &'a AgentStore,
    pub grid:      &'a Grid,
    pub districts: &'a DistrictMap,
    pub occupancy: &'a Occupancy,

    /// Base per-contact transmission probability of the run.
    pub transmission_rate: f64,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(
        tick:              Tick,
        time_of_day:       TimeOfDay,
        agents:            &'a AgentStore,
        grid:              &'a Grid,
        districts:         &'a DistrictMap,
        occupancy:         &'a Occupancy,
        transmission_rate: f64,
    ) -> Self {
        Self { tick, time_of_day, agents, grid, districts, occupancy, transmission_rate }
    }

    /// `true` when the agent's home district is under lockdown.
    #[inline]
    pub fn district_locked_down(&self, agent: AgentId) -> bool {
        self.districts.get(self.agents.district[agent.index()]).lockdown_active
    }

    /// `true` when the agent's home district has an active mask mandate.
    #[inline]
    pub fn mask_mandate_active(&self, agent: AgentId) -> bool {
        self.districts.get(self.agents.district[agent.index()]).mask_mandate_active
    }

    /// Movement features: bias, district lockdown, agent Infected or Exposed.
    pub fn move_features(&self, agent: AgentId) -> [f64; 3] {
        [
            1.0,
            indicator(self.district_locked_down(agent)),
            indicator(self.agents.health[agent.index()].is_carrier()),
        ]
    }

    /// Mask features: bias, agent Infected or Exposed, transmission rate,
    /// has recovered before, mandate active, more than half of the cellmates
    /// Infected.
    pub fn mask_features(&self, agent: AgentId) -> [f64; 6] {
        let i = agent.index();
        let crowded = self.agents.infected_cellmate_fraction(agent, self.occupancy) > 0.5;
        [
            1.0,
            indicator(self.agents.health[i].is_carrier()),
            self.transmission_rate,
            indicator(!self.agents.infection_history[i].is_empty()),
            indicator(self.mask_mandate_active(agent)),
            indicator(crowded),
        ]
    }
}

#[inline]
fn indicator(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}
