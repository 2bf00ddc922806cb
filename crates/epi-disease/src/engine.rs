//! The transmission and progression step.

use epi_agent::AgentStore;
use epi_core::{AgentId, HealthState, SimRng, Tick};
use epi_spatial::Occupancy;

use crate::{DiseaseParams, effective_transmission};

/// What one call to [`DiseaseEngine::step`] changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// New state of the activated agent, if it changed.
    pub became: Option<HealthState>,

    /// Cellmates the activated agent exposed (Infected branch only).
    pub exposed_others: Vec<AgentId>,
}

impl StepOutcome {
    fn became(state: HealthState) -> Self {
        Self { became: Some(state), exposed_others: Vec::new() }
    }

    /// `true` if the activated agent recovered during this step.
    #[inline]
    pub fn recovered(&self) -> bool {
        self.became == Some(HealthState::Recovered)
    }
}

/// Applies the SEIRD rules to one agent at a time.
#[derive(Clone, Debug)]
pub struct DiseaseEngine {
    params: DiseaseParams,
}

impl DiseaseEngine {
    pub fn new(params: DiseaseParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &DiseaseParams {
        &self.params
    }

    /// Run the branch matching `agent`'s current state.
    ///
    /// Only `agent` and, in the Infected branch, its Susceptible cellmates
    /// are written.  Mask re-evaluation after recovery is left to the caller,
    /// which owns the behavior model; see [`StepOutcome::recovered`].
    pub fn step(
        &self,
        agent:     AgentId,
        now:       Tick,
        agents:    &mut AgentStore,
        occupancy: &Occupancy,
        rng:       &mut SimRng,
    ) -> StepOutcome {
        match agents.health[agent.index()] {
            HealthState::Susceptible | HealthState::Recovered => {
                self.check_exposure(agent, now, agents, occupancy, rng)
            }
            HealthState::Exposed => self.progress_exposed(agent, now, agents),
            HealthState::Infected => {
                let exposed_others = self.infect_cellmates(agent, now, agents, occupancy, rng);
                let mut outcome = self.resolve_infection(agent, now, agents, rng);
                outcome.exposed_others = exposed_others;
                outcome
            }
            HealthState::Dead => StepOutcome::default(),
        }
    }

    fn shielded(&self, agents: &AgentStore, agent: AgentId) -> bool {
        self.params.isolation_shields_contacts && agents.isolated[agent.index()]
    }

    /// Susceptible and Recovered agents: one draw per Infected cellmate,
    /// stopping at the first success.
    fn check_exposure(
        &self,
        agent:     AgentId,
        now:       Tick,
        agents:    &mut AgentStore,
        occupancy: &Occupancy,
        rng:       &mut SimRng,
    ) -> StepOutcome {
        let i = agent.index();
        if self.shielded(agents, agent) {
            return StepOutcome::default();
        }
        let p = effective_transmission(self.params.transmission_rate, agents.wearing_mask[i], false);
        let here = agents.position[i];
        for other in occupancy.cellmates(agent, here) {
            if agents.health[other.index()] != HealthState::Infected || self.shielded(agents, other) {
                continue;
            }
            if rng.gen_bool(p) {
                let from = agents.health[i];
                agents.health[i] = HealthState::Exposed;
                agents.infection_time[i] = now;
                log::trace!("{agent} {from} -> exposed by {other} at {now}");
                return StepOutcome::became(HealthState::Exposed);
            }
        }
        StepOutcome::default()
    }

    fn progress_exposed(&self, agent: AgentId, now: Tick, agents: &mut AgentStore) -> StepOutcome {
        let i = agent.index();
        if now.since(agents.infection_time[i]) >= self.params.latency_period {
            agents.health[i] = HealthState::Infected;
            log::trace!("{agent} exposed -> infected at {now}");
            StepOutcome::became(HealthState::Infected)
        } else {
            StepOutcome::default()
        }
    }

    /// Infected agents: an independent draw for every Susceptible cellmate.
    fn infect_cellmates(
        &self,
        agent:     AgentId,
        now:       Tick,
        agents:    &mut AgentStore,
        occupancy: &Occupancy,
        rng:       &mut SimRng,
    ) -> Vec<AgentId> {
        let mut exposed = Vec::new();
        if self.shielded(agents, agent) {
            return exposed;
        }
        let here = agents.position[agent.index()];
        for other in occupancy.cellmates(agent, here) {
            let j = other.index();
            if agents.health[j] != HealthState::Susceptible || self.shielded(agents, other) {
                continue;
            }
            let p = effective_transmission(
                self.params.transmission_rate,
                agents.wearing_mask[j],
                agents.recovered[j],
            );
            if rng.gen_bool(p) {
                agents.health[j] = HealthState::Exposed;
                agents.infection_time[j] = now;
                log::trace!("{other} susceptible -> exposed by {agent} at {now}");
                exposed.push(other);
            }
        }
        exposed
    }

    /// Once the infection has run its course: recover with `recovery_rate`,
    /// otherwise die.
    fn resolve_infection(
        &self,
        agent:  AgentId,
        now:    Tick,
        agents: &mut AgentStore,
        rng:    &mut SimRng,
    ) -> StepOutcome {
        let i = agent.index();
        if now.since(agents.infection_time[i]) < self.params.infection_duration {
            return StepOutcome::default();
        }
        if rng.gen_bool(self.params.recovery_rate) {
            agents.health[i] = HealthState::Recovered;
            agents.recovered[i] = true;
            agents.infection_history[i].push(now);
            log::trace!("{agent} infected -> recovered at {now}");
            StepOutcome::became(HealthState::Recovered)
        } else {
            agents.health[i] = HealthState::Dead;
            log::trace!("{agent} infected -> dead at {now}");
            StepOutcome::became(HealthState::Dead)
        }
    }
}
