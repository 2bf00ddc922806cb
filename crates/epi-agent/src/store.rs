//! Core agent storage.
//!
//! Every `Vec` field has exactly `count` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let state = store.health[agent.index()];
//! ```
//!
//! Fields are `pub` so the disease engine, the mobility engine and the
//! enforcement step can write the columns they own without accessor
//! boilerplate.  Only those three writers mutate the store during a tick.

use epi_core::{AgentId, Cell, DistrictId, HealthState, StateCounts, Tick};
use epi_spatial::Occupancy;

/// Largest population an `AgentStore` can hold.  `AgentId(u32::MAX)` is the
/// invalid sentinel, so the last usable id is one below it.
pub const MAX_AGENTS: usize = u32::MAX as usize;

/// Structure-of-Arrays storage for all agent state.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Location ──────────────────────────────────────────────────────────
    /// Current cell.
    pub position: Vec<Cell>,

    /// Home cell.  Fixed at creation.
    pub residence: Vec<Cell>,

    /// Work cell, the morning destination.  Fixed at creation.
    pub workplace: Vec<Cell>,

    /// District owning the residence cell.  Fixed at creation.
    pub district: Vec<DistrictId>,

    // ── Disease ───────────────────────────────────────────────────────────
    pub health: Vec<HealthState>,

    /// Tick of the most recent transition into Exposed.  Initially infected
    /// agents carry tick 0.
    pub infection_time: Vec<Tick>,

    /// Has recovered at least once.  Never cleared, even on reinfection.
    pub recovered: Vec<bool>,

    /// Ticks at which the agent recovered, oldest first.
    pub infection_history: Vec<Vec<Tick>>,

    // ── Behavior ──────────────────────────────────────────────────────────
    pub wearing_mask: Vec<bool>,

    /// Under lockdown.  Written only by creation-time policy and by
    /// enforcement propagation.
    pub isolated: Vec<bool>,
}

impl AgentStore {
    /// An empty store.  Use [`push`](Self::push) or
    /// [`AgentStoreBuilder`](crate::AgentStoreBuilder) to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a Susceptible, unmasked, non-isolated agent standing at its
    /// residence.
    ///
    /// # Panics
    /// Panics if the store already holds `MAX_AGENTS` agents; callers
    /// validate the population size up front.
    pub fn push(&mut self, residence: Cell, workplace: Cell, district: DistrictId) -> AgentId {
        assert!(self.count < MAX_AGENTS, "agent store is full ({MAX_AGENTS} agents)");
        let id = AgentId(self.count as u32);
        self.position.push(residence);
        self.residence.push(residence);
        self.workplace.push(workplace);
        self.district.push(district);
        self.health.push(HealthState::Susceptible);
        self.infection_time.push(Tick::ZERO);
        self.recovered.push(false);
        self.infection_history.push(Vec::new());
        self.wearing_mask.push(false);
        self.isolated.push(false);
        self.count += 1;
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Agents that are not Dead, in ascending index order.
    pub fn living(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(|&a| self.is_alive(a))
    }

    #[inline]
    pub fn is_alive(&self, agent: AgentId) -> bool {
        self.health[agent.index()].is_alive()
    }

    #[inline]
    pub fn state_of(&self, agent: AgentId) -> HealthState {
        self.health[agent.index()]
    }

    /// Agents whose residence lies in `district`, dead ones included.
    pub fn residents_of(&self, district: DistrictId) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(move |&a| self.district[a.index()] == district)
    }

    /// Population count per health state.
    pub fn state_counts(&self) -> StateCounts {
        StateCounts::tally(self.health.iter().copied())
    }

    /// Number of agents that have died or recovered at least once.
    pub fn ever_removed(&self) -> usize {
        self.health
            .iter()
            .zip(&self.recovered)
            .filter(|&(&h, &r)| h == HealthState::Dead || r)
            .count()
    }

    /// Record every agent at its current position in `occupancy`.
    pub fn populate(&self, occupancy: &mut Occupancy) {
        for agent in self.agent_ids() {
            occupancy.place(agent, self.position[agent.index()]);
        }
    }

    /// Fraction of `agent`'s living cellmates that are Infected.  Zero when
    /// no living agent shares the cell.
    pub fn infected_cellmate_fraction(&self, agent: AgentId, occupancy: &Occupancy) -> f64 {
        let here = self.position[agent.index()];
        let (mut total, mut infected) = (0usize, 0usize);
        for other in occupancy.cellmates(agent, here) {
            let state = self.health[other.index()];
            if !state.is_alive() {
                continue;
            }
            total += 1;
            if state == HealthState::Infected {
                infected += 1;
            }
        }
        if total == 0 { 0.0 } else { infected as f64 / total as f64 }
    }
}
