//! Fluent builder that generates a random population.
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::AgentStoreBuilder;
//! use epi_core::{InterventionPolicy, SimRng};
//! use epi_spatial::{DistrictMap, Grid};
//!
//! let grid = Grid::new(10, 10, true).unwrap();
//! let districts = DistrictMap::new(&grid, 2).unwrap();
//! let mut rng = SimRng::new(42);
//!
//! let store = AgentStoreBuilder::new(80)
//!     .initial_infected(5)
//!     .policy(InterventionPolicy::MaskOnly)
//!     .build(&grid, &districts, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.count, 80);
//! assert_eq!(store.state_counts().infected, 5);
//! assert!(store.wearing_mask.iter().all(|&m| m));
//! ```

use epi_core::{EpiError, EpiResult, HealthState, InterventionPolicy, SimRng, Tick};
use epi_spatial::{DistrictMap, Grid};

use crate::{AgentStore, MAX_AGENTS};

/// Fluent builder for [`AgentStore`].
pub struct AgentStoreBuilder {
    count:            usize,
    initial_infected: usize,
    policy:           InterventionPolicy,
}

impl AgentStoreBuilder {
    /// A builder for `count` agents, none infected, no intervention.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            initial_infected: 0,
            policy:           InterventionPolicy::NoIntervention,
        }
    }

    /// Number of agents that start Infected.
    pub fn initial_infected(mut self, n: usize) -> Self {
        self.initial_infected = n;
        self
    }

    /// Policy whose creation-time flags every agent receives.
    pub fn policy(mut self, policy: InterventionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generate the population.
    ///
    /// For each agent in id order the residence cell and then the workplace
    /// cell are drawn uniformly over `grid`.  The initially infected agents
    /// are then sampled without replacement.  All draws come from `rng`, so
    /// the population is a pure function of the seed.
    pub fn build(
        self,
        grid:      &Grid,
        districts: &DistrictMap,
        rng:       &mut SimRng,
    ) -> EpiResult<AgentStore> {
        if self.count > MAX_AGENTS {
            return Err(EpiError::Config(format!(
                "{} agents exceed the supported maximum of {MAX_AGENTS}",
                self.count
            )));
        }
        if self.initial_infected > self.count {
            return Err(EpiError::Config(format!(
                "initial_infected ({}) exceeds agent count ({})",
                self.initial_infected, self.count
            )));
        }

        let mut store = AgentStore::new();
        for _ in 0..self.count {
            let residence = grid.random_cell(rng);
            let workplace = grid.random_cell(rng);
            store.push(residence, workplace, districts.district_of(residence));
        }

        for i in rng.sample_indices(self.count, self.initial_infected) {
            store.health[i] = HealthState::Infected;
            store.infection_time[i] = Tick::ZERO;
        }

        let (mask, isolate) = (self.policy.forces_mask(), self.policy.forces_isolation());
        store.wearing_mask.fill(mask);
        store.isolated.fill(isolate);

        log::debug!(
            "generated {} agents ({} infected) under {}",
            self.count, self.initial_infected, self.policy
        );
        Ok(store)
    }
}
