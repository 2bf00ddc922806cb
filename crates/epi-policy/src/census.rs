use epi_agent::AgentStore;
use epi_core::HealthState;

/// Head count of one district at the moment of evaluation.
///
/// `residents` counts every agent whose home is in the district, the dead
/// included, since dead agents are never removed from the population.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DistrictCensus {
    pub residents: usize,
    pub infected:  usize,
}

impl DistrictCensus {
    /// Infected share of the residents; 0 for an empty district.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.residents == 0 {
            0.0
        } else {
            self.infected as f64 / self.residents as f64
        }
    }
}

/// Census of every district, indexed by `DistrictId`, in one pass over the
/// population.
pub fn take_census(agents: &AgentStore, district_count: usize) -> Vec<DistrictCensus> {
    let mut census = vec![DistrictCensus::default(); district_count];
    for (district, health) in agents.district.iter().zip(&agents.health) {
        let entry = &mut census[district.index()];
        entry.residents += 1;
        if *health == HealthState::Infected {
            entry.infected += 1;
        }
    }
    census
}
