//! Health states and per-state population counts.

use std::fmt;

/// Where an agent is in the course of the disease.
///
/// Transitions: Susceptible → Exposed → Infected → {Recovered, Dead}, with
/// Recovered → Exposed as the reinfection back-edge.  `Dead` is absorbing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    #[default]
    Susceptible,
    Exposed,
    Infected,
    Recovered,
    Dead,
}

impl HealthState {
    /// All states in reporting order.
    pub const ALL: [HealthState; 5] = [
        HealthState::Susceptible,
        HealthState::Exposed,
        HealthState::Infected,
        HealthState::Recovered,
        HealthState::Dead,
    ];

    /// `false` only for `Dead`.
    #[inline]
    pub fn is_alive(self) -> bool {
        !matches!(self, HealthState::Dead)
    }

    /// `true` while the agent carries the pathogen (Exposed or Infected).
    #[inline]
    pub fn is_carrier(self) -> bool {
        matches!(self, HealthState::Exposed | HealthState::Infected)
    }

    /// Human-readable label, used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Exposed     => "exposed",
            HealthState::Infected    => "infected",
            HealthState::Recovered   => "recovered",
            HealthState::Dead        => "dead",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Number of agents in each health state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct StateCounts {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infected:    usize,
    pub recovered:   usize,
    pub dead:        usize,
}

impl StateCounts {
    /// Tally an iterator of states.
    pub fn tally<I: IntoIterator<Item = HealthState>>(states: I) -> Self {
        let mut counts = Self::default();
        for state in states {
            counts.record(state);
        }
        counts
    }

    #[inline]
    pub fn record(&mut self, state: HealthState) {
        *self.slot_mut(state) += 1;
    }

    #[inline]
    pub fn get(&self, state: HealthState) -> usize {
        match state {
            HealthState::Susceptible => self.susceptible,
            HealthState::Exposed     => self.exposed,
            HealthState::Infected    => self.infected,
            HealthState::Recovered   => self.recovered,
            HealthState::Dead        => self.dead,
        }
    }

    /// Sum over all five states; equals the population size.
    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.infected + self.recovered + self.dead
    }

    fn slot_mut(&mut self, state: HealthState) -> &mut usize {
        match state {
            HealthState::Susceptible => &mut self.susceptible,
            HealthState::Exposed     => &mut self.exposed,
            HealthState::Infected    => &mut self.infected,
            HealthState::Recovered   => &mut self.recovered,
            HealthState::Dead        => &mut self.dead,
        }
    }
}
