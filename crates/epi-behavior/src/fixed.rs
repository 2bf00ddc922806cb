//! A behavior model with constant answers.

use epi_core::{AgentId, SimRng};

use crate::{BehaviorModel, SimContext};

/// A [`BehaviorModel`] that gives the same answer to every agent and never
/// consumes randomness.
///
/// `StaticBehavior::default()` never moves, never masks and never breaks
/// lockdown, which pins every agent to its residence.  Useful in tests and
/// as a no-mobility baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticBehavior {
    pub moves:           bool,
    pub masks:           bool,
    pub breaks_lockdown: bool,
}

impl StaticBehavior {
    /// Always moves, never masks, always breaks lockdown.
    pub fn restless() -> Self {
        Self { moves: true, masks: false, breaks_lockdown: true }
    }
}

impl BehaviorModel for StaticBehavior {
    fn wants_to_move(&self, _agent: AgentId, _ctx: &SimContext<'_>, _rng: &mut SimRng) -> bool {
        self.moves
    }

    fn wants_mask(&self, _agent: AgentId, _ctx: &SimContext<'_>, _rng: &mut SimRng) -> bool {
        self.masks
    }

    fn breaks_lockdown(&self, _agent: AgentId, _ctx: &SimContext<'_>, _rng: &mut SimRng) -> bool {
        self.breaks_lockdown
    }
}
