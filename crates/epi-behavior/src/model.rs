//! The `BehaviorModel` trait — the extension point for agent decisions.

use epi_core::{AgentId, SimRng};

use crate::SimContext;

/// Pluggable agent decisions.
///
/// Each method answers one binary question for one agent.  The scheduler
/// calls them sequentially during the agent's activation, passing the shared
/// RNG, so implementations must draw randomness only from `rng` to keep runs
/// reproducible.  Per-agent state belongs in the `AgentStore`, read through
/// `ctx.agents`, never in the model.
///
/// # Example
///
/// ```rust
/// use epi_behavior::{BehaviorModel, SimContext};
/// use epi_core::{AgentId, SimRng};
///
/// /// Sick agents stay put and always mask; healthy ones roam freely.
/// struct Cautious;
///
/// impl BehaviorModel for Cautious {
///     fn wants_to_move(&self, agent: AgentId, ctx: &SimContext<'_>, _rng: &mut SimRng) -> bool {
///         !ctx.agents.health[agent.index()].is_carrier()
///     }
///     fn wants_mask(&self, agent: AgentId, ctx: &SimContext<'_>, _rng: &mut SimRng) -> bool {
///         ctx.agents.health[agent.index()].is_carrier()
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Does a non-isolated agent leave home this tick?
    fn wants_to_move(&self, agent: AgentId, ctx: &SimContext<'_>, rng: &mut SimRng) -> bool;

    /// Does the agent choose to wear a mask?  Asked after recovery.
    fn wants_mask(&self, agent: AgentId, ctx: &SimContext<'_>, rng: &mut SimRng) -> bool;

    /// Does an isolated agent take one step despite the lockdown?
    ///
    /// Default: never.
    fn breaks_lockdown(&self, _agent: AgentId, _ctx: &SimContext<'_>, _rng: &mut SimRng) -> bool {
        false
    }
}
