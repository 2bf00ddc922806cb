//! Movement planning and application.
//!
//! Planning only reads the world (`&SimContext`); application is the single
//! writer of `AgentStore::position` and the occupancy index.  The scheduler
//! calls the two back to back for each activated agent.

use epi_agent::AgentStore;
use epi_behavior::{BehaviorModel, SimContext};
use epi_core::{AgentId, SimRng, TimeOfDay};
use epi_spatial::Occupancy;

use crate::Movement;

/// Decide where `agent` goes this tick.
///
/// The move decision is drawn for every non-isolated living agent, at night
/// too, so the number of draws per tick does not depend on the phase.
pub fn plan_movement<B: BehaviorModel + ?Sized>(
    agent:    AgentId,
    ctx:      &SimContext<'_>,
    behavior: &B,
    rng:      &mut SimRng,
) -> Movement {
    let i = agent.index();
    let agents = ctx.agents;
    if !agents.health[i].is_alive() {
        return Movement::Stay;
    }
    let here = agents.position[i];

    if agents.isolated[i] {
        return if behavior.breaks_lockdown(agent, ctx, rng) {
            Movement::between(here, ctx.grid.random_neighbor(here, rng))
        } else {
            Movement::Stay
        };
    }

    let moving = behavior.wants_to_move(agent, ctx, rng);
    let home = agents.residence[i];
    let target = match ctx.time_of_day {
        TimeOfDay::Morning => {
            let work = agents.workplace[i];
            if moving && !ctx.districts.is_locked_down_at(work) { work } else { home }
        }
        TimeOfDay::Afternoon | TimeOfDay::Evening => {
            if moving { ctx.grid.random_neighbor(here, rng) } else { home }
        }
        TimeOfDay::Night => home,
    };
    Movement::between(here, target)
}

/// Write a planned move back into the store and the occupancy index.
pub fn apply_movement(
    agent:     AgentId,
    movement:  Movement,
    agents:    &mut AgentStore,
    occupancy: &mut Occupancy,
) {
    if let Movement::To(to) = movement {
        let from = agents.position[agent.index()];
        occupancy.move_agent(agent, from, to);
        agents.position[agent.index()] = to;
        log::trace!("{agent} moved {from} -> {to}");
    }
}
