//! The `Sim` struct and its tick loop.

use epi_agent::AgentStore;
use epi_behavior::{BehaviorModel, SimContext};
use epi_core::{AgentId, EpiConfig, SimClock, SimRng, StateCounts, Tick, TimeOfDay};
use epi_disease::DiseaseEngine;
use epi_mobility::{apply_movement, plan_movement};
use epi_policy::{PolicyController, PolicyLog, apply_commands, take_census};
use epi_spatial::{DistrictMap, Grid, Occupancy};

use crate::{AgentStateRow, Metrics, PolicySnapshot, SimObserver, TickCounts};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick runs these phases in order:
///
/// 1. **Collect**: record state counts (and agent rows if enabled) before
///    anyone acts.
/// 2. **Activate**: shuffle the living agents and, one at a time, move each
///    one and then run its disease step.  An agent that recovers re-decides
///    its mask.
/// 3. **Control** (adaptive policy only): census, controller step, and
///    enforcement of the resulting commands.
/// 4. **Snapshot**: record every district's enforcement flags.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration, validated at build time.
    pub config: EpiConfig,

    /// Current tick and phase of day.
    pub clock: SimClock,

    pub grid:      Grid,
    pub districts: DistrictMap,
    pub agents:    AgentStore,
    pub occupancy: Occupancy,

    /// The run's only random source.
    pub rng: SimRng,

    pub(crate) behavior:   Box<dyn BehaviorModel>,
    pub(crate) disease:    DiseaseEngine,
    pub(crate) controller: Option<PolicyController>,
    pub(crate) metrics:    Metrics,
    pub(crate) policy_log: PolicyLog,

    /// Activation order buffer, reshuffled every tick.
    pub(crate) activation: Vec<AgentId>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until `config.total_ticks` ticks have been
    /// simulated.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick.0 < self.config.total_ticks {
            self.process_tick(observer);
        }
        self.finish(observer);
    }

    /// Run exactly `n` ticks from the current position, ignoring
    /// `total_ticks`.  Does not call `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    /// `true` once `total_ticks` ticks have been simulated.
    pub fn is_finished(&self) -> bool {
        self.clock.current_tick.0 >= self.config.total_ticks
    }

    // ── Pull accessors ────────────────────────────────────────────────────

    /// State counts taken at the start of every simulated tick.
    pub fn time_series(&self) -> &[TickCounts] {
        &self.metrics.time_series
    }

    /// Every controller event so far, in emission order.
    pub fn policy_log(&self) -> &PolicyLog {
        &self.policy_log
    }

    /// Per-agent rows; empty unless `config.record_agent_rows` is set.
    pub fn agent_rows(&self) -> &[AgentStateRow] {
        &self.metrics.agent_rows
    }

    /// District enforcement flags at the end of every simulated tick.
    pub fn policy_history(&self) -> &[PolicySnapshot] {
        &self.metrics.policy_history
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// State counts right now, after the last completed tick.
    pub fn final_counts(&self) -> StateCounts {
        self.agents.state_counts()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;

        // ── Phase 1: collect ──────────────────────────────────────────────
        let counts = self.agents.state_counts();
        self.metrics.time_series.push(TickCounts { tick: now, counts });
        observer.on_tick_start(now, &counts);
        if self.config.record_agent_rows {
            let rows = self.agent_rows_at(now);
            observer.on_agent_rows(now, &rows);
            self.metrics.agent_rows.extend(rows);
        }
        if self.clock.time_of_day == TimeOfDay::Morning {
            log::debug!(
                "day {}: S={} E={} I={} R={} D={}",
                self.clock.day(),
                counts.susceptible,
                counts.exposed,
                counts.infected,
                counts.recovered,
                counts.dead
            );
        }

        // ── Phase 2: activate ─────────────────────────────────────────────
        //
        // The buffer is taken out of `self` so activation can borrow the rest
        // of the world mutably.
        let mut order = std::mem::take(&mut self.activation);
        order.clear();
        order.extend(self.agents.living());
        self.rng.shuffle(&mut order);
        for &agent in &order {
            self.activate(agent, now);
        }
        self.activation = order;

        // ── Phase 3: control ──────────────────────────────────────────────
        if let Some(controller) = &self.controller {
            let census = take_census(&self.agents, self.districts.len());
            let step = controller.step(now, &mut self.districts, &census);
            apply_commands(&step.commands, &mut self.districts, &mut self.agents);
            for event in step.events {
                observer.on_policy_event(&event);
                self.policy_log.push(event);
            }
        }

        // ── Phase 4: snapshot ─────────────────────────────────────────────
        self.metrics.policy_history.push(PolicySnapshot::capture(now, &self.districts));
        observer.on_tick_end(now, &self.districts);

        self.clock.advance();
    }

    /// Move `agent`, then run its disease step.
    fn activate(&mut self, agent: AgentId, now: Tick) {
        if !self.agents.is_alive(agent) {
            return;
        }

        let movement = {
            let ctx = SimContext::new(
                now,
                self.clock.time_of_day,
                &self.agents,
                &self.grid,
                &self.districts,
                &self.occupancy,
                self.config.transmission_rate,
            );
            plan_movement(agent, &ctx, self.behavior.as_ref(), &mut self.rng)
        };
        apply_movement(agent, movement, &mut self.agents, &mut self.occupancy);

        let outcome = self.disease.step(agent, now, &mut self.agents, &self.occupancy, &mut self.rng);
        if outcome.recovered() {
            self.reconsider_mask(agent, now);
        }
    }

    /// After recovery the agent re-decides its mask; an active mandate in its
    /// district keeps it masked regardless.
    fn reconsider_mask(&mut self, agent: AgentId, now: Tick) {
        let i = agent.index();
        let (chooses, mandated) = {
            let ctx = SimContext::new(
                now,
                self.clock.time_of_day,
                &self.agents,
                &self.grid,
                &self.districts,
                &self.occupancy,
                self.config.transmission_rate,
            );
            (self.behavior.wants_mask(agent, &ctx, &mut self.rng), ctx.mask_mandate_active(agent))
        };
        self.agents.wearing_mask[i] = chooses || mandated;
    }

    fn agent_rows_at(&self, tick: Tick) -> Vec<AgentStateRow> {
        self.agents
            .agent_ids()
            .map(|agent| AgentStateRow {
                tick,
                agent,
                district: self.agents.district[agent.index()],
                state:    self.agents.health[agent.index()],
            })
            .collect()
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        let final_tick = self.clock.current_tick;
        let counts = self.final_counts();
        log::info!(
            "run finished at {final_tick}: S={} E={} I={} R={} D={}, {} policy events",
            counts.susceptible,
            counts.exposed,
            counts.infected,
            counts.recovered,
            counts.dead,
            self.policy_log.len()
        );
        observer.on_sim_end(final_tick);
    }
}
