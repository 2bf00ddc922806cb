//! Integration tests for epi-sim.

use epi_behavior::StaticBehavior;
use epi_core::{EpiConfig, HealthState, InterventionPolicy, StateCounts, Tick};
use epi_policy::PolicyEvent;
use epi_spatial::DistrictMap;

use crate::{AgentStateRow, NoopObserver, Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 10×10 grid, 80 agents, 1 district, 5 initially infected, 20 ticks.
fn scenario_config() -> EpiConfig {
    EpiConfig::from_json_str(
        r#"{
            "width": 10, "height": 10, "density": 0.8,
            "transmission_rate": 0.4, "latency_period": 3,
            "infection_duration": 5, "recovery_rate": 0.5,
            "num_districts": 1, "initial_infected": 5,
            "policy": "no-intervention", "total_ticks": 20, "seed": 42
        }"#,
    )
    .unwrap()
}

fn build(config: EpiConfig) -> Sim {
    SimBuilder::new(config).build().unwrap()
}

/// Records every hook call.
#[derive(Default)]
struct Recorder {
    starts:     Vec<(Tick, StateCounts)>,
    row_ticks:  Vec<(Tick, usize)>,
    events:     Vec<PolicyEvent>,
    ends:       Vec<Tick>,
    sim_end:    Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick, counts: &StateCounts) {
        self.starts.push((tick, *counts));
    }
    fn on_agent_rows(&mut self, tick: Tick, rows: &[AgentStateRow]) {
        self.row_ticks.push((tick, rows.len()));
    }
    fn on_policy_event(&mut self, event: &PolicyEvent) {
        self.events.push(*event);
    }
    fn on_tick_end(&mut self, tick: Tick, _districts: &DistrictMap) {
        self.ends.push(tick);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.sim_end = Some(final_tick);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use crate::SimError;

    use super::*;

    #[test]
    fn builds_scenario_population() {
        let sim = build(scenario_config());
        assert_eq!(sim.agents.len(), 80);
        assert_eq!(sim.districts.len(), 1);
        assert_eq!(sim.final_counts().infected, 5);
        assert_eq!(sim.occupancy.len(), 80);
        assert!(sim.time_series().is_empty());
    }

    #[test]
    fn invalid_config_fails_fast() {
        let mut cfg = scenario_config();
        cfg.initial_infected = 81;
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Config(_))));

        let mut cfg = scenario_config();
        cfg.num_districts = 11;
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_behavior_distribution_fails_fast() {
        let mut cfg = scenario_config();
        cfg.behavior.noise_scale = -2.0;
        assert!(SimBuilder::new(cfg).build().is_err());
    }

    #[test]
    fn fixed_policies_set_district_and_agent_flags() {
        for policy in InterventionPolicy::ALL {
            let mut cfg = scenario_config();
            cfg.policy = policy;
            cfg.num_districts = 3;
            let sim = build(cfg);
            for d in sim.districts.iter() {
                assert_eq!(d.lockdown_active, policy.forces_isolation(), "{policy}");
                assert_eq!(d.mask_mandate_active, policy.forces_mask(), "{policy}");
            }
            assert!(sim.agents.isolated.iter().all(|&i| i == policy.forces_isolation()));
            assert!(sim.agents.wearing_mask.iter().all(|&m| m == policy.forces_mask()));
        }
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn counts_collected_before_agents_act() {
        let mut sim = build(scenario_config());
        sim.run(&mut NoopObserver);
        let series = sim.time_series();
        assert_eq!(series.len(), 20);
        assert_eq!(series[0].tick, Tick(0));
        assert_eq!(series[0].counts.infected, 5);
        assert_eq!(series[0].counts.susceptible, 75);
        assert!(sim.is_finished());
    }

    #[test]
    fn population_is_conserved() {
        let mut cfg = scenario_config();
        cfg.total_ticks = 120;
        cfg.transmission_rate = 0.9;
        let mut sim = build(cfg);
        sim.run(&mut NoopObserver);
        for row in sim.time_series() {
            assert_eq!(row.counts.total(), 80, "{}", row.tick);
        }
        assert_eq!(sim.final_counts().total(), 80);
    }

    #[test]
    fn same_seed_replays_identically() {
        let mut cfg = scenario_config();
        cfg.policy = InterventionPolicy::Adaptive;
        cfg.num_districts = 2;
        cfg.total_ticks = 200;
        cfg.controller.enforcement_duration = 8;

        let mut a = build(cfg.clone());
        let mut b = build(cfg);
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);
        assert_eq!(a.time_series(), b.time_series());
        assert_eq!(a.policy_log().events(), b.policy_log().events());
        assert_eq!(a.policy_history(), b.policy_history());
        assert_eq!(a.agents.position, b.agents.position);
    }

    #[test]
    fn scenario_trends() {
        let mut sim = build(scenario_config());
        let mut ever_removed = vec![sim.agents.ever_removed()];
        while !sim.is_finished() {
            sim.run_ticks(1, &mut NoopObserver);
            ever_removed.push(sim.agents.ever_removed());
        }
        let series = sim.time_series();
        for w in series.windows(2) {
            assert!(w[1].counts.susceptible <= w[0].counts.susceptible, "S rose at {}", w[1].tick);
            assert!(w[1].counts.dead >= w[0].counts.dead, "D fell at {}", w[1].tick);
        }
        assert!(ever_removed.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn run_ticks_steps_incrementally() {
        let mut sim = build(scenario_config());
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(3));
        assert_eq!(sim.time_series().len(), 3);
        sim.run(&mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(20));
    }
}

// ── Invariants over a run ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use epi_core::Cell;

    use super::*;

    /// High transmission, certain death, fast controller: plenty of deaths
    /// and enforcement flips to check against.
    fn harsh_config() -> EpiConfig {
        let mut cfg = scenario_config();
        cfg.transmission_rate = 0.9;
        cfg.latency_period = 1;
        cfg.infection_duration = 3;
        cfg.recovery_rate = 0.3;
        cfg.num_districts = 5;
        cfg.total_ticks = 80;
        cfg.policy = InterventionPolicy::Adaptive;
        cfg.controller.enforcement_duration = 2;
        cfg
    }

    #[test]
    fn dead_agents_are_frozen() {
        let mut sim = build(harsh_config());
        let mut frozen: Vec<Option<(Cell, bool, bool)>> = vec![None; sim.agents.len()];
        while !sim.is_finished() {
            sim.run_ticks(1, &mut NoopObserver);
            for a in sim.agents.agent_ids() {
                let i = a.index();
                if sim.agents.health[i] != HealthState::Dead {
                    assert!(frozen[i].is_none(), "{a} left the Dead state");
                    continue;
                }
                let now = (sim.agents.position[i], sim.agents.wearing_mask[i], sim.agents.isolated[i]);
                match frozen[i] {
                    None => frozen[i] = Some(now),
                    Some(then) => assert_eq!(then, now, "{a} changed after death"),
                }
            }
        }
        assert!(frozen.iter().any(Option::is_some), "no deaths to check");
    }

    #[test]
    fn exposed_respect_latency() {
        let mut sim = build(harsh_config());
        let latency = sim.config.latency_period;
        while !sim.is_finished() {
            let before = sim.agents.health.clone();
            let tick = sim.clock.current_tick;
            sim.run_ticks(1, &mut NoopObserver);
            for (i, (&was, &is)) in before.iter().zip(&sim.agents.health).enumerate() {
                if was == HealthState::Exposed && is == HealthState::Infected {
                    assert!(tick.since(sim.agents.infection_time[i]) >= latency);
                }
            }
        }
    }

    #[test]
    fn positions_stay_on_grid_and_in_occupancy() {
        let mut sim = build(harsh_config());
        sim.run(&mut NoopObserver);
        for a in sim.agents.agent_ids() {
            let here = sim.agents.position[a.index()];
            assert!(sim.grid.contains(here));
            assert!(sim.occupancy.agents_at(here).contains(&a));
        }
        assert_eq!(sim.occupancy.len(), sim.agents.len());
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use epi_core::{DistrictId, PolicyAction, PolicyKind};

    use super::*;

    /// Half the population infected for the whole run, nobody moves, no new
    /// infections.
    fn stalled_outbreak() -> EpiConfig {
        let mut cfg = scenario_config();
        cfg.transmission_rate = 0.0;
        cfg.infection_duration = 1_000;
        cfg.initial_infected = 40;
        cfg.policy = InterventionPolicy::Adaptive;
        cfg.controller.enforcement_duration = 4;
        cfg.total_ticks = 12;
        cfg
    }

    #[test]
    fn adaptive_locks_down_after_one_window() {
        let mut sim = SimBuilder::new(stalled_outbreak())
            .behavior(StaticBehavior::default())
            .build()
            .unwrap();
        sim.run_ticks(3, &mut NoopObserver);
        assert!(sim.policy_log().is_empty());
        assert!(!sim.districts.get(DistrictId(0)).lockdown_active);

        sim.run_ticks(1, &mut NoopObserver);
        let events = sim.policy_log().events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.tick == Tick(3) && e.action == PolicyAction::Initiated));
        assert!(sim.districts.get(DistrictId(0)).lockdown_active);
        assert!(sim.agents.isolated.iter().all(|&i| i));
        assert!(sim.agents.wearing_mask.iter().all(|&m| m));
    }

    #[test]
    fn adaptive_maintains_while_above_threshold() {
        let mut sim = SimBuilder::new(stalled_outbreak())
            .behavior(StaticBehavior::default())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        let log = sim.policy_log();
        assert_eq!(log.count(PolicyAction::Initiated, PolicyKind::Lockdown), 1);
        assert_eq!(log.count(PolicyAction::Maintained, PolicyKind::Lockdown), 2);
        assert_eq!(log.count(PolicyAction::Lifted, PolicyKind::Lockdown), 0);

        let history = sim.policy_history();
        assert_eq!(history.len(), 12);
        assert_eq!(history[2].lockdowns(), 0);
        assert_eq!(history[3].lockdowns(), 1);
        assert_eq!(history[11].mandates(), 1);
    }

    #[test]
    fn fixed_policy_never_logs() {
        let mut cfg = scenario_config();
        cfg.policy = InterventionPolicy::Combined;
        cfg.total_ticks = 60;
        let mut sim = build(cfg);
        sim.run(&mut NoopObserver);
        assert!(sim.policy_log().is_empty());
        assert!(sim.policy_history().iter().all(|s| s.lockdowns() == 1 && s.mandates() == 1));
        let alive = sim.agents.living().count();
        assert_eq!(sim.agents.living().filter(|a| sim.agents.isolated[a.index()]).count(), alive);
    }

    #[test]
    fn mandate_keeps_recovered_agents_masked() {
        let mut cfg = scenario_config();
        cfg.policy = InterventionPolicy::MaskOnly;
        cfg.recovery_rate = 1.0;
        cfg.total_ticks = 40;
        let mut sim = SimBuilder::new(cfg)
            .behavior(StaticBehavior::default())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        assert!(sim.agents.recovered.iter().any(|&r| r));
        assert!(sim.agents.wearing_mask.iter().all(|&m| m));
    }

    #[test]
    fn recovered_agents_follow_their_own_choice_without_mandate() {
        let mut cfg = scenario_config();
        cfg.recovery_rate = 1.0;
        cfg.total_ticks = 40;
        let behavior = StaticBehavior { moves: false, masks: true, breaks_lockdown: false };
        let mut sim = SimBuilder::new(cfg).behavior(behavior).build().unwrap();
        sim.run(&mut NoopObserver);
        for a in sim.agents.agent_ids() {
            let i = a.index();
            assert_eq!(sim.agents.wearing_mask[i], sim.agents.recovered[i], "{a}");
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn hooks_fire_once_per_tick() {
        let mut cfg = scenario_config();
        cfg.policy = InterventionPolicy::Adaptive;
        cfg.controller.enforcement_duration = 5;
        cfg.record_agent_rows = true;
        let mut sim = build(cfg);
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.starts.len(), 20);
        assert_eq!(rec.ends.len(), 20);
        assert_eq!(rec.row_ticks.len(), 20);
        assert!(rec.row_ticks.iter().all(|&(_, n)| n == 80));
        assert_eq!(rec.sim_end, Some(Tick(20)));
        assert_eq!(rec.events.as_slice(), sim.policy_log().events());
        for ((tick, counts), row) in rec.starts.iter().zip(sim.time_series()) {
            assert_eq!(*tick, row.tick);
            assert_eq!(*counts, row.counts);
        }
        assert_eq!(sim.agent_rows().len(), 20 * 80);
    }

    #[test]
    fn agent_rows_off_by_default() {
        let mut sim = build(scenario_config());
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.row_ticks.is_empty());
        assert!(sim.agent_rows().is_empty());
    }
}
