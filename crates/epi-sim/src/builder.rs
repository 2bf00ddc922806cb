//! Fluent builder for constructing a [`Sim`].

use epi_agent::AgentStoreBuilder;
use epi_behavior::{BehaviorModel, LogitBehavior};
use epi_core::{EpiConfig, SimClock, SimRng};
use epi_disease::{DiseaseEngine, DiseaseParams};
use epi_policy::{PolicyController, PolicyLog, apply_commands, fixed_policy_commands};
use epi_spatial::{DistrictMap, Grid, Occupancy};

use crate::{Metrics, Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                          |
/// |------------------|--------------------------------------------------|
/// | `.behavior(b)`   | `LogitBehavior` built from `config.behavior`     |
///
/// # Example
///
/// ```rust
/// use epi_behavior::StaticBehavior;
/// use epi_core::EpiConfig;
/// use epi_sim::{NoopObserver, SimBuilder};
///
/// let config = EpiConfig::from_json_str(r#"{
///     "width": 10, "height": 10, "density": 0.8,
///     "transmission_rate": 0.4, "latency_period": 3,
///     "infection_duration": 5, "recovery_rate": 0.5,
///     "num_districts": 1, "initial_infected": 5, "total_ticks": 20
/// }"#).unwrap();
///
/// let mut sim = SimBuilder::new(config)
///     .behavior(StaticBehavior::default())
///     .build()
///     .unwrap();
/// sim.run(&mut NoopObserver);
/// assert_eq!(sim.time_series().len(), 20);
/// ```
pub struct SimBuilder {
    config:   EpiConfig,
    behavior: Option<Box<dyn BehaviorModel>>,
}

impl SimBuilder {
    pub fn new(config: EpiConfig) -> Self {
        Self { config, behavior: None }
    }

    /// Replace the default logit behavior model.
    pub fn behavior<B: BehaviorModel>(mut self, behavior: B) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Validate the configuration, generate the world and population, and
    /// return a `Sim` positioned at tick 0.
    ///
    /// All construction randomness (placement, initial infections) is drawn
    /// from the run's single RNG before the first tick.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let grid = Grid::new(config.width, config.height, config.toroidal)?;
        let mut districts = DistrictMap::new(&grid, config.num_districts)?;
        let mut rng = SimRng::new(config.seed);

        let mut agents = AgentStoreBuilder::new(config.agent_count())
            .initial_infected(config.initial_infected)
            .policy(config.policy)
            .build(&grid, &districts, &mut rng)?;

        let mut occupancy = Occupancy::new(&grid);
        agents.populate(&mut occupancy);

        let fixed = fixed_policy_commands(config.policy, &districts);
        apply_commands(&fixed, &mut districts, &mut agents);

        let behavior = match self.behavior {
            Some(b) => b,
            None => Box::new(LogitBehavior::from_config(&config.behavior)?),
        };
        let controller = config
            .policy
            .is_adaptive()
            .then(|| PolicyController::new(config.controller.clone()));

        log::info!(
            "built {}x{} world: {} agents, {} districts, policy {}, seed {}",
            config.width,
            config.height,
            agents.len(),
            districts.len(),
            config.policy,
            config.seed
        );

        Ok(Sim {
            disease: DiseaseEngine::new(DiseaseParams::from_config(&config)),
            clock: SimClock::new(),
            config,
            grid,
            districts,
            agents,
            occupancy,
            rng,
            behavior,
            controller,
            metrics: Metrics::default(),
            policy_log: PolicyLog::new(),
            activation: Vec::new(),
        })
    }
}
