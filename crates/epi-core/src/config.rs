//! Run configuration.
//!
//! `EpiConfig` carries every parameter of one run.  It is plain data: build
//! it in code or load it from JSON, then hand it to `epi_sim::SimBuilder`,
//! which calls [`EpiConfig::validate`] before anything is allocated.
//!
//! ```rust
//! use epi_core::{EpiConfig, InterventionPolicy};
//!
//! let cfg = EpiConfig::from_json_str(r#"{
//!     "width": 10, "height": 10, "density": 0.8,
//!     "transmission_rate": 0.4, "latency_period": 3,
//!     "infection_duration": 5, "recovery_rate": 0.5,
//!     "num_districts": 1, "initial_infected": 5,
//!     "policy": "no-intervention", "total_ticks": 20
//! }"#).unwrap();
//!
//! assert_eq!(cfg.agent_count(), 80);
//! assert_eq!(cfg.policy, InterventionPolicy::NoIntervention);
//! ```

use std::path::Path;

use crate::{EpiError, EpiResult, InterventionPolicy};

/// Largest population a run supports.  Agent ids are `u32` with `u32::MAX`
/// reserved as the invalid sentinel.
pub const MAX_POPULATION: usize = u32::MAX as usize;

// ── EpiConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EpiConfig {
    /// Grid width in cells.  Districts are strips of whole columns.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Wrap movement and neighborhoods around the grid edges.
    #[serde(default = "default_toroidal")]
    pub toroidal: bool,

    /// Agents per cell.  Population = ⌊width · height · density⌋.
    pub density: f64,

    /// Per-contact transmission probability, in [0, 1].
    pub transmission_rate: f64,

    /// Ticks an agent stays Exposed before becoming Infected.  ≥ 1.
    pub latency_period: u64,

    /// Ticks from exposure until recovery or death is decided.  ≥ 1.
    pub infection_duration: u64,

    /// Probability that an agent whose infection has run its course
    /// recovers rather than dies, in [0, 1].
    pub recovery_rate: f64,

    /// Number of districts the grid is partitioned into.
    pub num_districts: u32,

    /// Agents that start the run Infected.
    pub initial_infected: usize,

    /// Intervention policy for the run.
    #[serde(default)]
    pub policy: InterventionPolicy,

    /// Number of ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    #[serde(default)]
    pub seed: u64,

    /// District controller parameters (used by the adaptive policy only).
    #[serde(default)]
    pub controller: ControllerConfig,

    /// Coefficients of the mobility and compliance decision models.
    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// When `true`, isolated agents neither get exposed nor infect others.
    #[serde(default)]
    pub isolation_shields_contacts: bool,

    /// Record one (tick, agent, district, state) row per agent per tick.
    #[serde(default)]
    pub record_agent_rows: bool,
}

fn default_toroidal() -> bool {
    true
}

impl EpiConfig {
    /// Parse a configuration from a JSON string.  Does not validate.
    pub fn from_json_str(json: &str) -> EpiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.  Does not validate.
    pub fn from_json_file(path: &Path) -> EpiResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of agents created for this configuration.
    #[inline]
    pub fn agent_count(&self) -> usize {
        (self.width as f64 * self.height as f64 * self.density).floor() as usize
    }

    /// Number of grid cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reject any configuration that could not produce a well-formed world.
    pub fn validate(&self) -> EpiResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(config_err(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.density.is_finite() || self.density < 0.0 {
            return Err(config_err(format!("density must be a non-negative number, got {}", self.density)));
        }
        check_probability("transmission_rate", self.transmission_rate)?;
        check_probability("recovery_rate", self.recovery_rate)?;
        if self.latency_period == 0 {
            return Err(config_err("latency_period must be at least 1 tick".into()));
        }
        if self.infection_duration == 0 {
            return Err(config_err("infection_duration must be at least 1 tick".into()));
        }
        if self.num_districts == 0 {
            return Err(config_err("num_districts must be at least 1".into()));
        }
        if self.num_districts > self.width {
            return Err(config_err(format!(
                "{} districts cannot partition a grid {} columns wide",
                self.num_districts, self.width
            )));
        }
        let agents = self.agent_count();
        if agents > MAX_POPULATION {
            return Err(config_err(format!(
                "{agents} agents exceed the supported maximum of {MAX_POPULATION}"
            )));
        }
        if self.initial_infected > agents {
            return Err(config_err(format!(
                "initial_infected ({}) exceeds agent count ({agents})",
                self.initial_infected
            )));
        }
        self.controller.validate()?;
        self.behavior.validate()
    }
}

// ── ControllerConfig ──────────────────────────────────────────────────────────

/// Parameters of the district policy controller.
///
/// Each policy uses a single threshold for enabling and lifting unless a
/// separate lift threshold is configured.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Ticks between re-evaluations of a district.  Default: 28 (one week
    /// at four ticks per day).
    pub enforcement_duration: u64,

    /// Infection ratio above which a lockdown is enforced.
    pub lockdown_threshold: f64,

    /// Infection ratio above which a mask mandate is enforced.
    pub mask_threshold: f64,

    /// Lift a lockdown only at or below this ratio.  `None` reuses
    /// `lockdown_threshold`.
    pub lockdown_lift_threshold: Option<f64>,

    /// Lift a mask mandate only at or below this ratio.  `None` reuses
    /// `mask_threshold`.
    pub mask_lift_threshold: Option<f64>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            enforcement_duration:    28,
            lockdown_threshold:      0.1,
            mask_threshold:          0.05,
            lockdown_lift_threshold: None,
            mask_lift_threshold:     None,
        }
    }
}

impl ControllerConfig {
    /// Effective lift threshold for lockdowns.
    #[inline]
    pub fn lockdown_lift(&self) -> f64 {
        self.lockdown_lift_threshold.unwrap_or(self.lockdown_threshold)
    }

    /// Effective lift threshold for mask mandates.
    #[inline]
    pub fn mask_lift(&self) -> f64 {
        self.mask_lift_threshold.unwrap_or(self.mask_threshold)
    }

    pub fn validate(&self) -> EpiResult<()> {
        if self.enforcement_duration == 0 {
            return Err(config_err("enforcement_duration must be at least 1 tick".into()));
        }
        check_probability("lockdown_threshold", self.lockdown_threshold)?;
        check_probability("mask_threshold", self.mask_threshold)?;
        if let Some(lift) = self.lockdown_lift_threshold {
            check_probability("lockdown_lift_threshold", lift)?;
            if lift > self.lockdown_threshold {
                return Err(config_err(format!(
                    "lockdown_lift_threshold ({lift}) is above lockdown_threshold ({})",
                    self.lockdown_threshold
                )));
            }
        }
        if let Some(lift) = self.mask_lift_threshold {
            check_probability("mask_lift_threshold", lift)?;
            if lift > self.mask_threshold {
                return Err(config_err(format!(
                    "mask_lift_threshold ({lift}) is above mask_threshold ({})",
                    self.mask_threshold
                )));
            }
        }
        Ok(())
    }
}

// ── BehaviorConfig ────────────────────────────────────────────────────────────

/// Coefficients of the logit decision models.
///
/// Movement features, in order: bias, own district under lockdown, agent
/// Infected or Exposed.
///
/// Mask features, in order: bias, agent Infected or Exposed, transmission
/// rate, has recovered before, district mask mandate active, more than half
/// of the cellmates Infected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub move_coefficients: [f64; 3],
    pub mask_coefficients: [f64; 6],

    /// Location of the Gumbel noise added to every logit score.
    pub noise_location: f64,
    /// Scale of the Gumbel noise.  Must be positive.
    pub noise_scale: f64,

    /// Mean of the normal propensity an isolated agent draws each tick.
    pub lockdown_propensity_mean: f64,
    /// Standard deviation of that propensity.
    pub lockdown_propensity_std_dev: f64,
    /// An isolated agent takes one random step when its propensity exceeds
    /// this value.
    pub lockdown_break_threshold: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            move_coefficients:           [1.0, -3.0, -1.0],
            mask_coefficients:           [-1.0, 1.0, 2.0, 1.5, 3.0, 1.0],
            noise_location:              0.0,
            noise_scale:                 1.0,
            lockdown_propensity_mean:    0.2,
            lockdown_propensity_std_dev: 0.05,
            lockdown_break_threshold:    0.15,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> EpiResult<()> {
        let all_finite = self
            .move_coefficients
            .iter()
            .chain(self.mask_coefficients.iter())
            .chain([
                &self.noise_location,
                &self.lockdown_propensity_mean,
                &self.lockdown_break_threshold,
            ])
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(config_err("behavior coefficients must be finite".into()));
        }
        if !(self.noise_scale.is_finite() && self.noise_scale > 0.0) {
            return Err(config_err(format!("noise_scale must be positive, got {}", self.noise_scale)));
        }
        if !(self.lockdown_propensity_std_dev.is_finite() && self.lockdown_propensity_std_dev >= 0.0) {
            return Err(config_err(format!(
                "lockdown_propensity_std_dev must be non-negative, got {}",
                self.lockdown_propensity_std_dev
            )));
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config_err(msg: String) -> EpiError {
    EpiError::Config(msg)
}

fn check_probability(name: &str, value: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(config_err(format!("{name} must be in [0, 1], got {value}")))
    }
}
