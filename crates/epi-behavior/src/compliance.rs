//! The default behavior model.

use rand_distr::Normal;

use epi_core::{AgentId, BehaviorConfig, SimRng};

use crate::{BehaviorError, BehaviorModel, BehaviorResult, LogitModel, SimContext};

/// Logit movement and mask choice plus a normally distributed lockdown
/// propensity.
///
/// An isolated agent draws a fresh propensity every tick and breaks the
/// lockdown when the draw exceeds `lockdown_break_threshold`.  With the
/// default Normal(0.2, 0.05) and threshold 0.15 that happens about 84% of
/// the time.
#[derive(Clone, Debug)]
pub struct LogitBehavior {
    movement:                 LogitModel<3>,
    mask:                     LogitModel<6>,
    lockdown_propensity:      Normal<f64>,
    lockdown_break_threshold: f64,
}

impl LogitBehavior {
    pub fn from_config(cfg: &BehaviorConfig) -> BehaviorResult<Self> {
        let movement =
            LogitModel::new(cfg.move_coefficients, cfg.noise_location, cfg.noise_scale)?;
        let mask = LogitModel::new(cfg.mask_coefficients, cfg.noise_location, cfg.noise_scale)?;
        let std_dev = cfg.lockdown_propensity_std_dev;
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(BehaviorError::Distribution {
                name:   "normal",
                reason: format!("standard deviation must be non-negative, got {std_dev}"),
            });
        }
        let lockdown_propensity =
            Normal::new(cfg.lockdown_propensity_mean, cfg.lockdown_propensity_std_dev).map_err(
                |e| BehaviorError::Distribution { name: "normal", reason: e.to_string() },
            )?;
        Ok(Self {
            movement,
            mask,
            lockdown_propensity,
            lockdown_break_threshold: cfg.lockdown_break_threshold,
        })
    }
}

impl BehaviorModel for LogitBehavior {
    fn wants_to_move(&self, agent: AgentId, ctx: &SimContext<'_>, rng: &mut SimRng) -> bool {
        self.movement.decide(&ctx.move_features(agent), rng)
    }

    fn wants_mask(&self, agent: AgentId, ctx: &SimContext<'_>, rng: &mut SimRng) -> bool {
        self.mask.decide(&ctx.mask_features(agent), rng)
    }

    fn breaks_lockdown(&self, _agent: AgentId, _ctx: &SimContext<'_>, rng: &mut SimRng) -> bool {
        let propensity: f64 = rng.sample(&self.lockdown_propensity);
        propensity > self.lockdown_break_threshold
    }
}
