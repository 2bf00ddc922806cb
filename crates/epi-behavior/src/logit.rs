//! Binary logit decisions.
//!
//! A decision is `logistic(β·x + ε) > 0.5` where `x` is a fixed-length
//! feature vector, `β` its coefficients and `ε` one Gumbel draw.  Since the
//! logistic function crosses 0.5 at zero, this is equivalent to
//! `β·x + ε > 0`; the probability form is kept so callers can log it.

use rand_distr::Gumbel;

use epi_core::SimRng;

use crate::{BehaviorError, BehaviorResult};

/// The standard logistic function.
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Linear score over `N` features with additive Gumbel noise.
#[derive(Clone, Debug)]
pub struct LogitModel<const N: usize> {
    coefficients: [f64; N],
    noise:        Gumbel<f64>,
}

impl<const N: usize> LogitModel<N> {
    /// Build a model with Gumbel(`location`, `scale`) noise.
    pub fn new(coefficients: [f64; N], location: f64, scale: f64) -> BehaviorResult<Self> {
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(BehaviorError::Config("logit coefficients must be finite".into()));
        }
        let noise = Gumbel::new(location, scale).map_err(|e| BehaviorError::Distribution {
            name:   "gumbel",
            reason: e.to_string(),
        })?;
        Ok(Self { coefficients, noise })
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64; N] {
        &self.coefficients
    }

    /// Deterministic part of the score, `β·x`.
    #[inline]
    pub fn score(&self, features: &[f64; N]) -> f64 {
        self.coefficients.iter().zip(features).map(|(b, x)| b * x).sum()
    }

    /// Logistic of the score plus one noise draw.
    pub fn probability(&self, features: &[f64; N], rng: &mut SimRng) -> f64 {
        let noise: f64 = rng.sample(&self.noise);
        logistic(self.score(features) + noise)
    }

    /// `true` when the noisy probability exceeds one half.
    #[inline]
    pub fn decide(&self, features: &[f64; N], rng: &mut SimRng) -> bool {
        self.probability(features, rng) > 0.5
    }
}
