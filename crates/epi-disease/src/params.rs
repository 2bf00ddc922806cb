use epi_core::EpiConfig;

/// Multiplier applied when the exposed party wears a mask.
pub const MASK_FACTOR: f64 = 0.2;

/// Extra multiplier applied when an Infected agent targets someone who has
/// recovered before.
pub const RECOVERED_FACTOR: f64 = 0.5;

/// Transmission probability for one contact after discounts.
///
/// Always within `[0, base]` for `base` in `[0, 1]`.
#[inline]
pub fn effective_transmission(base: f64, target_masked: bool, target_recovered: bool) -> f64 {
    let mut p = base;
    if target_masked {
        p *= MASK_FACTOR;
    }
    if target_recovered {
        p *= RECOVERED_FACTOR;
    }
    p
}

/// Epidemiological constants of one run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiseaseParams {
    pub transmission_rate:  f64,
    pub latency_period:     u64,
    pub infection_duration: u64,
    pub recovery_rate:      f64,

    /// Isolated agents neither get exposed nor infect others.
    pub isolation_shields_contacts: bool,
}

impl DiseaseParams {
    pub fn from_config(cfg: &EpiConfig) -> Self {
        Self {
            transmission_rate:          cfg.transmission_rate,
            latency_period:             cfg.latency_period,
            infection_duration:         cfg.infection_duration,
            recovery_rate:              cfg.recovery_rate,
            isolation_shields_contacts: cfg.isolation_shields_contacts,
        }
    }
}
