//! Threshold controller with a fixed re-evaluation period.
//!
//! # Timing
//!
//! Every district carries an `enforcement_step_counter`.  Each call to
//! [`PolicyController::step`] increments it; when it reaches
//! `enforcement_duration` the district is evaluated and the counter returns
//! to zero.  With the default duration of 28 a district is evaluated at the
//! end of ticks 27, 55, 83, … and its policies hold unchanged in between.
//!
//! # Thresholds
//!
//! At an evaluation point each policy is considered independently:
//!
//! | Currently | Ratio                      | Result                      |
//! |-----------|----------------------------|-----------------------------|
//! | off       | `> threshold`              | enable, `initiated`         |
//! | off       | `<= threshold`             | nothing                     |
//! | on        | `<= lift_threshold`        | disable, `lifted`           |
//! | on        | `> lift_threshold`         | keep, `maintained`          |
//!
//! Without a configured lift threshold both directions share one value, so
//! a ratio hovering at the threshold can toggle a policy at every
//! evaluation.

use epi_core::{ControllerConfig, DistrictId, PolicyAction, PolicyKind, Tick};
use epi_spatial::DistrictMap;

use crate::{DistrictCensus, EnforcementCommand, PolicyEvent};

/// Output of one controller step: what to change and what to record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControllerStep {
    pub commands: Vec<EnforcementCommand>,
    pub events:   Vec<PolicyEvent>,
}

impl ControllerStep {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }
}

/// The adaptive district controller.
#[derive(Clone, Debug)]
pub struct PolicyController {
    config: ControllerConfig,
}

impl PolicyController {
    pub fn new(config: ControllerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Decide what happens to one policy given its state and the ratio.
    ///
    /// Returns `None` when the policy is off and stays off.
    pub fn decide(&self, policy: PolicyKind, active: bool, ratio: f64) -> Option<PolicyAction> {
        let (enable, lift) = match policy {
            PolicyKind::Lockdown => (self.config.lockdown_threshold, self.config.lockdown_lift()),
            PolicyKind::Mask     => (self.config.mask_threshold, self.config.mask_lift()),
        };
        match (active, ratio) {
            (false, r) if r > enable => Some(PolicyAction::Initiated),
            (false, _) => None,
            (true, r) if r <= lift => Some(PolicyAction::Lifted),
            (true, _) => Some(PolicyAction::Maintained),
        }
    }

    /// Advance every district's counter by one tick and evaluate those whose
    /// counter reaches the enforcement duration.
    ///
    /// `census` is indexed by `DistrictId`.  Districts without residents are
    /// never changed.  The district flags are left untouched; apply the
    /// returned commands with [`apply_commands`](crate::apply_commands).
    pub fn step(
        &self,
        tick:      Tick,
        districts: &mut DistrictMap,
        census:    &[DistrictCensus],
    ) -> ControllerStep {
        let mut out = ControllerStep::default();
        for district in districts.iter_mut() {
            district.enforcement_step_counter += 1;
            if district.enforcement_step_counter < self.config.enforcement_duration {
                continue;
            }
            district.enforcement_step_counter = 0;

            let c = census[district.id.index()];
            if c.residents == 0 {
                continue;
            }
            let ratio = c.ratio();
            for (policy, active) in [
                (PolicyKind::Lockdown, district.lockdown_active),
                (PolicyKind::Mask, district.mask_mandate_active),
            ] {
                if let Some(action) = self.decide(policy, active, ratio) {
                    self.record(&mut out, tick, district.id, policy, action, ratio);
                }
            }
        }
        out
    }

    fn record(
        &self,
        out:      &mut ControllerStep,
        tick:     Tick,
        district: DistrictId,
        policy:   PolicyKind,
        action:   PolicyAction,
        ratio:    f64,
    ) {
        match action {
            PolicyAction::Initiated => {
                out.commands.push(EnforcementCommand::new(district, policy, true));
                log::info!("{tick}: {policy} initiated in district {} (ratio {ratio:.3})", district.0);
            }
            PolicyAction::Lifted => {
                out.commands.push(EnforcementCommand::new(district, policy, false));
                log::info!("{tick}: {policy} lifted in district {} (ratio {ratio:.3})", district.0);
            }
            PolicyAction::Maintained => {
                log::debug!("{tick}: {policy} maintained in district {} (ratio {ratio:.3})", district.0);
            }
        }
        out.events.push(PolicyEvent { tick, action, district, policy });
    }
}
