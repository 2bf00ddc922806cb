//! Enforcement as data.
//!
//! The controller never writes agent flags itself.  It emits
//! `EnforcementCommand`s and [`apply_commands`] carries them out, so every
//! change of an `isolated` or `wearing_mask` flag made by policy goes
//! through one function and can be inspected before it is applied.

use epi_agent::AgentStore;
use epi_core::{DistrictId, InterventionPolicy, PolicyKind};
use epi_spatial::DistrictMap;

/// Turn one policy on or off in one district.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EnforcementCommand {
    pub district: DistrictId,
    pub policy:   PolicyKind,
    pub enabled:  bool,
}

impl EnforcementCommand {
    #[inline]
    pub fn new(district: DistrictId, policy: PolicyKind, enabled: bool) -> Self {
        Self { district, policy, enabled }
    }
}

/// Apply `commands` in order.
///
/// Sets the district flag and overwrites the matching flag of every living
/// resident, superseding the agents' own choices.  Dead residents keep the
/// flags they died with.  Returns the number of agent flags written.
pub fn apply_commands(
    commands:  &[EnforcementCommand],
    districts: &mut DistrictMap,
    agents:    &mut AgentStore,
) -> usize {
    let mut written = 0;
    for cmd in commands {
        let district = districts.get_mut(cmd.district);
        match cmd.policy {
            PolicyKind::Lockdown => district.lockdown_active = cmd.enabled,
            PolicyKind::Mask     => district.mask_mandate_active = cmd.enabled,
        }

        let column = match cmd.policy {
            PolicyKind::Lockdown => &mut agents.isolated,
            PolicyKind::Mask     => &mut agents.wearing_mask,
        };
        for (i, home) in agents.district.iter().enumerate() {
            if *home == cmd.district && agents.health[i].is_alive() {
                column[i] = cmd.enabled;
                written += 1;
            }
        }
    }
    written
}

/// Commands that put every district under the creation-time regime of a
/// fixed policy.  Empty for `NoIntervention` and `Adaptive`.
pub fn fixed_policy_commands(
    policy:    InterventionPolicy,
    districts: &DistrictMap,
) -> Vec<EnforcementCommand> {
    let mut commands = Vec::new();
    for d in districts.iter() {
        if policy.forces_isolation() {
            commands.push(EnforcementCommand::new(d.id, PolicyKind::Lockdown, true));
        }
        if policy.forces_mask() {
            commands.push(EnforcementCommand::new(d.id, PolicyKind::Mask, true));
        }
    }
    commands
}
