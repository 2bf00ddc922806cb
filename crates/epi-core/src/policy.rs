//! Intervention policy selector and the vocabulary of the policy log.
//!
//! The selector is a closed set.  The four fixed policies force behavioral
//! flags when agents are created; `Adaptive` starts everyone unconstrained
//! and hands control to the district policy controller.

use std::fmt;
use std::str::FromStr;

use crate::EpiError;

// ── InterventionPolicy ────────────────────────────────────────────────────────

/// Which non-pharmaceutical interventions a run applies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum InterventionPolicy {
    /// Nobody is forced to mask or isolate.
    #[default]
    #[serde(rename = "no-intervention", alias = "No Interventions")]
    NoIntervention,

    /// Every agent wears a mask from creation.
    #[serde(rename = "mask-only", alias = "Mask Policy Only")]
    MaskOnly,

    /// Every agent is isolated from creation.
    #[serde(rename = "lockdown-only", alias = "Lockdown Only")]
    LockdownOnly,

    /// Every agent is masked and isolated from creation.
    #[serde(rename = "combined", alias = "Combination of Lockdown and Mask Policy")]
    Combined,

    /// Per-district lockdowns and mask mandates driven by observed infection
    /// ratios.
    #[serde(rename = "adaptive-controller", alias = "Mayor")]
    Adaptive,
}

impl InterventionPolicy {
    pub const ALL: [InterventionPolicy; 5] = [
        InterventionPolicy::NoIntervention,
        InterventionPolicy::MaskOnly,
        InterventionPolicy::LockdownOnly,
        InterventionPolicy::Combined,
        InterventionPolicy::Adaptive,
    ];

    /// `true` if agents are created wearing a mask.
    #[inline]
    pub fn forces_mask(self) -> bool {
        matches!(self, InterventionPolicy::MaskOnly | InterventionPolicy::Combined)
    }

    /// `true` if agents are created isolated.
    #[inline]
    pub fn forces_isolation(self) -> bool {
        matches!(self, InterventionPolicy::LockdownOnly | InterventionPolicy::Combined)
    }

    /// `true` if the district controller decides enforcement at run time.
    #[inline]
    pub fn is_adaptive(self) -> bool {
        matches!(self, InterventionPolicy::Adaptive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InterventionPolicy::NoIntervention => "no-intervention",
            InterventionPolicy::MaskOnly       => "mask-only",
            InterventionPolicy::LockdownOnly   => "lockdown-only",
            InterventionPolicy::Combined       => "combined",
            InterventionPolicy::Adaptive       => "adaptive-controller",
        }
    }
}

impl fmt::Display for InterventionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterventionPolicy {
    type Err = EpiError;

    /// Accepts the canonical names and the long labels used by older
    /// parameter files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "no-intervention" | "No Interventions" => Ok(InterventionPolicy::NoIntervention),
            "mask-only" | "Mask Policy Only" => Ok(InterventionPolicy::MaskOnly),
            "lockdown-only" | "Lockdown Only" => Ok(InterventionPolicy::LockdownOnly),
            "combined" | "Combination of Lockdown and Mask Policy" => {
                Ok(InterventionPolicy::Combined)
            }
            "adaptive-controller" | "Mayor" => Ok(InterventionPolicy::Adaptive),
            other => Err(EpiError::UnknownPolicy(other.to_owned())),
        }
    }
}

// ── PolicyKind / PolicyAction ─────────────────────────────────────────────────

/// The two interventions a district can enforce.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Lockdown,
    Mask,
}

impl PolicyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Lockdown => "lockdown",
            PolicyKind::Mask     => "mask",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the controller did with a policy at an evaluation point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Initiated,
    Maintained,
    Lifted,
}

impl PolicyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyAction::Initiated  => "initiated",
            PolicyAction::Maintained => "maintained",
            PolicyAction::Lifted     => "lifted",
        }
    }
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
