//! Policy log records.

use std::fmt;

use epi_core::{DistrictId, PolicyAction, PolicyKind, Tick};

/// One controller decision about one policy in one district.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolicyEvent {
    pub tick:     Tick,
    pub action:   PolicyAction,
    pub district: DistrictId,
    pub policy:   PolicyKind,
}

impl fmt::Display for PolicyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} in district {}", self.tick, self.policy, self.action, self.district.0)
    }
}

/// Append-only sequence of [`PolicyEvent`]s in emission order.
#[derive(Clone, Debug, Default)]
pub struct PolicyLog {
    events: Vec<PolicyEvent>,
}

impl PolicyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PolicyEvent) {
        self.events.push(event);
    }

    pub fn extend<I: IntoIterator<Item = PolicyEvent>>(&mut self, events: I) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[PolicyEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events concerning `district`, in order.
    pub fn for_district(&self, district: DistrictId) -> impl Iterator<Item = &PolicyEvent> {
        self.events.iter().filter(move |e| e.district == district)
    }

    /// Number of events with the given action and policy.
    pub fn count(&self, action: PolicyAction, policy: PolicyKind) -> usize {
        self.events.iter().filter(|e| e.action == action && e.policy == policy).count()
    }
}
