use jiff::SignedDuration;

use crate::fleet::{dollars::Dollars, kilometers::Kilometers, vehicle::VehicleIdx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched {
        vehicle_id: VehicleIdx,
        distance: Kilometers,
        cost: Dollars,
    },
    /// Every vehicle of the class is busy. `wait` is the last trip duration of the most
    /// recently registered one.
    NoMatch { wait: SignedDuration },
}

impl MatchOutcome {
    pub fn vehicle_id(&self) -> Option<VehicleIdx> {
        match self {
            MatchOutcome::Matched { vehicle_id, .. } => Some(*vehicle_id),
            MatchOutcome::NoMatch { .. } => None,
        }
    }
}
