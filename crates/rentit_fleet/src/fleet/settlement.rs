use jiff::SignedDuration;
use serde::Serialize;

use crate::fleet::{dollars::Dollars, kilometers::Kilometers, vehicle::Plate};

/// What one settled trip did to the fleet: the vehicle it reserved, the trip figures, and
/// whether the odometer hit a service point on the way.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub plate: Plate,
    pub distance: Kilometers,
    pub travel_time: SignedDuration,
    pub cost: Dollars,
    pub serviced: bool,
}
