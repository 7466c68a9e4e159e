use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::FleetError,
    fleet::{dollars::Dollars, kilometers::Kilometers},
};

pub const DEFAULT_HOP_LENGTH: Kilometers = Kilometers::new(5);
pub const DEFAULT_MAINTENANCE_INTERVAL: Kilometers = Kilometers::new(1500);
pub const DEFAULT_MAINTENANCE_COST: Dollars = Dollars::new(300);

/// Upper bound for configured distances: hop length, maintenance interval and starting
/// odometers.
pub const MAX_DISTANCE: Kilometers = Kilometers::new(1_000_000_000);

pub(crate) fn check_distance(
    field: &'static str,
    value: Kilometers,
) -> Result<Kilometers, FleetError> {
    if value > MAX_DISTANCE {
        return Err(FleetError::DistanceOutOfRange {
            field,
            value,
            max: MAX_DISTANCE,
        });
    }

    Ok(value)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleetParams {
    /// Length of one zone hop.
    pub hop_length: Kilometers,
    /// Vehicles are serviced each time their odometer lands on a multiple of this.
    pub maintenance_interval: Kilometers,
    /// Debited from the operator account per service.
    pub maintenance_cost: Dollars,
    pub capacity_policy: CapacityPolicy,
}

/// Whether the passenger count of a request is checked against the class seat limit.
///
/// `Ignore` assumes any vehicle of the requested class seats the party.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    #[default]
    Ignore,
    Enforce,
}

impl Default for FleetParams {
    fn default() -> Self {
        Self {
            hop_length: DEFAULT_HOP_LENGTH,
            maintenance_interval: DEFAULT_MAINTENANCE_INTERVAL,
            maintenance_cost: DEFAULT_MAINTENANCE_COST,
            capacity_policy: CapacityPolicy::Ignore,
        }
    }
}

impl FleetParams {
    pub fn validate(&self) -> Result<(), FleetError> {
        check_distance("hop_length", self.hop_length)?;
        check_distance("maintenance_interval", self.maintenance_interval)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(FleetParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_oversized_distances() {
        let params = FleetParams {
            hop_length: Kilometers::new(100_000_000_000_000_000),
            ..FleetParams::default()
        };

        assert_eq!(
            params.validate(),
            Err(FleetError::DistanceOutOfRange {
                field: "hop_length",
                value: Kilometers::new(100_000_000_000_000_000),
                max: MAX_DISTANCE,
            })
        );

        let params = FleetParams {
            maintenance_interval: MAX_DISTANCE + Kilometers::new(1),
            ..FleetParams::default()
        };
        assert!(params.validate().is_err());
    }
}
