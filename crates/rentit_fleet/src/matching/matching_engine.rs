use tracing::{debug, warn};

use crate::{
    error::FleetError,
    fleet::{customer::TripRequest, fleet_registry::FleetRegistry},
    params::{CapacityPolicy, FleetParams},
};

use super::match_outcome::MatchOutcome;

/// Picks the vehicle for a trip request.
///
/// Candidates are the available vehicles of the requested class. The cheapest one for the
/// trip wins; since the price only depends on the class, candidates usually tie and the
/// earliest registered one is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine {
    capacity_policy: CapacityPolicy,
}

impl MatchingEngine {
    pub fn new(capacity_policy: CapacityPolicy) -> Self {
        Self { capacity_policy }
    }

    pub fn from_params(params: &FleetParams) -> Self {
        Self::new(params.capacity_policy)
    }

    pub fn find_best(
        &self,
        request: &TripRequest,
        registry: &FleetRegistry,
    ) -> Result<MatchOutcome, FleetError> {
        self.check_capacity(request)?;

        let distance = registry
            .zones()
            .distance(request.origin, request.destination);

        // min_by_key keeps the first of equal keys, so ties go to registration order.
        let best = registry
            .eligible_vehicles(request.class)
            .map(|(vehicle_id, vehicle)| (vehicle_id, vehicle.cost(distance)))
            .min_by_key(|(_, cost)| *cost);

        if let Some((vehicle_id, cost)) = best {
            debug!(
                vehicle = %registry.vehicle_at(vehicle_id).plate(),
                %distance,
                %cost,
                "Matched {} request",
                request.class
            );

            return Ok(MatchOutcome::Matched {
                vehicle_id,
                distance,
                cost,
            });
        }

        let wait = registry
            .last_registered_of_class(request.class)
            .map(|vehicle| vehicle.last_trip_duration())
            .ok_or(FleetError::NoHistory(request.class))?;

        warn!("No {} vehicle available, estimated wait {}", request.class, wait);

        Ok(MatchOutcome::NoMatch { wait })
    }

    fn check_capacity(&self, request: &TripRequest) -> Result<(), FleetError> {
        match self.capacity_policy {
            CapacityPolicy::Ignore => Ok(()),
            CapacityPolicy::Enforce if request.class.seats(request.passengers) => Ok(()),
            CapacityPolicy::Enforce => Err(FleetError::PassengerLimitExceeded {
                class: request.class,
                passengers: request.passengers,
                limit: request.class.max_passengers(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use crate::{
        fleet::{
            dollars::Dollars, kilometers::Kilometers, vehicle::VehicleIdx,
            vehicle_class::VehicleClass, zone::Zone,
        },
        test_utils::{deluxe, eco, mid_class, registry_with},
    };

    use super::*;

    fn request(class: VehicleClass, origin: Zone, destination: Zone) -> TripRequest {
        TripRequest::new(class, 1, origin, destination)
    }

    #[test]
    fn test_ties_go_to_first_registered() {
        let registry = registry_with(vec![eco("A"), eco("B")]);
        let engine = MatchingEngine::default();

        let outcome = engine
            .find_best(&request(VehicleClass::Eco, Zone::Middle, Zone::Middle), &registry)
            .unwrap();

        assert_eq!(
            outcome,
            MatchOutcome::Matched {
                vehicle_id: VehicleIdx::new(0),
                distance: Kilometers::new(5),
                cost: Dollars::new(5),
            }
        );
    }

    #[test]
    fn test_skips_unavailable_and_wrong_class() {
        let mut registry = registry_with(vec![mid_class("M1"), eco("E1"), eco("E2")]);
        registry.vehicle_at_mut(VehicleIdx::new(1)).reserve();
        let engine = MatchingEngine::default();

        let outcome = engine
            .find_best(&request(VehicleClass::Eco, Zone::Inner, Zone::Outer), &registry)
            .unwrap();

        assert_eq!(outcome.vehicle_id(), Some(VehicleIdx::new(2)));
    }

    #[test]
    fn test_no_match_quotes_last_registered_travel_time() {
        let mut registry = registry_with(vec![mid_class("M1"), mid_class("M2")]);
        for (position, km) in [(0, 50), (1, 10)] {
            let vehicle = registry.vehicle_at_mut(VehicleIdx::new(position));
            vehicle.travel_time(Kilometers::new(km));
            vehicle.reserve();
        }
        let engine = MatchingEngine::default();

        let outcome = engine
            .find_best(&request(VehicleClass::MidClass, Zone::Inner, Zone::Middle), &registry)
            .unwrap();

        assert_eq!(
            outcome,
            MatchOutcome::NoMatch {
                wait: SignedDuration::from_mins(24)
            }
        );
    }

    #[test]
    fn test_no_match_for_never_travelled_vehicle_waits_zero() {
        let mut registry = registry_with(vec![mid_class("M1")]);
        registry.vehicle_at_mut(VehicleIdx::new(0)).reserve();

        let outcome = MatchingEngine::default()
            .find_best(&request(VehicleClass::MidClass, Zone::Inner, Zone::Inner), &registry)
            .unwrap();

        assert_eq!(
            outcome,
            MatchOutcome::NoMatch {
                wait: SignedDuration::ZERO
            }
        );
    }

    #[test]
    fn test_unknown_class_has_no_history() {
        let registry = registry_with(vec![eco("E1"), mid_class("M1")]);

        let result = MatchingEngine::default()
            .find_best(&request(VehicleClass::Deluxe, Zone::Inner, Zone::Outer), &registry);

        assert_eq!(result, Err(FleetError::NoHistory(VehicleClass::Deluxe)));
    }

    #[test]
    fn test_passenger_count_ignored_by_default() {
        let registry = registry_with(vec![eco("E1")]);
        let crowded = TripRequest::new(VehicleClass::Eco, 6, Zone::Inner, Zone::Inner);

        let outcome = MatchingEngine::default().find_best(&crowded, &registry).unwrap();

        assert_eq!(outcome.vehicle_id(), Some(VehicleIdx::new(0)));
    }

    #[test]
    fn test_enforced_capacity_rejects_large_party() {
        let registry = registry_with(vec![eco("E1"), deluxe("D1")]);
        let engine = MatchingEngine::new(CapacityPolicy::Enforce);

        let crowded = TripRequest::new(VehicleClass::Eco, 3, Zone::Inner, Zone::Inner);
        assert_eq!(
            engine.find_best(&crowded, &registry),
            Err(FleetError::PassengerLimitExceeded {
                class: VehicleClass::Eco,
                passengers: 3,
                limit: 2,
            })
        );

        let family = TripRequest::new(VehicleClass::Deluxe, 7, Zone::Inner, Zone::Inner);
        assert_eq!(
            engine.find_best(&family, &registry).unwrap().vehicle_id(),
            Some(VehicleIdx::new(1))
        );
    }
}
