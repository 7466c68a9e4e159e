use std::fmt;

use jiff::SignedDuration;
use serde::Serialize;
use tracing::instrument;

use crate::{
    error::FleetError,
    fleet::{
        customer::{CustomerProfile, DrivingLicense, TripRequest},
        fleet_registry::FleetRegistry,
        settlement::Settlement,
    },
    matching::{MatchOutcome, MatchingEngine},
};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TripOutcome {
    Reserved {
        customer: String,
        settlement: Settlement,
    },
    Waiting {
        customer: String,
        wait: SignedDuration,
    },
}

impl TripOutcome {
    pub fn settlement(&self) -> Option<&Settlement> {
        match self {
            TripOutcome::Reserved { settlement, .. } => Some(settlement),
            TripOutcome::Waiting { .. } => None,
        }
    }

    pub fn wait(&self) -> Option<SignedDuration> {
        match self {
            TripOutcome::Reserved { .. } => None,
            TripOutcome::Waiting { wait, .. } => Some(*wait),
        }
    }
}

fn hours(duration: SignedDuration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

impl fmt::Display for TripOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripOutcome::Reserved {
                customer,
                settlement,
            } => write!(
                f,
                "Car {} has been reserved to {}. The travel time is {:.2} hours, and the cost is {}.",
                settlement.plate,
                customer,
                hours(settlement.travel_time),
                settlement.cost
            ),
            TripOutcome::Waiting { customer, wait } => write!(
                f,
                "No cars are available at the moment for {}. The expected waiting time is {:.2} hours.",
                customer,
                hours(*wait)
            ),
        }
    }
}

/// Customer-facing entry point: runs a trip request through matching and, on a match,
/// settles it on the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestHandler {
    engine: MatchingEngine,
}

impl RequestHandler {
    pub fn new(engine: MatchingEngine) -> Self {
        Self { engine }
    }

    pub fn for_registry(registry: &FleetRegistry) -> Self {
        Self::new(MatchingEngine::from_params(registry.params()))
    }

    pub fn handle(
        &self,
        customer: &CustomerProfile,
        registry: &mut FleetRegistry,
    ) -> Result<TripOutcome, FleetError> {
        self.handle_request(customer.full_name(), customer.trip(), registry)
    }

    /// Handles the pending trip request of a registered customer.
    pub fn handle_customer(
        &self,
        license: &DrivingLicense,
        registry: &mut FleetRegistry,
    ) -> Result<TripOutcome, FleetError> {
        let customer = registry
            .customer(license)
            .ok_or_else(|| FleetError::UnknownCustomer(license.clone()))?;
        let name = customer.full_name();
        let trip = *customer.trip();

        self.handle_request(name, &trip, registry)
    }

    #[instrument(skip_all, level = "debug", fields(class = %trip.class))]
    fn handle_request(
        &self,
        customer: String,
        trip: &TripRequest,
        registry: &mut FleetRegistry,
    ) -> Result<TripOutcome, FleetError> {
        match self.engine.find_best(trip, registry)? {
            MatchOutcome::Matched {
                vehicle_id,
                distance,
                ..
            } => Ok(TripOutcome::Reserved {
                customer,
                settlement: registry.settle(vehicle_id, distance),
            }),
            MatchOutcome::NoMatch { wait } => Ok(TripOutcome::Waiting { customer, wait }),
        }
    }
}
