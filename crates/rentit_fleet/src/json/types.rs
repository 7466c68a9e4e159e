use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::FleetError,
    fleet::{
        customer::{CustomerProfile, CustomerProfileBuilder, DrivingLicense, TripRequest},
        dollars::Dollars,
        fleet_registry::FleetRegistry,
        kilometers::Kilometers,
        vehicle::{VehicleUnit, VehicleUnitBuilder},
        vehicle_class::VehicleClass,
        zone::Zone,
    },
    params::{CapacityPolicy, FleetParams, check_distance},
    scenario::FleetScenario,
};

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "FleetScenario")]
pub struct JsonFleetScenario {
    pub id: Option<String>,
    pub params: Option<JsonFleetParams>,
    pub vehicles: Vec<JsonVehicle>,
    pub customers: Vec<JsonCustomer>,
    /// Order in which customers ask for a car. Every vehicle is released between two
    /// rounds. Defaults to a single round over all customers in registration order.
    pub rounds: Option<Vec<Vec<DrivingLicense>>>,
}

#[derive(Serialize, Deserialize, JsonSchema, Default)]
#[serde(deny_unknown_fields, rename = "FleetParams")]
pub struct JsonFleetParams {
    pub hop_length: Option<u64>,
    pub maintenance_interval: Option<u64>,
    pub maintenance_cost: Option<i64>,
    pub capacity_policy: Option<CapacityPolicy>,
}

impl TryFrom<JsonFleetParams> for FleetParams {
    type Error = FleetError;

    fn try_from(value: JsonFleetParams) -> Result<Self, Self::Error> {
        let defaults = FleetParams::default();

        let params = FleetParams {
            hop_length: value
                .hop_length
                .map(Kilometers::new)
                .unwrap_or(defaults.hop_length),
            maintenance_interval: value
                .maintenance_interval
                .map(Kilometers::new)
                .unwrap_or(defaults.maintenance_interval),
            maintenance_cost: value
                .maintenance_cost
                .map(Dollars::new)
                .unwrap_or(defaults.maintenance_cost),
            capacity_policy: value.capacity_policy.unwrap_or(defaults.capacity_policy),
        };
        params.validate()?;

        Ok(params)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    pub plate: String,
    #[serde(rename = "type")]
    pub class: VehicleClass,
    pub brand: Option<String>,
    pub name: Option<String>,
    /// Kilometres already travelled when the vehicle joins the fleet.
    pub odometer: Option<u64>,
}

impl From<&VehicleUnit> for JsonVehicle {
    fn from(value: &VehicleUnit) -> Self {
        JsonVehicle {
            plate: value.plate().to_string(),
            class: value.class(),
            brand: Some(value.brand().to_owned()),
            name: Some(value.name().to_owned()),
            odometer: Some(value.total_distance().value()),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Customer")]
pub struct JsonCustomer {
    pub driving_license: String,
    pub name: String,
    pub surname: String,
    pub address: Option<String>,
    pub credit_card: Option<String>,
    pub trip: JsonTripRequest,
}

impl From<&CustomerProfile> for JsonCustomer {
    fn from(value: &CustomerProfile) -> Self {
        JsonCustomer {
            driving_license: value.license().to_string(),
            name: value.name().to_owned(),
            surname: value.surname().to_owned(),
            address: Some(value.address().to_owned()),
            credit_card: Some(value.credit_card().to_owned()),
            trip: value.trip().into(),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "TripRequest")]
pub struct JsonTripRequest {
    #[serde(rename = "type")]
    pub class: VehicleClass,
    pub passengers: u32,
    pub from: Zone,
    pub to: Zone,
}

impl From<&TripRequest> for JsonTripRequest {
    fn from(value: &TripRequest) -> Self {
        JsonTripRequest {
            class: value.class,
            passengers: value.passengers,
            from: value.origin,
            to: value.destination,
        }
    }
}

impl From<JsonTripRequest> for TripRequest {
    fn from(value: JsonTripRequest) -> Self {
        TripRequest::new(value.class, value.passengers, value.from, value.to)
    }
}

impl JsonFleetScenario {
    #[instrument(skip_all, level = "debug")]
    pub fn build_scenario(self) -> Result<FleetScenario, anyhow::Error> {
        let params = FleetParams::try_from(self.params.unwrap_or_default())?;
        let interval = params.maintenance_interval;
        let mut registry = FleetRegistry::new(params);

        for vehicle in self.vehicles {
            let mut builder = VehicleUnitBuilder::default();

            builder
                .set_plate(vehicle.plate.as_str())
                .set_class(vehicle.class)
                .set_maintenance_interval(interval);

            if let Some(brand) = vehicle.brand {
                builder.set_brand(brand);
            }

            if let Some(name) = vehicle.name {
                builder.set_name(name);
            }

            if let Some(odometer) = vehicle.odometer {
                builder.set_odometer(check_distance("odometer", Kilometers::new(odometer))?);
            }

            registry.add_vehicle(builder.build()?)?;
        }

        for customer in self.customers {
            let mut builder = CustomerProfileBuilder::default();

            builder
                .set_license(customer.driving_license.as_str())
                .set_name(customer.name)
                .set_surname(customer.surname)
                .set_trip(customer.trip.into());

            if let Some(address) = customer.address {
                builder.set_address(address);
            }

            if let Some(credit_card) = customer.credit_card {
                builder.set_credit_card(credit_card);
            }

            registry.add_customer(builder.build()?)?;
        }

        let rounds = self.rounds.unwrap_or_else(|| {
            vec![
                registry
                    .customers()
                    .iter()
                    .map(|customer| customer.license().clone())
                    .collect(),
            ]
        });

        Ok(FleetScenario::new(self.id, registry, rounds))
    }
}
