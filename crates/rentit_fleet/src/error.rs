use thiserror::Error;

use crate::fleet::{
    customer::DrivingLicense, kilometers::Kilometers, vehicle::Plate, vehicle_class::VehicleClass,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("Invalid zone: {0:?}")]
    InvalidZone(String),
    #[error("Invalid vehicle class: {0:?}")]
    InvalidVehicleClass(String),
    #[error("No {0} vehicle registered, cannot estimate a waiting time")]
    NoHistory(VehicleClass),
    #[error("A vehicle with plate {0} is already registered")]
    DuplicatePlate(Plate),
    #[error("A customer with driving license {0} is already registered")]
    DuplicateLicense(DrivingLicense),
    #[error("Unknown vehicle {0}")]
    UnknownVehicle(Plate),
    #[error("Unknown customer {0}")]
    UnknownCustomer(DrivingLicense),
    #[error("{class} vehicles seat at most {limit} passengers, {passengers} requested")]
    PassengerLimitExceeded {
        class: VehicleClass,
        passengers: u32,
        limit: u32,
    },
    #[error("`{field}` of {value} exceeds the {max} limit")]
    DistanceOutOfRange {
        field: &'static str,
        value: Kilometers,
        max: Kilometers,
    },
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),
}
