use std::fmt;

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    define_index_newtype,
    error::FleetError,
    fleet::{dollars::Dollars, kilometers::Kilometers, vehicle_class::VehicleClass},
    params::DEFAULT_MAINTENANCE_INTERVAL,
};

define_index_newtype!(VehicleIdx, VehicleUnit);

/// License plate, the registry key of a vehicle.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plate(String);

impl Plate {
    pub fn new(plate: impl Into<String>) -> Self {
        Plate(plate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Plate {
    fn from(value: &str) -> Self {
        Plate::new(value)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    Reserved,
    UnderMaintenance,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleStatus::Available => f.write_str("Available"),
            VehicleStatus::Reserved => f.write_str("Reserved"),
            VehicleStatus::UnderMaintenance => f.write_str("Under maintenance"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VehicleUnit {
    plate: Plate,
    class: VehicleClass,
    brand: String,
    name: String,
    total_distance: Kilometers,
    next_service_at: Kilometers,
    available: bool,
    last_trip_duration: SignedDuration,
    serviced: bool,
    in_maintenance: bool,
}

impl VehicleUnit {
    pub fn new(
        class: VehicleClass,
        plate: impl Into<Plate>,
        brand: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            plate: plate.into(),
            class,
            brand: brand.into(),
            name: name.into(),
            total_distance: Kilometers::ZERO,
            next_service_at: DEFAULT_MAINTENANCE_INTERVAL,
            available: true,
            last_trip_duration: SignedDuration::ZERO,
            serviced: false,
            in_maintenance: false,
        }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn class(&self) -> VehicleClass {
        self.class
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_distance(&self) -> Kilometers {
        self.total_distance
    }

    pub fn next_service_at(&self) -> Kilometers {
        self.next_service_at
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn is_serviced(&self) -> bool {
        self.serviced
    }

    /// Duration of the last trip this vehicle was priced for, zero if it never travelled.
    pub fn last_trip_duration(&self) -> SignedDuration {
        self.last_trip_duration
    }

    pub fn status(&self) -> VehicleStatus {
        if self.in_maintenance {
            VehicleStatus::UnderMaintenance
        } else if self.available {
            VehicleStatus::Available
        } else {
            VehicleStatus::Reserved
        }
    }

    pub fn is_eligible_for(&self, class: VehicleClass) -> bool {
        self.available && self.class == class
    }

    #[inline]
    pub fn cost(&self, distance: Kilometers) -> Dollars {
        self.class.price_per_km() * distance
    }

    /// Trip duration at the class speed. The result is kept as the vehicle's last trip
    /// duration, which is what waiting customers are quoted.
    pub fn travel_time(&mut self, distance: Kilometers) -> SignedDuration {
        let duration = distance / self.class.speed();
        self.last_trip_duration = duration;
        duration
    }

    /// Adds `distance` to the odometer and returns whether the vehicle is now due for
    /// service. Only an odometer landing exactly on a multiple of `interval` makes it due;
    /// a trip that jumps over a multiple does not.
    pub(crate) fn accrue_distance(&mut self, distance: Kilometers, interval: Kilometers) -> bool {
        self.total_distance += distance;
        self.total_distance.is_positive_multiple_of(interval)
    }

    /// Takes the vehicle out of the pool for maintenance. The operator account debit is
    /// booked by the registry in the same step.
    pub(crate) fn service(&mut self, interval: Kilometers) {
        self.next_service_at = self.total_distance + interval;
        self.available = false;
        self.serviced = true;
        self.in_maintenance = true;
    }

    /// Re-derives the next service point for a fleet running a different interval.
    pub(crate) fn align_service_threshold(&mut self, interval: Kilometers) {
        if !self.serviced {
            self.next_service_at = self.total_distance.next_multiple_of(interval);
        }
    }

    pub fn reserve(&mut self) {
        self.available = false;
    }

    pub fn make_available(&mut self) {
        self.available = true;
        self.in_maintenance = false;
    }
}

impl fmt::Display for VehicleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} {})", self.plate, self.brand, self.name)?;
        writeln!(f, "{}", self.class)?;
        writeln!(f, "Total Distance Traveled: {}", self.total_distance)?;
        writeln!(f, "Next Service at: {}", self.next_service_at)?;
        writeln!(
            f,
            "Availability: {}",
            if self.available {
                "Available"
            } else {
                "Not Available"
            }
        )?;
        write!(
            f,
            "Service: {}",
            if self.serviced { "Done" } else { "Not done" }
        )
    }
}

#[derive(Default)]
pub struct VehicleUnitBuilder {
    plate: Option<Plate>,
    class: Option<VehicleClass>,
    brand: Option<String>,
    name: Option<String>,
    odometer: Option<Kilometers>,
    maintenance_interval: Option<Kilometers>,
}

impl VehicleUnitBuilder {
    pub fn set_plate(&mut self, plate: impl Into<Plate>) -> &mut VehicleUnitBuilder {
        self.plate = Some(plate.into());
        self
    }

    pub fn set_class(&mut self, class: VehicleClass) -> &mut VehicleUnitBuilder {
        self.class = Some(class);
        self
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) -> &mut VehicleUnitBuilder {
        self.brand = Some(brand.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut VehicleUnitBuilder {
        self.name = Some(name.into());
        self
    }

    /// Distance already on the clock when the vehicle joins the fleet.
    pub fn set_odometer(&mut self, odometer: Kilometers) -> &mut VehicleUnitBuilder {
        self.odometer = Some(odometer);
        self
    }

    pub fn set_maintenance_interval(&mut self, interval: Kilometers) -> &mut VehicleUnitBuilder {
        self.maintenance_interval = Some(interval);
        self
    }

    pub fn build(self) -> Result<VehicleUnit, FleetError> {
        let class = self.class.ok_or(FleetError::MissingField("class"))?;
        let plate = self.plate.ok_or(FleetError::MissingField("plate"))?;
        let odometer = self.odometer.unwrap_or(Kilometers::ZERO);
        let interval = self
            .maintenance_interval
            .unwrap_or(DEFAULT_MAINTENANCE_INTERVAL);

        let mut vehicle = VehicleUnit::new(
            class,
            plate,
            self.brand.unwrap_or_default(),
            self.name.unwrap_or_default(),
        );
        vehicle.total_distance = odometer;
        vehicle.next_service_at = odometer.next_multiple_of(interval);

        Ok(vehicle)
    }
}
