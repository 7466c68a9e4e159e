use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    define_index_newtype,
    error::FleetError,
    fleet::{vehicle_class::VehicleClass, zone::Zone},
};

define_index_newtype!(CustomerIdx, CustomerProfile);

/// Driving license number, the registry key of a customer.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrivingLicense(String);

impl DrivingLicense {
    pub fn new(license: impl Into<String>) -> Self {
        DrivingLicense(license.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrivingLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DrivingLicense {
    fn from(value: &str) -> Self {
        DrivingLicense::new(value)
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRequest {
    pub class: VehicleClass,
    pub passengers: u32,
    pub origin: Zone,
    pub destination: Zone,
}

impl TripRequest {
    pub fn new(class: VehicleClass, passengers: u32, origin: Zone, destination: Zone) -> Self {
        Self {
            class,
            passengers,
            origin,
            destination,
        }
    }
}

impl fmt::Display for TripRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} from {} to {}",
            self.class, self.passengers, self.origin, self.destination
        )
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    license: DrivingLicense,
    name: String,
    surname: String,
    address: String,
    credit_card: String,
    trip: TripRequest,
}

impl CustomerProfile {
    pub fn license(&self) -> &DrivingLicense {
        &self.license
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn credit_card(&self) -> &str {
        &self.credit_card
    }

    pub fn trip(&self) -> &TripRequest {
        &self.trip
    }
}

impl fmt::Display for CustomerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Surname: {}", self.surname)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Credit Card: {}", self.credit_card)?;
        writeln!(f, "Driving License: {}", self.license)?;
        writeln!(f, "Selected Car Type: {}", self.trip.class)?;
        writeln!(f, "Number of Passengers: {}", self.trip.passengers)?;
        write!(
            f,
            "Trip: {} -> {}",
            self.trip.origin, self.trip.destination
        )
    }
}

#[derive(Default)]
pub struct CustomerProfileBuilder {
    license: Option<DrivingLicense>,
    name: Option<String>,
    surname: Option<String>,
    address: Option<String>,
    credit_card: Option<String>,
    trip: Option<TripRequest>,
}

impl CustomerProfileBuilder {
    pub fn set_license(
        &mut self,
        license: impl Into<DrivingLicense>,
    ) -> &mut CustomerProfileBuilder {
        self.license = Some(license.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut CustomerProfileBuilder {
        self.name = Some(name.into());
        self
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) -> &mut CustomerProfileBuilder {
        self.surname = Some(surname.into());
        self
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> &mut CustomerProfileBuilder {
        self.address = Some(address.into());
        self
    }

    pub fn set_credit_card(
        &mut self,
        credit_card: impl Into<String>,
    ) -> &mut CustomerProfileBuilder {
        self.credit_card = Some(credit_card.into());
        self
    }

    pub fn set_trip(&mut self, trip: TripRequest) -> &mut CustomerProfileBuilder {
        self.trip = Some(trip);
        self
    }

    pub fn build(self) -> Result<CustomerProfile, FleetError> {
        Ok(CustomerProfile {
            license: self.license.ok_or(FleetError::MissingField("driving_license"))?,
            name: self.name.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            credit_card: self.credit_card.unwrap_or_default(),
            trip: self.trip.ok_or(FleetError::MissingField("trip"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut builder = CustomerProfileBuilder::default();
        builder
            .set_license("DL123456")
            .set_name("John")
            .set_surname("Doe")
            .set_address("123 Main St")
            .set_credit_card("4123-4567-8901-2345")
            .set_trip(TripRequest::new(
                VehicleClass::Eco,
                2,
                Zone::Inner,
                Zone::Outer,
            ));
        let customer = builder.build().unwrap();

        assert_eq!(customer.license().as_str(), "DL123456");
        assert_eq!(customer.full_name(), "John Doe");
        assert_eq!(customer.trip().destination, Zone::Outer);
    }

    #[test]
    fn test_builder_requires_license() {
        let mut builder = CustomerProfileBuilder::default();
        builder.set_name("Jane");

        assert_eq!(
            builder.build(),
            Err(FleetError::MissingField("driving_license"))
        );
    }
}
