use crate::fleet::{
    customer::{CustomerProfile, CustomerProfileBuilder, TripRequest},
    fleet_registry::FleetRegistry,
    vehicle::VehicleUnit,
    vehicle_class::VehicleClass,
    zone::Zone,
};

pub fn eco(plate: &str) -> VehicleUnit {
    VehicleUnit::new(VehicleClass::Eco, plate, "Tesla", "Model S")
}

pub fn mid_class(plate: &str) -> VehicleUnit {
    VehicleUnit::new(VehicleClass::MidClass, plate, "Toyota", "Camry")
}

pub fn deluxe(plate: &str) -> VehicleUnit {
    VehicleUnit::new(VehicleClass::Deluxe, plate, "Mercedes-Benz", "S-Class")
}

pub fn customer(license: &str, class: VehicleClass) -> CustomerProfile {
    customer_with_trip(
        license,
        TripRequest::new(class, 1, Zone::Inner, Zone::Outer),
    )
}

pub fn customer_with_trip(license: &str, trip: TripRequest) -> CustomerProfile {
    let mut builder = CustomerProfileBuilder::default();
    builder
        .set_license(license)
        .set_name("Test")
        .set_surname(license)
        .set_address("1 Test St")
        .set_credit_card("0000-0000-0000-0000")
        .set_trip(trip);
    builder.build().unwrap()
}

pub fn registry_with(vehicles: Vec<VehicleUnit>) -> FleetRegistry {
    let mut registry = FleetRegistry::default();
    for vehicle in vehicles {
        registry.add_vehicle(vehicle).unwrap();
    }
    registry
}
