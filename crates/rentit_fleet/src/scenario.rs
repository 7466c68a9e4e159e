use std::fmt;

use tracing::{debug, info};

use crate::{
    error::FleetError,
    fleet::{
        customer::{CustomerProfile, CustomerProfileBuilder, DrivingLicense, TripRequest},
        fleet_registry::FleetRegistry,
        vehicle::{Plate, VehicleUnit},
        vehicle_class::VehicleClass,
        zone::Zone,
    },
    params::FleetParams,
    request_handler::{RequestHandler, TripOutcome},
};

/// A change to the vehicle or customer records.
#[derive(Debug, Clone)]
pub enum RegistryEdit {
    RemoveVehicle(Plate),
    /// Replaces the vehicle registered under the same plate.
    UpdateVehicle(VehicleUnit),
    RemoveCustomer(DrivingLicense),
    /// Replaces the customer registered under the same driving license.
    UpdateCustomer(CustomerProfile),
}

impl RegistryEdit {
    pub fn apply(self, registry: &mut FleetRegistry) -> Result<(), FleetError> {
        match self {
            RegistryEdit::RemoveVehicle(plate) => {
                registry.remove_vehicle(&plate)?;
            }
            RegistryEdit::UpdateVehicle(vehicle) => {
                registry.update_vehicle(vehicle)?;
            }
            RegistryEdit::RemoveCustomer(license) => {
                registry.remove_customer(&license)?;
            }
            RegistryEdit::UpdateCustomer(customer) => {
                registry.update_customer(customer)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for RegistryEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryEdit::RemoveVehicle(plate) => write!(f, "remove vehicle {plate}"),
            RegistryEdit::UpdateVehicle(vehicle) => {
                write!(f, "update vehicle {} ({})", vehicle.plate(), vehicle.class())
            }
            RegistryEdit::RemoveCustomer(license) => write!(f, "remove customer {license}"),
            RegistryEdit::UpdateCustomer(customer) => write!(
                f,
                "update customer {} ({})",
                customer.license(),
                customer.full_name()
            ),
        }
    }
}

/// A populated registry, the record edits to play on it, and the order in which its
/// customers ask for a car.
pub struct FleetScenario {
    id: Option<String>,
    registry: FleetRegistry,
    edits: Vec<RegistryEdit>,
    rounds: Vec<Vec<DrivingLicense>>,
    handler: RequestHandler,
}

#[derive(Debug)]
pub struct RequestRecord {
    pub round: usize,
    pub license: DrivingLicense,
    pub outcome: Result<TripOutcome, FleetError>,
}

impl FleetScenario {
    pub fn new(
        id: Option<String>,
        registry: FleetRegistry,
        rounds: Vec<Vec<DrivingLicense>>,
    ) -> Self {
        Self {
            handler: RequestHandler::for_registry(&registry),
            id,
            registry,
            edits: Vec::new(),
            rounds,
        }
    }

    pub fn with_edits(mut self, edits: Vec<RegistryEdit>) -> Self {
        self.edits = edits;
        self
    }

    /// Record edits not applied yet.
    pub fn edits(&self) -> &[RegistryEdit] {
        &self.edits
    }

    /// Applies the pending record edits in order. Stops at the first failing edit; the
    /// edits before it stay applied.
    pub fn apply_edits(&mut self) -> Result<(), FleetError> {
        for edit in std::mem::take(&mut self.edits) {
            info!("Applying {edit}");
            edit.apply(&mut self.registry)?;
        }

        Ok(())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn registry(&self) -> &FleetRegistry {
        &self.registry
    }

    pub fn rounds(&self) -> &[Vec<DrivingLicense>] {
        &self.rounds
    }

    /// Plays every round in order. All vehicles are handed back to the pool before each
    /// round after the first. A failing request is recorded and does not stop the run.
    pub fn run(&mut self) -> Vec<RequestRecord> {
        let mut records = Vec::new();

        for (round, licenses) in self.rounds.iter().enumerate() {
            if round > 0 {
                debug!("Releasing all vehicles before round {}", round + 1);
                self.registry.release_all();
            }

            for license in licenses {
                let outcome = self.handler.handle_customer(license, &mut self.registry);
                records.push(RequestRecord {
                    round,
                    license: license.clone(),
                    outcome,
                });
            }
        }

        info!(
            scenario = self.id.as_deref().unwrap_or("unnamed"),
            requests = records.len(),
            balance = %self.registry.balance(),
            "Scenario finished"
        );

        records
    }
}

/// The fleet demonstrations the operator uses to sanity check the matching rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoScenario {
    /// Four vehicles, six customers: some customers are quoted a waiting time.
    MoreCustomers,
    /// Six vehicles, four customers: everyone gets a car.
    MoreVehicles,
    /// Six vehicles, six customers.
    Balanced,
    /// The balanced fleet played twice, returning every vehicle in between.
    TwoRounds,
    /// Six vehicles and no requests: SUV101 is removed and CMP202 becomes a MID-CLASS.
    VehicleRecords,
    /// Six customers and no vehicles: Alice Smith is removed and Jane Doe switches to a
    /// DELUXE trip inside the Middle Circle.
    CustomerRecords,
}

impl DemoScenario {
    pub const ALL: [DemoScenario; 6] = [
        DemoScenario::MoreCustomers,
        DemoScenario::MoreVehicles,
        DemoScenario::Balanced,
        DemoScenario::TwoRounds,
        DemoScenario::VehicleRecords,
        DemoScenario::CustomerRecords,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DemoScenario::MoreCustomers => "more-customers",
            DemoScenario::MoreVehicles => "more-vehicles",
            DemoScenario::Balanced => "balanced",
            DemoScenario::TwoRounds => "two-rounds",
            DemoScenario::VehicleRecords => "vehicle-records",
            DemoScenario::CustomerRecords => "customer-records",
        }
    }

    pub fn build(&self, params: FleetParams) -> Result<FleetScenario, FleetError> {
        let mut registry = FleetRegistry::new(params);

        let vehicle_count = match self {
            DemoScenario::MoreCustomers => 4,
            DemoScenario::CustomerRecords => 0,
            _ => 6,
        };
        for vehicle in demo_vehicles().into_iter().take(vehicle_count) {
            registry.add_vehicle(vehicle)?;
        }

        let customer_count = match self {
            DemoScenario::MoreVehicles => 4,
            DemoScenario::VehicleRecords => 0,
            _ => 6,
        };
        for customer in demo_customers(*self)?.into_iter().take(customer_count) {
            registry.add_customer(customer)?;
        }

        let in_order: Vec<DrivingLicense> = registry
            .customers()
            .iter()
            .map(|customer| customer.license().clone())
            .collect();

        let rounds = match self {
            DemoScenario::TwoRounds => {
                let mut second = in_order[3..].to_vec();
                second.extend_from_slice(&in_order[..3]);
                vec![in_order, second]
            }
            DemoScenario::VehicleRecords | DemoScenario::CustomerRecords => Vec::new(),
            _ => vec![in_order],
        };

        let scenario = FleetScenario::new(Some(self.id().to_owned()), registry, rounds);

        Ok(scenario.with_edits(self.record_edits()?))
    }

    fn record_edits(&self) -> Result<Vec<RegistryEdit>, FleetError> {
        let edits = match self {
            DemoScenario::VehicleRecords => vec![
                RegistryEdit::RemoveVehicle(Plate::new("SUV101")),
                RegistryEdit::UpdateVehicle(VehicleUnit::new(
                    VehicleClass::MidClass,
                    "CMP202",
                    "Honda",
                    "Civic",
                )),
            ],
            DemoScenario::CustomerRecords => {
                let mut jane = CustomerProfileBuilder::default();
                jane.set_license("DL654321")
                    .set_name("Jane")
                    .set_surname("Doe")
                    .set_address("456 Elm St")
                    .set_credit_card("3456-9012-5678-1245")
                    .set_trip(TripRequest::new(
                        VehicleClass::Deluxe,
                        5,
                        Zone::Middle,
                        Zone::Middle,
                    ));

                vec![
                    RegistryEdit::RemoveCustomer(DrivingLicense::new("DL987654")),
                    RegistryEdit::UpdateCustomer(jane.build()?),
                ]
            }
            _ => Vec::new(),
        };

        Ok(edits)
    }
}

fn demo_vehicles() -> Vec<VehicleUnit> {
    vec![
        VehicleUnit::new(VehicleClass::Eco, "ECO123", "Tesla", "Model S"),
        VehicleUnit::new(VehicleClass::MidClass, "MID456", "Toyota", "Camry"),
        VehicleUnit::new(VehicleClass::Deluxe, "DEL789", "Mercedes-Benz", "S-Class"),
        VehicleUnit::new(VehicleClass::MidClass, "SUV101", "Ford", "Explorer"),
        VehicleUnit::new(VehicleClass::Eco, "CMP202", "Honda", "Civic"),
        VehicleUnit::new(VehicleClass::Deluxe, "LUX303", "BMW", "7 Series"),
    ]
}

struct DemoCustomer {
    name: &'static str,
    surname: &'static str,
    address: &'static str,
    credit_card: &'static str,
    license: &'static str,
    trip: TripRequest,
}

fn demo_customers(scenario: DemoScenario) -> Result<Vec<CustomerProfile>, FleetError> {
    use VehicleClass::*;
    use Zone::*;

    // The first demo sends Alice and Sophia inwards, the others outwards.
    let (alice_from, alice_to, sophia_from, sophia_to) = match scenario {
        DemoScenario::MoreCustomers => (Outer, Inner, Outer, Middle),
        _ => (Inner, Outer, Middle, Outer),
    };

    let customers = [
        DemoCustomer {
            name: "John",
            surname: "Doe",
            address: "123 Main St",
            credit_card: "4123-4567-8901-2345",
            license: "DL123456",
            trip: TripRequest::new(Eco, 2, Inner, Outer),
        },
        DemoCustomer {
            name: "Jane",
            surname: "Doe",
            address: "456 Elm St",
            credit_card: "1234-5678-9012-3456",
            license: "DL654321",
            trip: TripRequest::new(MidClass, 4, Middle, Outer),
        },
        DemoCustomer {
            name: "Alice",
            surname: "Smith",
            address: "789 Oak St",
            credit_card: "9876-5432-1098-7654",
            license: "DL987654",
            trip: TripRequest::new(Deluxe, 6, alice_from, alice_to),
        },
        DemoCustomer {
            name: "Emily",
            surname: "Johnson",
            address: "567 Pine St",
            credit_card: "5678-9012-3456-7890",
            license: "DL135792",
            trip: TripRequest::new(Eco, 1, Middle, Middle),
        },
        DemoCustomer {
            name: "Michael",
            surname: "Williams",
            address: "890 Cedar St",
            credit_card: "7896-3452-9018-7456",
            license: "DL246813",
            trip: TripRequest::new(MidClass, 3, Inner, Inner),
        },
        DemoCustomer {
            name: "Sophia",
            surname: "Brown",
            address: "123 Oak St",
            credit_card: "3214-8765-9102-6543",
            license: "DL975318",
            trip: TripRequest::new(Deluxe, 7, sophia_from, sophia_to),
        },
    ];

    customers
        .into_iter()
        .map(|customer| {
            let mut builder = CustomerProfileBuilder::default();
            builder
                .set_license(customer.license)
                .set_name(customer.name)
                .set_surname(customer.surname)
                .set_address(customer.address)
                .set_credit_card(customer.credit_card)
                .set_trip(customer.trip);
            builder.build()
        })
        .collect()
}
