use comfy_table::{Table, presets::UTF8_FULL};
use rentit_fleet::{
    fleet::fleet_registry::FleetRegistry,
    json::types::{JsonCustomer, JsonVehicle},
    scenario::{FleetScenario, RequestRecord},
};
use serde_json::json;

pub fn print_records(records: &[RequestRecord]) {
    let mut current_round = None;

    for record in records {
        if current_round != Some(record.round) {
            current_round = Some(record.round);
            println!("--- Round {} ---", record.round + 1);
        }

        match &record.outcome {
            Ok(outcome) => println!("{outcome}"),
            Err(error) => println!("Request from {} failed: {error}", record.license),
        }
    }
}

pub fn fleet_table(registry: &FleetRegistry) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Plate",
        "Class",
        "Vehicle",
        "Distance",
        "Next service",
        "Status",
        "Service",
    ]);

    for vehicle in registry.vehicles() {
        table.add_row(vec![
            vehicle.plate().to_string(),
            vehicle.class().to_string(),
            format!("{} {}", vehicle.brand(), vehicle.name()),
            vehicle.total_distance().to_string(),
            vehicle.next_service_at().to_string(),
            vehicle.status().to_string(),
            if vehicle.is_serviced() {
                String::from("Done")
            } else {
                String::from("Not done")
            },
        ]);
    }

    table
}

pub fn customer_table(registry: &FleetRegistry) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Driving license",
        "Name",
        "Address",
        "Credit card",
        "Class",
        "Passengers",
        "Trip",
    ]);

    for customer in registry.customers() {
        let trip = customer.trip();
        table.add_row(vec![
            customer.license().to_string(),
            customer.full_name(),
            customer.address().to_owned(),
            customer.credit_card().to_owned(),
            trip.class.to_string(),
            trip.passengers.to_string(),
            format!("{} -> {}", trip.origin, trip.destination),
        ]);
    }

    table
}

/// Vehicle and customer tables, each only when the registry holds some.
pub fn print_registry(registry: &FleetRegistry) {
    if !registry.vehicles().is_empty() {
        println!("{}", fleet_table(registry));
    }

    if !registry.customers().is_empty() {
        println!("{}", customer_table(registry));
    }
}

pub fn print_scenario(scenario: &FleetScenario, records: &[RequestRecord]) {
    if let Some(id) = scenario.id() {
        println!("=== {id} ===");
    }

    print_records(records);

    let registry = scenario.registry();
    println!("{}", fleet_table(registry));
    println!("RentItNow balance: {}", registry.balance());
}

pub fn json_report(scenario: &FleetScenario, records: &[RequestRecord]) -> serde_json::Value {
    let registry = scenario.registry();

    let requests: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            let outcome = match &record.outcome {
                Ok(outcome) => json!(outcome),
                Err(error) => json!({ "outcome": "error", "message": error.to_string() }),
            };

            json!({
                "round": record.round,
                "driving_license": record.license,
                "result": outcome,
            })
        })
        .collect();

    let vehicles: Vec<JsonVehicle> = registry.vehicles().iter().map(JsonVehicle::from).collect();
    let customers: Vec<JsonCustomer> = registry
        .customers()
        .iter()
        .map(JsonCustomer::from)
        .collect();

    json!({
        "id": scenario.id(),
        "requests": requests,
        "vehicles": vehicles,
        "customers": customers,
        "ledger": registry.account().ledger(),
        "balance": registry.balance(),
    })
}
