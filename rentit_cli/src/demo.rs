use clap::{Args, ValueEnum};
use rentit_fleet::{
    fleet::{dollars::Dollars, kilometers::Kilometers},
    params::{
        CapacityPolicy, DEFAULT_HOP_LENGTH, DEFAULT_MAINTENANCE_COST,
        DEFAULT_MAINTENANCE_INTERVAL, FleetParams,
    },
    scenario::{DemoScenario, FleetScenario},
};
use tracing::info;

use crate::report;

#[derive(Clone, Copy, ValueEnum)]
pub enum DemoChoice {
    MoreCustomers,
    MoreVehicles,
    Balanced,
    TwoRounds,
    VehicleRecords,
    CustomerRecords,
    All,
}

impl DemoChoice {
    fn scenarios(self) -> Vec<DemoScenario> {
        match self {
            DemoChoice::MoreCustomers => vec![DemoScenario::MoreCustomers],
            DemoChoice::MoreVehicles => vec![DemoScenario::MoreVehicles],
            DemoChoice::Balanced => vec![DemoScenario::Balanced],
            DemoChoice::TwoRounds => vec![DemoScenario::TwoRounds],
            DemoChoice::VehicleRecords => vec![DemoScenario::VehicleRecords],
            DemoChoice::CustomerRecords => vec![DemoScenario::CustomerRecords],
            DemoChoice::All => DemoScenario::ALL.to_vec(),
        }
    }
}

#[derive(Args)]
pub struct DemoArgs {
    #[arg(value_enum, default_value_t = DemoChoice::All)]
    scenario: DemoChoice,

    /// Kilometres per zone hop
    #[arg(
        long,
        env = "RENTIT_HOP_LENGTH",
        default_value_t = DEFAULT_HOP_LENGTH.value()
    )]
    hop_length: u64,

    /// Odometer multiple at which a vehicle goes in for service
    #[arg(
        long,
        env = "RENTIT_MAINTENANCE_INTERVAL",
        default_value_t = DEFAULT_MAINTENANCE_INTERVAL.value()
    )]
    maintenance_interval: u64,

    #[arg(
        long,
        env = "RENTIT_MAINTENANCE_COST",
        default_value_t = DEFAULT_MAINTENANCE_COST.value()
    )]
    maintenance_cost: i64,

    /// Reject requests with more passengers than the class seats
    #[arg(long)]
    enforce_capacity: bool,

    /// Print a JSON report instead of the tables
    #[arg(long)]
    json: bool,
}

impl DemoArgs {
    fn params(&self) -> FleetParams {
        FleetParams {
            hop_length: Kilometers::new(self.hop_length),
            maintenance_interval: Kilometers::new(self.maintenance_interval),
            maintenance_cost: Dollars::new(self.maintenance_cost),
            capacity_policy: if self.enforce_capacity {
                CapacityPolicy::Enforce
            } else {
                CapacityPolicy::Ignore
            },
        }
    }
}

/// Prints the records before and after the scenario's record edits.
fn print_record_edits(scenario: &mut FleetScenario) -> Result<(), anyhow::Error> {
    let changes: Vec<String> = scenario.edits().iter().map(ToString::to_string).collect();

    println!("Records before: {}", changes.join(", "));
    report::print_registry(scenario.registry());

    scenario.apply_edits()?;

    println!("Records after: {}", changes.join(", "));
    report::print_registry(scenario.registry());

    Ok(())
}

pub fn run(args: DemoArgs) -> Result<(), anyhow::Error> {
    let params = args.params();
    params.validate()?;
    info!(
        hop_length = %params.hop_length,
        maintenance_interval = %params.maintenance_interval,
        "Running demo"
    );

    for demo in args.scenario.scenarios() {
        let mut scenario = demo.build(params.clone())?;

        if args.json {
            scenario.apply_edits()?;
            let records = scenario.run();
            println!(
                "{}",
                serde_json::to_string_pretty(&report::json_report(&scenario, &records))?
            );
        } else if scenario.edits().is_empty() {
            let records = scenario.run();
            report::print_scenario(&scenario, &records);
        } else {
            println!("=== {} ===", demo.id());
            print_record_edits(&mut scenario)?;
        }
    }

    Ok(())
}
