use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use clap::Args;
use rentit_fleet::json::types::JsonFleetScenario;
use tracing::info;

use crate::{file_utils::read_scenario_files, report};

#[derive(Args)]
pub struct RunArgs {
    /// A scenario file, or a folder of them
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Print a JSON report instead of the tables
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), anyhow::Error> {
    info!("Running scenarios from {:?}", args.input);
    let paths = if args.input.is_file() {
        vec![args.input]
    } else {
        read_scenario_files(&args.input)?
    };

    for path in paths {
        let f = File::open(&path).with_context(|| format!("Cannot open {}", path.display()))?;
        let content: JsonFleetScenario = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("Invalid scenario file {}", path.display()))?;
        let mut scenario = content.build_scenario()?;
        let records = scenario.run();

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report::json_report(&scenario, &records))?
            );
        } else {
            report::print_scenario(&scenario, &records);
        }
    }

    Ok(())
}
