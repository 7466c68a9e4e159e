use std::{fs::File, io::BufReader, path::PathBuf};

use rentit_fleet::{json::types::JsonFleetScenario, scenario::FleetScenario};

pub fn fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture)
}

pub fn load_scenario(fixture: &str) -> FleetScenario {
    let file = File::open(fixture_path(fixture)).unwrap();
    let json: JsonFleetScenario = serde_json::from_reader(BufReader::new(file)).unwrap();

    json.build_scenario().unwrap()
}
