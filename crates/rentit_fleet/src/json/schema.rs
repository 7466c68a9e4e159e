use schemars::schema_for;

use crate::json::types;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonFleetScenario))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_scenario_sections() {
        let schema = generate_json_schema().unwrap();

        assert!(schema.contains("\"vehicles\""));
        assert!(schema.contains("\"customers\""));
        assert!(schema.contains("MID-CLASS"));
    }
}
