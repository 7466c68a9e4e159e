use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{
    error::FleetError,
    fleet::{dollars::Dollars, kmh::Kmh},
};

/// Vehicle tier. The tier fixes the rental price, the cruising speed and the seat count.
///
/// Serialized as its code. Deserialization goes through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
pub enum VehicleClass {
    #[serde(rename = "ECO")]
    Eco,
    #[serde(rename = "MID-CLASS")]
    MidClass,
    #[serde(rename = "DELUXE")]
    Deluxe,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Eco,
        VehicleClass::MidClass,
        VehicleClass::Deluxe,
    ];

    pub fn price_per_km(&self) -> Dollars {
        match self {
            VehicleClass::Eco => Dollars::new(1),
            VehicleClass::MidClass => Dollars::new(2),
            VehicleClass::Deluxe => Dollars::new(5),
        }
    }

    pub fn speed(&self) -> Kmh {
        match self {
            VehicleClass::Eco => Kmh::new(15),
            VehicleClass::MidClass => Kmh::new(25),
            VehicleClass::Deluxe => Kmh::new(50),
        }
    }

    pub fn max_passengers(&self) -> u32 {
        match self {
            VehicleClass::Eco => 2,
            VehicleClass::MidClass => 4,
            VehicleClass::Deluxe => 7,
        }
    }

    pub fn seats(&self, passengers: u32) -> bool {
        passengers <= self.max_passengers()
    }

    pub fn code(&self) -> &'static str {
        match self {
            VehicleClass::Eco => "ECO",
            VehicleClass::MidClass => "MID-CLASS",
            VehicleClass::Deluxe => "DELUXE",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VehicleClass {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('_', "-").as_str() {
            "ECO" => Ok(VehicleClass::Eco),
            "MID-CLASS" | "MIDCLASS" | "MID" => Ok(VehicleClass::MidClass),
            "DELUXE" => Ok(VehicleClass::Deluxe),
            _ => Err(FleetError::InvalidVehicleClass(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for VehicleClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tables() {
        assert_eq!(VehicleClass::Eco.price_per_km(), Dollars::new(1));
        assert_eq!(VehicleClass::MidClass.speed(), Kmh::new(25));
        assert_eq!(VehicleClass::Deluxe.max_passengers(), 7);
        assert!(VehicleClass::Eco.seats(2));
        assert!(!VehicleClass::Eco.seats(3));
    }

    #[test]
    fn test_wire_names() {
        for class in VehicleClass::ALL {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{}\"", class.code()));
            assert_eq!(class.code().parse::<VehicleClass>(), Ok(class));
        }

        assert_eq!("mid_class".parse::<VehicleClass>(), Ok(VehicleClass::MidClass));
        assert!(matches!(
            "SUV".parse::<VehicleClass>(),
            Err(FleetError::InvalidVehicleClass(_))
        ));
    }

    #[test]
    fn test_deserialize_uses_the_class_parser() {
        let classes: Vec<VehicleClass> =
            serde_json::from_str(r#"["eco", "MID_CLASS", "Deluxe"]"#).unwrap();

        assert_eq!(
            classes,
            vec![VehicleClass::Eco, VehicleClass::MidClass, VehicleClass::Deluxe]
        );

        let error = serde_json::from_str::<VehicleClass>(r#""SUV""#).unwrap_err();
        assert!(error.to_string().contains("Invalid vehicle class"), "{error}");
    }
}
