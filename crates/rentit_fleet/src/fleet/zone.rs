use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{error::FleetError, fleet::kilometers::Kilometers, params::DEFAULT_HOP_LENGTH};

/// One of the three concentric service areas of the town.
///
/// Deserialization goes through [`FromStr`], so "Outer Circle", "outer_circle" and "Outer"
/// all name the same zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Inner,
    Middle,
    Outer,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Inner, Zone::Middle, Zone::Outer];

    pub fn name(&self) -> &'static str {
        match self {
            Zone::Inner => "Inner Circle",
            Zone::Middle => "Middle Circle",
            Zone::Outer => "Outer Circle",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', " ");
        let normalized = normalized
            .strip_suffix(" circle")
            .unwrap_or(&normalized)
            .trim();

        match normalized {
            "inner" => Ok(Zone::Inner),
            "middle" => Ok(Zone::Middle),
            "outer" => Ok(Zone::Outer),
            _ => Err(FleetError::InvalidZone(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Hop-based distances over the Inner–Middle–Outer line.
///
/// The starting zone always counts as one hop, so a trip inside a single zone is one hop and
/// every zone boundary crossed adds another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneGraph {
    hop_length: Kilometers,
}

impl ZoneGraph {
    pub fn new(hop_length: Kilometers) -> Self {
        Self { hop_length }
    }

    pub fn hops(from: Zone, to: Zone) -> u64 {
        use Zone::*;

        match (from, to) {
            (Inner, Inner) | (Middle, Middle) | (Outer, Outer) => 1,
            (Inner, Middle) | (Middle, Inner) | (Middle, Outer) | (Outer, Middle) => 2,
            (Inner, Outer) | (Outer, Inner) => 3,
        }
    }

    #[inline]
    pub fn distance(&self, from: Zone, to: Zone) -> Kilometers {
        self.hop_length * Self::hops(from, to)
    }
}

impl Default for ZoneGraph {
    fn default() -> Self {
        Self::new(DEFAULT_HOP_LENGTH)
    }
}
