use std::{
    fmt,
    ops::{Add, AddAssign, Div, Mul},
};

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fleet::kmh::Kmh;

/// Whole kilometres. Every distance in the fleet model is an integer number of hops times
/// the hop length, so odometers never carry fractions.
/// Arithmetic saturates at `u64::MAX`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Deserialize,
    Serialize,
    JsonSchema,
)]
pub struct Kilometers(u64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0);

    pub const fn new(value: u64) -> Self {
        Kilometers(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// True when `self` is a positive whole multiple of `step`.
    pub fn is_positive_multiple_of(&self, step: Kilometers) -> bool {
        step.0 > 0 && self.0 >= step.0 && self.0 % step.0 == 0
    }

    /// Smallest multiple of `step` strictly above `self`.
    pub fn next_multiple_of(&self, step: Kilometers) -> Kilometers {
        if step.0 == 0 {
            return *self;
        }

        Kilometers((self.0 / step.0).saturating_add(1).saturating_mul(step.0))
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl From<u64> for Kilometers {
    fn from(value: u64) -> Self {
        Kilometers::new(value)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<u64> for Kilometers {
    type Output = Kilometers;

    fn mul(self, hops: u64) -> Kilometers {
        Kilometers(self.0.saturating_mul(hops))
    }
}

impl Div<Kmh> for Kilometers {
    type Output = SignedDuration;

    fn div(self, speed: Kmh) -> SignedDuration {
        if speed.value() == 0 {
            return SignedDuration::ZERO;
        }

        let seconds = self.0 as f64 * 3600.0 / f64::from(speed.value());
        SignedDuration::try_from_secs_f64(seconds).unwrap_or(SignedDuration::MAX)
    }
}
