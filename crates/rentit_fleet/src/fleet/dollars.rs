use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Neg},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fleet::kilometers::Kilometers;

/// Signed amount of money in whole dollars. Trip payments are positive, maintenance costs
/// are booked as negative movements on the operator account. Arithmetic saturates.
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
pub struct Dollars(i64);

impl Dollars {
    pub const ZERO: Dollars = Dollars(0);

    pub const fn new(value: i64) -> Self {
        Dollars(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}", self.0.unsigned_abs())
        } else {
            write!(f, "${}", self.0)
        }
    }
}

impl From<i64> for Dollars {
    fn from(value: i64) -> Self {
        Dollars::new(value)
    }
}

impl Add for Dollars {
    type Output = Dollars;

    fn add(self, other: Dollars) -> Dollars {
        Dollars(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Dollars {
    fn add_assign(&mut self, other: Dollars) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Neg for Dollars {
    type Output = Dollars;

    fn neg(self) -> Dollars {
        Dollars(self.0.saturating_neg())
    }
}

/// A per-kilometre rate applied to a distance.
impl Mul<Kilometers> for Dollars {
    type Output = Dollars;

    fn mul(self, distance: Kilometers) -> Dollars {
        let distance = i64::try_from(distance.value()).unwrap_or(i64::MAX);
        Dollars(self.0.saturating_mul(distance))
    }
}

impl Sum for Dollars {
    fn sum<I: Iterator<Item = Dollars>>(iter: I) -> Dollars {
        iter.fold(Dollars::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_times_distance() {
        assert_eq!(Dollars::new(5) * Kilometers::new(15), Dollars::new(75));
        assert_eq!(Dollars::new(2) * Kilometers::ZERO, Dollars::ZERO);
    }

    #[test]
    fn test_oversized_amounts_saturate() {
        assert_eq!(
            Dollars::new(5) * Kilometers::new(u64::MAX),
            Dollars::new(i64::MAX)
        );
        assert_eq!(Dollars::new(i64::MAX) + Dollars::new(15), Dollars::new(i64::MAX));
        assert_eq!(-Dollars::new(i64::MIN), Dollars::new(i64::MAX));
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Dollars::new(-300).to_string(), "-$300");
        assert_eq!(Dollars::new(15).to_string(), "$15");
    }
}
