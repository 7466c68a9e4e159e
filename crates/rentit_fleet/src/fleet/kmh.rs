use std::fmt;

/// Cruising speed of a vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Kmh(u32);

impl Kmh {
    pub const fn new(value: u32) -> Self {
        Kmh(value)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Kmh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}
