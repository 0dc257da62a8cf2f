use std::{fmt::Display, iter::Sum, ops::Add};

/// Amount in euros. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            // -0.0 passes the check above
            Some(Price(value + 0.0))
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Plain decimal rendering used by the activities file, always with a
    /// fractional part (`40.0`, `12.5`).
    pub fn to_raw_string(&self) -> String {
        if self.0.fract() == 0.0 {
            format!("{:.1}", self.0)
        } else {
            format!("{}", self.0)
        }
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0 + other.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, x| acc + x)
    }
}
