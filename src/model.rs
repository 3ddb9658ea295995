use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use approx::abs_diff_eq;
use ordered_float::OrderedFloat;
use strum::{Display, EnumCount, EnumIter};

/// A named star system of the known universe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount,
)]
pub enum StarSystem {
    #[strum(to_string = "Solar System")]
    SolarSystem,
    #[strum(to_string = "Alpha Centauri")]
    AlphaCentauri,
    Sirius,
    Betelgeuse,
    Vega,
}

/// Travel time along a route segment, or accumulated along a whole route.
/// Totally ordered so it can be used as a priority by the routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TravelTime(OrderedFloat<f64>);

impl TravelTime {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::MAX));

    /// Tolerance used when comparing accumulated travel times.
    pub const EPSILON: f64 = 1e-9;

    pub const fn from_hours(hours: f64) -> Self {
        Self(OrderedFloat(hours))
    }

    pub const fn hours(&self) -> f64 {
        self.0.0
    }

    pub fn is_zero(&self) -> bool {
        abs_diff_eq!(self.hours(), 0.0, epsilon = Self::EPSILON)
    }

    /// Returns true if both travel times are equal up to accumulated rounding errors.
    pub fn approx_eq(&self, other: Self) -> bool {
        abs_diff_eq!(self.hours(), other.hours(), epsilon = Self::EPSILON)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours())
    }
}

impl Add for TravelTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for TravelTime {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for TravelTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, t| total + t)
    }
}

impl From<f64> for TravelTime {
    fn from(hours: f64) -> Self {
        Self::from_hours(hours)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn star_system_names() {
        let names: Vec<_> = StarSystem::iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            ["Solar System", "Alpha Centauri", "Sirius", "Betelgeuse", "Vega"]
        );
        assert_eq!(StarSystem::COUNT, 5);
    }

    #[test]
    fn travel_time_sum() {
        let total: TravelTime = [0.1, 0.2, 0.3].into_iter().map(TravelTime::from).sum();
        assert_relative_eq!(total.hours(), 0.6, epsilon = TravelTime::EPSILON);
        assert!(total.approx_eq(TravelTime::from_hours(0.6)));
        assert!(!total.approx_eq(TravelTime::from_hours(0.61)));

        let empty: TravelTime = std::iter::empty().sum();
        assert!(empty.is_zero());
        assert_eq!(empty, TravelTime::ZERO);
    }

    #[test]
    fn travel_time_ordering() {
        let mut t = TravelTime::from_hours(4.0);
        t += TravelTime::from_hours(2.0);
        assert!(t > TravelTime::from_hours(5.0));
        assert!(t < TravelTime::MAX);
        assert_eq!(t.to_string(), "6");
    }
}
