//! Lengths.
//!
//! The canonical unit is the kilometre, which keeps planetary and stellar scales well inside `f64` range while still
//! resolving centimetres. SI rendering is against metres and never goes below them.
//!
//! ```rust
//! use measures_core::Length;
//!
//! let d = Length::from_unit(1.0, Length::METER);
//! assert_eq!(d.to(Length::KILOMETER), 0.001);
//! assert_eq!(Length::from_unit(1.5, Length::KILOMETER).to_string(), "1.50 km");
//! ```

use crate::si::{format_si, SiFormat};
use crate::{Dimension, Scalar};
use core::fmt;

/// Dimension tag for length.
#[derive(Dimension)]
#[dimension(name = "Length", symbol = "m", field = "kilometers")]
pub enum LengthDim {}

/// A length, stored in kilometres.
pub type Length = Scalar<LengthDim>;

/// Kilometres rendered against metres.
const KILO: SiFormat = SiFormat::new().exponent(3).min_exponent(0);

impl Scalar<LengthDim> {
    /// One centimetre.
    pub const CENTIMETER: Self = Self::from_canonical(0.00001);
    /// One metre.
    pub const METER: Self = Self::from_canonical(0.001);
    /// One kilometre.
    pub const KILOMETER: Self = Self::from_canonical(1.0);
    /// Mean radius of the Earth.
    pub const EARTH_RADIUS: Self = Self::from_canonical(6_371.0);
    /// Nominal radius of the Sun.
    pub const SOLAR_RADIUS: Self = Self::from_canonical(695_700.0);
    /// Astronomical unit (IAU 2012, exact).
    pub const ASTRONOMICAL_UNIT: Self = Self::from_canonical(149_597_870.7);
    /// Julian light-year.
    pub const LIGHT_YEAR: Self = Self::from_canonical(9_460_730_472_580.8);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[
        ("cm", Self::CENTIMETER),
        ("m", Self::METER),
        ("km", Self::KILOMETER),
        ("R⊕", Self::EARTH_RADIUS),
        ("R☉", Self::SOLAR_RADIUS),
        ("au", Self::ASTRONOMICAL_UNIT),
        ("ly", Self::LIGHT_YEAR),
    ];

    /// `"12.00cm"`.
    pub fn to_string_centimeters(&self) -> String {
        format!("{:.2}cm", self.to(Self::CENTIMETER))
    }

    /// Forced metres.
    pub fn to_string_meters(&self) -> String {
        format_si(self.canonical(), LengthDim::SYMBOL, KILO.max_exponent(0))
    }

    /// Forced kilometres.
    pub fn to_string_kilometers(&self) -> String {
        format_si(self.canonical(), LengthDim::SYMBOL, KILO.min_exponent(3).max_exponent(3))
    }

    /// `"1.00R⊕"`.
    pub fn to_string_earth_radii(&self) -> String {
        format!("{:.2}R⊕", self.to(Self::EARTH_RADIUS))
    }

    /// `"1.00R☉"`.
    pub fn to_string_solar_radii(&self) -> String {
        format!("{:.2}R☉", self.to(Self::SOLAR_RADIUS))
    }

    /// `"1.00au"`.
    pub fn to_string_astronomical_units(&self) -> String {
        format!("{:.2}au", self.to(Self::ASTRONOMICAL_UNIT))
    }

    /// `"1.00ly"`.
    pub fn to_string_light_years(&self) -> String {
        format!("{:.2}ly", self.to(Self::LIGHT_YEAR))
    }
}

/// Best-fitting SI prefix over metres, e.g. `"1.50 km"`, `"500.00 m"`.
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_si(self.canonical(), LengthDim::SYMBOL, KILO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn metric_conversions() {
        assert_eq!(Length::from_unit(1.0, Length::METER).to(Length::KILOMETER), 0.001);
        assert_abs_diff_eq!(Length::KILOMETER.to(Length::METER), 1_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Length::METER.to(Length::CENTIMETER), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn astronomical_conversions() {
        assert_relative_eq!(Length::ASTRONOMICAL_UNIT.to(Length::SOLAR_RADIUS), 215.03, max_relative = 1e-4);
        assert_relative_eq!(Length::LIGHT_YEAR.to(Length::ASTRONOMICAL_UNIT), 63_241.077, max_relative = 1e-7);
        assert_relative_eq!(Length::SOLAR_RADIUS.to(Length::EARTH_RADIUS), 109.2, max_relative = 1e-3);
    }

    #[test]
    fn every_unit_roundtrips() {
        for (_, unit) in Length::DISPLAY_UNITS {
            assert_eq!(Length::from_unit(1.0, *unit).to(*unit), 1.0);
        }
    }

    #[test]
    fn raw_magnitude_arithmetic_is_in_kilometers() {
        let d = Length::KILOMETER + 0.5;
        assert_eq!(d.to(Length::KILOMETER), 1.5);
        assert_eq!((2.0 - d).to(Length::KILOMETER), 0.5);
    }

    #[test]
    fn display() {
        assert_eq!(Length::from_unit(500.0, Length::METER).to_string(), "500.00 m");
        assert_eq!(Length::from_unit(12.0, Length::CENTIMETER).to_string(), "0.12 m");
        assert_eq!(Length::ASTRONOMICAL_UNIT.to_string(), "149.60 Gm");
    }

    #[test]
    fn named_formatters() {
        let d = Length::from_unit(1.5, Length::KILOMETER);
        assert_eq!(d.to_string_meters(), "1500.00 m");
        assert_eq!(d.to_string_kilometers(), "1.50 km");
        assert_eq!(d.to_string_centimeters(), "150000.00cm");
        assert_eq!(Length::EARTH_RADIUS.to_string_earth_radii(), "1.00R⊕");
        assert_eq!(Length::SOLAR_RADIUS.to_string_solar_radii(), "1.00R☉");
        assert_eq!(Length::ASTRONOMICAL_UNIT.to_string_astronomical_units(), "1.00au");
        assert_eq!((Length::LIGHT_YEAR * 4.24).to_string_light_years(), "4.24ly");
    }

    proptest! {
        #[test]
        fn prop_meter_kilometer_roundtrip(v in -1e9..1e9f64) {
            let d = Length::from_unit(v, Length::METER);
            let back = Length::from_unit(d.to(Length::KILOMETER), Length::KILOMETER).to(Length::METER);
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_conversion_is_transitive(v in -1e6..1e6f64) {
            let d = Length::from_unit(v, Length::EARTH_RADIUS);
            let via = d.to(Length::KILOMETER) * Length::KILOMETER.to(Length::METER);
            prop_assert!((via - d.to(Length::METER)).abs() <= 1e-9 * d.to(Length::METER).abs().max(1.0));
        }
    }
}
