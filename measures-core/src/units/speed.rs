//! Speeds, kept as a `(Length, Duration)` pair.
//!
//! ```rust
//! use measures_core::{Duration, Length, Speed};
//!
//! let v = Speed::from_components(Length::KILOMETER, Duration::HOUR);
//! assert_eq!(v.to_string_kilometers_per_hour(), "1.00km/h");
//! assert_eq!(v * Duration::from_unit(3.0, Duration::HOUR), Length::from_unit(3.0, Length::KILOMETER));
//! ```

use crate::dimension::{CompoundDimension, Operation};
use crate::macros::{impl_quotient_of, impl_quotient_undo};
use crate::units::duration::Duration;
use crate::units::length::Length;
use crate::Compound;
use core::fmt;

/// Dimension tag for speed: length over duration.
pub enum SpeedDim {}

impl CompoundDimension for SpeedDim {
    type First = Length;
    type Second = Duration;

    const OPERATION: Operation = Operation::Quotient;
    const NAME: &'static str = "Speed";
    const FIELDS: [&'static str; 2] = ["length", "duration"];
    const REFERENCE: (Length, Duration) = (Length::METER, Duration::SECOND);
}

/// A speed.
pub type Speed = Compound<SpeedDim>;

impl Compound<SpeedDim> {
    /// At rest.
    pub const ZERO: Self = Self::from_components(Length::ZERO, Duration::SECOND);
    /// Largest finite speed in metres per second.
    pub const MAX: Self = Self::from_components(Length::from_canonical(Length::METER.canonical() * f64::MAX), Duration::SECOND);
    /// One metre per second (reference unit).
    pub const METER_PER_SECOND: Self = Self::from_components(Length::METER, Duration::SECOND);
    /// One kilometre per hour.
    pub const KILOMETER_PER_HOUR: Self = Self::from_components(Length::KILOMETER, Duration::HOUR);
    /// Speed of light in vacuum.
    pub const SPEED_OF_LIGHT: Self = Self::from_components(Length::from_canonical(299_792.458), Duration::SECOND);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[
        ("m/s", Self::METER_PER_SECOND),
        ("km/h", Self::KILOMETER_PER_HOUR),
        ("c", Self::SPEED_OF_LIGHT),
    ];

    /// `"1.00m/s"`.
    pub fn to_string_meters_per_second(&self) -> String {
        format!("{:.2}m/s", self.to(Self::METER_PER_SECOND))
    }

    /// `"1.00km/h"`.
    pub fn to_string_kilometers_per_hour(&self) -> String {
        format!("{:.2}km/h", self.to(Self::KILOMETER_PER_HOUR))
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_meters_per_second())
    }
}

impl_quotient_of!(Length, Duration => Speed);
impl_quotient_undo!(Speed, Duration => Length);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn conversions_keep_the_pair() {
        let v = Length::KILOMETER / Duration::HOUR;
        assert_eq!(v.to(Speed::KILOMETER_PER_HOUR), 1.0);
        assert_relative_eq!(v.to(Speed::METER_PER_SECOND), 1.0 / 3.6, max_relative = 1e-12);
        assert_eq!(v.components(), (Length::KILOMETER, Duration::HOUR));
        assert_relative_eq!(Speed::SPEED_OF_LIGHT.to(Speed::METER_PER_SECOND), 299_792_458.0, max_relative = 1e-12);
    }

    #[test]
    fn every_unit_roundtrips() {
        for (_, unit) in Speed::DISPLAY_UNITS {
            assert_eq!(Speed::from_unit(1.0, *unit).to(*unit), 1.0);
        }
    }

    #[test]
    fn equality_is_by_reference_magnitude() {
        let a = Length::KILOMETER / Duration::HOUR;
        let b = Length::from_unit(2.0, Length::KILOMETER) / Duration::from_unit(2.0, Duration::HOUR);
        assert_eq!(a, b);
        assert!(Speed::METER_PER_SECOND > Speed::KILOMETER_PER_HOUR);
        assert_eq!(Speed::ZERO, Speed::default());
    }

    #[test]
    fn max_is_finite_in_meters_per_second() {
        assert!(Speed::MAX.in_reference().is_finite());
        assert!(Speed::MAX > Speed::ZERO);
        assert!(Speed::MAX > Speed::SPEED_OF_LIGHT);
    }

    #[test]
    fn min_max_skip_nan_like_scalars() {
        let nan = Length::from_canonical(f64::NAN) / Duration::SECOND;
        assert_eq!(nan.min(Speed::METER_PER_SECOND), Speed::METER_PER_SECOND);
        assert_eq!(Speed::METER_PER_SECOND.min(nan), Speed::METER_PER_SECOND);
        assert_eq!(nan.max(Speed::METER_PER_SECOND), Speed::METER_PER_SECOND);
        assert_eq!(Speed::METER_PER_SECOND.max(nan), Speed::METER_PER_SECOND);
        assert!(nan.min(nan).in_reference().is_nan());

        let length_nan = Length::from_canonical(f64::NAN);
        assert_eq!(length_nan.min(Length::KILOMETER), Length::KILOMETER);
        assert_eq!(length_nan.max(Length::KILOMETER), Length::KILOMETER);
    }

    #[test]
    fn undo_division() {
        let d = Length::from_unit(42.195, Length::KILOMETER);
        let t = Duration::from_unit(2.0, Duration::HOUR);
        assert_eq!((d / t) * t, d);
        assert_eq!(t * (d / t), d);
        assert_relative_eq!((d / t) * Duration::HOUR / Length::KILOMETER, 21.0975, max_relative = 1e-12);
    }

    #[test]
    fn additive_arithmetic_goes_through_meters_per_second() {
        let sum = Speed::METER_PER_SECOND + Speed::KILOMETER_PER_HOUR;
        assert_relative_eq!(sum.to(Speed::METER_PER_SECOND), 1.0 + 1.0 / 3.6, max_relative = 1e-12);
        assert_abs_diff_eq!((Speed::METER_PER_SECOND + 2.0).to(Speed::METER_PER_SECOND), 3.0, epsilon = 1e-12);
        assert_eq!((Speed::KILOMETER_PER_HOUR * 3.0).to(Speed::KILOMETER_PER_HOUR), 3.0);
        assert_eq!((-Speed::KILOMETER_PER_HOUR).abs(), Speed::KILOMETER_PER_HOUR);
    }

    #[test]
    fn formatting() {
        let v = Speed::from_components(Length::KILOMETER, Duration::HOUR);
        assert_eq!(v.to_string_kilometers_per_hour(), "1.00km/h");
        assert_eq!(v.to_string(), "0.28m/s");
        assert_eq!(Speed::METER_PER_SECOND.to_string_meters_per_second(), "1.00m/s");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_both_components() {
        let json = serde_json::to_string(&Speed::KILOMETER_PER_HOUR).unwrap();
        assert_eq!(json, r#"{"length":1.0,"duration":3600.0}"#);
        let back: Speed = serde_json::from_str(&json).unwrap();
        assert_eq!(back.components(), (Length::KILOMETER, Duration::HOUR));
        assert!(serde_json::from_str::<Speed>(r#"{"length":1.0}"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_distance_roundtrip(d in 1e-3..1e9f64, t in 1e-3..1e9f64) {
            let (d, t) = (Length::from_unit(d, Length::METER), Duration::from_unit(t, Duration::SECOND));
            let back = (d / t) * t;
            prop_assert!(back.eq_within(d, d * 1e-12));
        }
    }
}
