//! Volumes.
//!
//! Stored as a single magnitude in cubic kilometres. A cubic kilometre is 10¹² litres, so everyday volumes are tiny
//! canonical numbers; they still carry full `f64` precision.
//!
//! ```rust
//! use measures_core::{Area, Length, Volume};
//!
//! let pool = Volume::from_base_and_height(Area::from_unit(50.0, Area::SQUARE_METER), Length::from_unit(2.0, Length::METER));
//! assert!((pool.to(Volume::LITER) - 100_000.0).abs() < 1e-6);
//! ```

use crate::macros::{impl_canonical_product, impl_canonical_quotient};
use crate::units::area::Area;
use crate::units::length::Length;
use crate::{Dimension, Scalar};
use core::fmt;

/// Dimension tag for volume.
#[derive(Dimension)]
#[dimension(name = "Volume", symbol = "km³", field = "kmCubed")]
pub enum VolumeDim {}

/// A volume, stored in cubic kilometres.
pub type Volume = Scalar<VolumeDim>;

impl Scalar<VolumeDim> {
    /// One cubic centimetre.
    pub const CUBIC_CENTIMETER: Self = Self::from_canonical(1e-15);
    /// One litre.
    pub const LITER: Self = Self::from_canonical(1e-12);
    /// One cubic metre.
    pub const CUBIC_METER: Self = Self::from_canonical(1e-9);
    /// One cubic kilometre.
    pub const CUBIC_KILOMETER: Self = Self::from_canonical(1.0);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[
        ("cm³", Self::CUBIC_CENTIMETER),
        ("L", Self::LITER),
        ("m³", Self::CUBIC_METER),
        ("km³", Self::CUBIC_KILOMETER),
    ];

    /// Volume of a prism with the given base and height.
    #[inline]
    pub fn from_base_and_height(base: Area, height: Length) -> Self {
        base * height
    }

    /// `"1.00cm³"`.
    pub fn to_string_cubic_centimeters(&self) -> String {
        format!("{:.2}cm³", self.to(Self::CUBIC_CENTIMETER))
    }

    /// `"1.00L"`.
    pub fn to_string_liters(&self) -> String {
        format!("{:.2}L", self.to(Self::LITER))
    }

    /// `"1.00m³"`.
    pub fn to_string_cubic_meters(&self) -> String {
        format!("{:.2}m³", self.to(Self::CUBIC_METER))
    }

    /// `"1.00km³"`.
    pub fn to_string_cubic_kilometers(&self) -> String {
        format!("{:.2}{}", self.to(Self::CUBIC_KILOMETER), VolumeDim::SYMBOL)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_cubic_kilometers())
    }
}

impl_canonical_product!(Area, Length => Volume);
impl_canonical_product!(Length, Area => Volume);
impl_canonical_quotient!(Volume, Length => Area);
impl_canonical_quotient!(Volume, Area => Length);
