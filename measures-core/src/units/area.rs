//! Areas.
//!
//! Stored as a single magnitude in square kilometres, the exact product of two canonical lengths.
//!
//! ```rust
//! use measures_core::{Area, Length};
//!
//! let field = Length::from_unit(100.0, Length::METER) * Length::from_unit(100.0, Length::METER);
//! assert!((field.to(Area::HECTARE) - 1.0).abs() < 1e-12);
//! let side = field / Length::from_unit(100.0, Length::METER);
//! assert!(side.eq_within(Length::from_unit(100.0, Length::METER), Length::CENTIMETER));
//! ```

use crate::macros::{impl_canonical_product, impl_canonical_quotient};
use crate::units::length::Length;
use crate::{Dimension, Scalar};
use core::fmt;

/// Dimension tag for area.
#[derive(Dimension)]
#[dimension(name = "Area", symbol = "km²", field = "kmSquared")]
pub enum AreaDim {}

/// An area, stored in square kilometres.
pub type Area = Scalar<AreaDim>;

impl Scalar<AreaDim> {
    /// One square metre.
    pub const SQUARE_METER: Self = Self::from_canonical(1e-6);
    /// One hectare (10 000 m²).
    pub const HECTARE: Self = Self::from_canonical(1e-2);
    /// One square kilometre.
    pub const SQUARE_KILOMETER: Self = Self::from_canonical(1.0);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[
        ("m²", Self::SQUARE_METER),
        ("ha", Self::HECTARE),
        ("km²", Self::SQUARE_KILOMETER),
    ];

    /// Area of a rectangle with the given sides.
    #[inline]
    pub fn from_sides(width: Length, height: Length) -> Self {
        width * height
    }

    /// `"1.00m²"`.
    pub fn to_string_square_meters(&self) -> String {
        format!("{:.2}m²", self.to(Self::SQUARE_METER))
    }

    /// `"1.00ha"`.
    pub fn to_string_hectares(&self) -> String {
        format!("{:.2}ha", self.to(Self::HECTARE))
    }

    /// `"1.00km²"`.
    pub fn to_string_square_kilometers(&self) -> String {
        format!("{:.2}{}", self.to(Self::SQUARE_KILOMETER), AreaDim::SYMBOL)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_square_kilometers())
    }
}

impl_canonical_product!(Length, Length => Area);
impl_canonical_quotient!(Area, Length => Length);
