//! Masses.
//!
//! The canonical unit is the kilogram; SI rendering is against grams and never goes below them.
//!
//! ```rust
//! use measures_core::Mass;
//!
//! let earth = Mass::EARTH_MASS;
//! assert!(earth.to(Mass::SOLAR_MASS) < 1e-5);
//! assert_eq!(Mass::from_unit(2_500.0, Mass::GRAM).to_string(), "2.50 kg");
//! ```

use crate::si::{format_si, SiFormat};
use crate::{Dimension, Scalar};
use core::fmt;

/// Dimension tag for mass.
#[derive(Dimension)]
#[dimension(name = "Mass", symbol = "g", field = "kilograms")]
pub enum MassDim {}

/// A mass, stored in kilograms.
pub type Mass = Scalar<MassDim>;

/// Kilograms rendered against grams.
const KILO: SiFormat = SiFormat::new().exponent(3).min_exponent(0);

impl Scalar<MassDim> {
    /// One gram.
    pub const GRAM: Self = Self::from_canonical(0.001);
    /// One kilogram.
    pub const KILOGRAM: Self = Self::from_canonical(1.0);
    /// Mass of the Earth.
    pub const EARTH_MASS: Self = Self::from_canonical(5.9722e24);
    /// Mass of the Sun.
    pub const SOLAR_MASS: Self = Self::from_canonical(1.98855e30);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[
        ("g", Self::GRAM),
        ("kg", Self::KILOGRAM),
        ("M⊕", Self::EARTH_MASS),
        ("M☉", Self::SOLAR_MASS),
    ];

    /// Forced grams.
    pub fn to_string_grams(&self) -> String {
        format_si(self.canonical(), MassDim::SYMBOL, KILO.max_exponent(0))
    }

    /// Forced kilograms.
    pub fn to_string_kilograms(&self) -> String {
        format_si(self.canonical(), MassDim::SYMBOL, KILO.min_exponent(3).max_exponent(3))
    }

    /// `"1.00M⊕"`.
    pub fn to_string_earth_masses(&self) -> String {
        format!("{:.2}M⊕", self.to(Self::EARTH_MASS))
    }

    /// `"1.00M☉"`.
    pub fn to_string_solar_masses(&self) -> String {
        format!("{:.2}M☉", self.to(Self::SOLAR_MASS))
    }
}

/// Best-fitting SI prefix over grams, e.g. `"1.50 kg"`, `"500.00 g"`.
impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_si(self.canonical(), MassDim::SYMBOL, KILO))
    }
}
