//! Mass densities, kept as a `(Mass, Volume)` pair and compared in grams per cubic centimetre.
//!
//! ```rust
//! use measures_core::{Density, Mass, Volume};
//!
//! let d = Mass::from_unit(1_000.0, Mass::KILOGRAM) / Volume::CUBIC_METER;
//! assert!(d.eq_within(Density::WATER, Density::WATER * 1e-9));
//! ```

use crate::dimension::{CompoundDimension, Operation};
use crate::macros::{impl_quotient_of, impl_quotient_undo};
use crate::units::mass::Mass;
use crate::units::volume::Volume;
use crate::Compound;
use core::fmt;

/// Dimension tag for density: mass over volume.
pub enum DensityDim {}

impl CompoundDimension for DensityDim {
    type First = Mass;
    type Second = Volume;

    const OPERATION: Operation = Operation::Quotient;
    const NAME: &'static str = "Density";
    const FIELDS: [&'static str; 2] = ["mass", "volume"];
    const REFERENCE: (Mass, Volume) = (Mass::GRAM, Volume::CUBIC_CENTIMETER);
}

/// A mass density.
pub type Density = Compound<DensityDim>;

impl Compound<DensityDim> {
    /// Vacuum.
    pub const ZERO: Self = Self::from_components(Mass::ZERO, Volume::CUBIC_CENTIMETER);
    /// Largest finite density in grams per cubic centimetre.
    pub const MAX: Self = Self::from_components(Mass::from_canonical(Mass::GRAM.canonical() * f64::MAX), Volume::CUBIC_CENTIMETER);
    /// Liquid water, one gram per cubic centimetre (reference unit).
    pub const WATER: Self = Self::from_components(Mass::GRAM, Volume::CUBIC_CENTIMETER);
    /// One kilogram per cubic metre.
    pub const KILOGRAM_PER_CUBIC_METER: Self = Self::from_components(Mass::KILOGRAM, Volume::CUBIC_METER);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[
        ("g/cm³", Self::WATER),
        ("kg/m³", Self::KILOGRAM_PER_CUBIC_METER),
    ];

    /// `"1.00g/cm³"`.
    pub fn to_string_grams_per_cubic_centimeter(&self) -> String {
        format!("{:.2}g/cm³", self.to(Self::WATER))
    }

    /// `"1000.00kg/m³"`.
    pub fn to_string_kilograms_per_cubic_meter(&self) -> String {
        format!("{:.2}kg/m³", self.to(Self::KILOGRAM_PER_CUBIC_METER))
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_grams_per_cubic_centimeter())
    }
}

impl_quotient_of!(Mass, Volume => Density);
impl_quotient_undo!(Density, Volume => Mass);
