//! Linear momenta, kept as a `(Mass, Speed)` product.
//!
//! The speed component is itself a compound, so a momentum converts through three base quantities without ever
//! collapsing to a single number.
//!
//! ```rust
//! use measures_core::{Mass, Momentum, Speed};
//!
//! let p = Mass::from_unit(2.0, Mass::KILOGRAM) * Speed::from_unit(3.0, Speed::METER_PER_SECOND);
//! assert!((p.to(Momentum::KILOGRAM_METER_PER_SECOND) - 6.0).abs() < 1e-12);
//! assert_eq!(p / Speed::from_unit(3.0, Speed::METER_PER_SECOND), Mass::from_unit(2.0, Mass::KILOGRAM));
//! ```

use crate::dimension::{CompoundDimension, Operation};
use crate::macros::{impl_product_of, impl_product_undo};
use crate::units::mass::Mass;
use crate::units::speed::Speed;
use crate::Compound;
use core::fmt;

/// Dimension tag for momentum: mass times speed.
pub enum MomentumDim {}

impl CompoundDimension for MomentumDim {
    type First = Mass;
    type Second = Speed;

    const OPERATION: Operation = Operation::Product;
    const NAME: &'static str = "Momentum";
    const FIELDS: [&'static str; 2] = ["mass", "speed"];
    const REFERENCE: (Mass, Speed) = (Mass::KILOGRAM, Speed::METER_PER_SECOND);
}

/// A linear momentum.
pub type Momentum = Compound<MomentumDim>;

impl Compound<MomentumDim> {
    /// No momentum.
    pub const ZERO: Self = Self::from_components(Mass::ZERO, Speed::METER_PER_SECOND);
    /// Largest finite momentum in kilogram metres per second.
    pub const MAX: Self = Self::from_components(Mass::MAX, Speed::METER_PER_SECOND);
    /// One kilogram metre per second (reference unit).
    pub const KILOGRAM_METER_PER_SECOND: Self = Self::from_components(Mass::KILOGRAM, Speed::METER_PER_SECOND);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[("kg⋅m/s", Self::KILOGRAM_METER_PER_SECOND)];

    /// `"1.00kg⋅m/s"`.
    pub fn to_string_kilogram_meters_per_second(&self) -> String {
        format!("{:.2}kg⋅m/s", self.to(Self::KILOGRAM_METER_PER_SECOND))
    }
}

impl fmt::Display for Momentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_kilogram_meters_per_second())
    }
}

impl_product_of!(Mass, Speed => Momentum);
impl_product_undo!(Momentum, Mass, Speed);
