//! Dimension traits shared by scalar and compound quantities.

use core::fmt::Debug;

/// Marker trait for the **dimension** of a single-magnitude quantity (Length, Duration, Mass …).
///
/// Each dimension is modelled as an empty enum and implemented through `#[derive(Dimension)]`:
///
/// ```rust
/// use measures_core::Dimension;
///
/// assert_eq!(measures_core::length::LengthDim::FIELD, "kilometers");
/// ```
pub trait Dimension: 'static {
    /// Human readable quantity name.
    const NAME: &'static str;

    /// Base unit symbol, used when rendering SI prefixes (e.g. `"m"` for a length stored in kilometres).
    const SYMBOL: &'static str;

    /// Field name under which the canonical magnitude is persisted (e.g. `"kilometers"`).
    const FIELD: &'static str;
}

/// How the two components of a [`Compound`](crate::Compound) combine into one physical value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `first / second` (speed, density, flow rate).
    Quotient,
    /// `first * second` (momentum).
    Product,
}

impl Operation {
    /// Combines two component ratios.
    #[inline]
    pub fn combine(self, first: f64, second: f64) -> f64 {
        match self {
            Operation::Quotient => first / second,
            Operation::Product => first * second,
        }
    }
}

/// The minimal surface every quantity exposes, so compounds can be nested.
pub trait Measure: Copy + Debug {
    /// Magnitude in the quantity's canonical unit.
    fn canonical(self) -> f64;

    /// Dimensionless ratio of `self` to `unit`.
    fn ratio_to(self, unit: Self) -> f64;

    /// Returns `self` multiplied by a dimensionless factor.
    fn scaled(self, factor: f64) -> Self;

    /// Returns `self` divided by a dimensionless divisor.
    fn divided(self, divisor: f64) -> Self;
}

/// Dimension of a quantity stored as a pair of component quantities.
///
/// The pair is never flattened into a single number, which keeps conversions between different component unit
/// combinations free of intermediate rounding.
pub trait CompoundDimension: 'static {
    /// Numerator (or left factor).
    type First: Measure;

    /// Denominator (or right factor).
    type Second: Measure;

    /// How the components combine.
    const OPERATION: Operation;

    /// Human readable quantity name.
    const NAME: &'static str;

    /// Persisted field names of the two components.
    const FIELDS: [&'static str; 2];

    /// Component pair of the fixed reference unit used for equality, ordering and additive arithmetic.
    const REFERENCE: (Self::First, Self::Second);
}
