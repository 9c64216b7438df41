//! Quantities stored as a pair of component quantities (speed, density, momentum, flow rate).

use crate::dimension::{CompoundDimension, Measure};
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity built from two component quantities, combined as described by `D::OPERATION`.
///
/// Conversions never flatten the pair: `to(unit)` combines `first.to(unit.first)` with `second.to(unit.second)`, so
/// `Length::KILOMETER / Duration::HOUR` converts to kilometres per hour exactly.
///
/// Two different pairs can describe the same physical value (`1 km / 1 h` and `2 km / 2 h`), so equality and
/// ordering compare magnitudes in the fixed reference unit `D::REFERENCE`.
///
/// ```rust
/// use measures_core::{Duration, Length, Speed};
///
/// let v = Length::KILOMETER / Duration::HOUR;
/// assert_eq!(v.to(Speed::KILOMETER_PER_HOUR), 1.0);
/// assert_eq!(v, Length::from_unit(2.0, Length::KILOMETER) / Duration::from_unit(2.0, Duration::HOUR));
/// ```
pub struct Compound<D: CompoundDimension> {
    first: D::First,
    second: D::Second,
}

impl<D: CompoundDimension> Compound<D> {
    /// Stores the component pair directly.
    #[inline]
    pub const fn from_components(first: D::First, second: D::Second) -> Self {
        Self { first, second }
    }

    /// The fixed reference unit used for equality, ordering and raw-magnitude arithmetic.
    #[inline]
    pub fn reference() -> Self {
        Self::from_components(D::REFERENCE.0, D::REFERENCE.1)
    }

    /// Creates `value` multiples of the reference unit.
    #[inline]
    pub fn from_reference(value: f64) -> Self {
        Self::from_unit(value, Self::reference())
    }

    /// Creates `value` multiples of `unit`.
    #[inline]
    pub fn from_unit(value: f64, unit: Self) -> Self {
        Self::from_components(unit.first.scaled(value), unit.second)
    }

    /// Returns the stored component pair.
    #[inline]
    pub fn components(self) -> (D::First, D::Second) {
        (self.first, self.second)
    }

    /// Numerator (or left factor).
    #[inline]
    pub fn first(self) -> D::First {
        self.first
    }

    /// Denominator (or right factor).
    #[inline]
    pub fn second(self) -> D::Second {
        self.second
    }

    /// Expresses this quantity as a multiple of `unit`, component by component.
    #[inline]
    pub fn to(self, unit: Self) -> f64 {
        D::OPERATION.combine(
            self.first.ratio_to(unit.first),
            self.second.ratio_to(unit.second),
        )
    }

    /// Magnitude in the reference unit.
    #[inline]
    pub fn in_reference(self) -> f64 {
        self.to(Self::reference())
    }

    /// Magnitude in the canonical units of both components combined (e.g. km/s for speed).
    #[inline]
    pub fn canonical(self) -> f64 {
        D::OPERATION.combine(self.first.canonical(), self.second.canonical())
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        if self.in_reference() < 0.0 {
            -self
        } else {
            self
        }
    }

    /// Returns the smaller of two quantities; a NaN operand is ignored, as in [`f64::min`].
    #[inline]
    pub fn min(self, other: Self) -> Self {
        let (a, b) = (self.in_reference(), other.in_reference());
        if a.is_nan() || b < a {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities; a NaN operand is ignored, as in [`f64::max`].
    #[inline]
    pub fn max(self, other: Self) -> Self {
        let (a, b) = (self.in_reference(), other.in_reference());
        if a.is_nan() || b > a {
            other
        } else {
            self
        }
    }

    /// `true` iff the two quantities differ by strictly less than `|delta|`, compared in the reference unit.
    #[inline]
    pub fn eq_within(self, other: Self, delta: Self) -> bool {
        (self.in_reference() - other.in_reference()).abs() < delta.in_reference().abs()
    }

    /// Total order over reference magnitudes (see [`f64::total_cmp`]).
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.in_reference().total_cmp(&other.in_reference())
    }
}

impl<D: CompoundDimension> Measure for Compound<D> {
    #[inline]
    fn canonical(self) -> f64 {
        Compound::canonical(self)
    }

    #[inline]
    fn ratio_to(self, unit: Self) -> f64 {
        self.to(unit)
    }

    #[inline]
    fn scaled(self, factor: f64) -> Self {
        self * factor
    }

    #[inline]
    fn divided(self, divisor: f64) -> Self {
        self / divisor
    }
}

impl<D: CompoundDimension> Clone for Compound<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: CompoundDimension> Copy for Compound<D> {}

impl<D: CompoundDimension> fmt::Debug for Compound<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(D::NAME)
            .field(D::FIELDS[0], &self.first)
            .field(D::FIELDS[1], &self.second)
            .finish()
    }
}

impl<D: CompoundDimension> Default for Compound<D> {
    fn default() -> Self {
        Self::from_reference(0.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<D: CompoundDimension> PartialEq for Compound<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.in_reference() == other.in_reference()
    }
}

impl<D: CompoundDimension> PartialOrd for Compound<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.in_reference().partial_cmp(&other.in_reference())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: CompoundDimension> Add for Compound<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_reference(self.in_reference() + rhs.in_reference())
    }
}

impl<D: CompoundDimension> Sub for Compound<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_reference(self.in_reference() - rhs.in_reference())
    }
}

impl<D: CompoundDimension> Neg for Compound<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

/// Adds a raw magnitude expressed in the reference unit.
impl<D: CompoundDimension> Add<f64> for Compound<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::from_reference(self.in_reference() + rhs)
    }
}

impl<D: CompoundDimension> Add<Compound<D>> for f64 {
    type Output = Compound<D>;
    #[inline]
    fn add(self, rhs: Compound<D>) -> Compound<D> {
        Compound::from_reference(self + rhs.in_reference())
    }
}

/// Subtracts a raw magnitude expressed in the reference unit.
impl<D: CompoundDimension> Sub<f64> for Compound<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::from_reference(self.in_reference() - rhs)
    }
}

impl<D: CompoundDimension> Sub<Compound<D>> for f64 {
    type Output = Compound<D>;
    #[inline]
    fn sub(self, rhs: Compound<D>) -> Compound<D> {
        Compound::from_reference(self - rhs.in_reference())
    }
}

/// Scales the first component and keeps the pair.
impl<D: CompoundDimension> Mul<f64> for Compound<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_components(self.first.scaled(rhs), self.second)
    }
}

impl<D: CompoundDimension> Mul<Compound<D>> for f64 {
    type Output = Compound<D>;
    #[inline]
    fn mul(self, rhs: Compound<D>) -> Compound<D> {
        rhs * self
    }
}

impl<D: CompoundDimension> Div<f64> for Compound<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_components(self.first.divided(rhs), self.second)
    }
}

/// Same-dimension division yields a dimensionless ratio.
impl<D: CompoundDimension> Div for Compound<D> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.to(rhs)
    }
}

impl<D: CompoundDimension> Sum for Compound<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_reference(iter.map(Compound::in_reference).sum())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D> Serialize for Compound<D>
where
    D: CompoundDimension,
    D::First: Serialize,
    D::Second: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct(D::NAME, 2)?;
        state.serialize_field(D::FIELDS[0], &self.first)?;
        state.serialize_field(D::FIELDS[1], &self.second)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, D> Deserialize<'de> for Compound<D>
where
    D: CompoundDimension,
    D::First: Deserialize<'de>,
    D::Second: Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        use core::marker::PhantomData;
        use serde::de::{self, IgnoredAny, MapAccess, Visitor};

        struct CompoundVisitor<D>(PhantomData<D>);

        impl<'de, D> Visitor<'de> for CompoundVisitor<D>
        where
            D: CompoundDimension,
            D::First: Deserialize<'de>,
            D::Second: Deserialize<'de>,
        {
            type Value = Compound<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "struct {} with fields `{}` and `{}`",
                    D::NAME,
                    D::FIELDS[0],
                    D::FIELDS[1]
                )
            }

            fn visit_map<V>(self, mut map: V) -> Result<Compound<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut first: Option<D::First> = None;
                let mut second: Option<D::Second> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key == D::FIELDS[0] {
                        if first.is_some() {
                            return Err(de::Error::duplicate_field(D::FIELDS[0]));
                        }
                        first = Some(map.next_value()?);
                    } else if key == D::FIELDS[1] {
                        if second.is_some() {
                            return Err(de::Error::duplicate_field(D::FIELDS[1]));
                        }
                        second = Some(map.next_value()?);
                    } else {
                        log::debug!("ignoring unknown field `{}` while reading {}", key, D::NAME);
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                let first = first.ok_or_else(|| de::Error::missing_field(D::FIELDS[0]))?;
                let second = second.ok_or_else(|| de::Error::missing_field(D::FIELDS[1]))?;
                Ok(Compound::from_components(first, second))
            }
        }

        deserializer.deserialize_map(CompoundVisitor(PhantomData))
    }
}
