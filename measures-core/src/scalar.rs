//! Single-magnitude quantity type and its implementations.

use crate::dimension::{Dimension, Measure};
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity stored as one `f64` in the canonical unit of its dimension `D`.
///
/// Unit constants such as [`Length::KILOMETER`](crate::Length) are themselves `Scalar` values whose magnitude is the
/// conversion factor to the canonical unit, so any value can serve as the unit of a conversion.
///
/// ```rust
/// use measures_core::Length;
///
/// let d = Length::from_unit(1_500.0, Length::METER);
/// assert!((d.to(Length::KILOMETER) - 1.5).abs() < 1e-12);
///
/// // Any instance is a valid unit, which allows chained scaling.
/// let lap = Length::from_unit(400.0, Length::METER);
/// assert!((d.to(lap) - 3.75).abs() < 1e-12);
/// ```
pub struct Scalar<D: Dimension>(f64, PhantomData<D>);

impl<D: Dimension> Scalar<D> {
    /// Zero in every unit.
    pub const ZERO: Self = Self::from_canonical(0.0);

    /// Largest finite value.
    pub const MAX: Self = Self::from_canonical(f64::MAX);

    /// Creates a quantity directly from its canonical magnitude.
    #[inline]
    pub const fn from_canonical(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the canonical magnitude.
    #[inline]
    pub const fn canonical(self) -> f64 {
        self.0
    }

    /// Creates `value` multiples of `unit`.
    #[inline]
    pub fn from_unit(value: f64, unit: Self) -> Self {
        Self::from_canonical(value * unit.0)
    }

    /// Expresses this quantity as a multiple of `unit`.
    ///
    /// A zero `unit` yields an infinity or NaN, following IEEE-754 division.
    #[inline]
    pub fn to(self, unit: Self) -> f64 {
        self.0 / unit.0
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_canonical(self.0.abs())
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_canonical(self.0.min(other.0))
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_canonical(self.0.max(other.0))
    }

    /// `true` iff the two quantities differ by strictly less than `|delta|`.
    ///
    /// ```rust
    /// use measures_core::Mass;
    ///
    /// let a = Mass::from_unit(1.0, Mass::KILOGRAM);
    /// let b = Mass::from_unit(1_000.5, Mass::GRAM);
    /// assert!(a.eq_within(b, Mass::GRAM));
    /// assert!(!a.eq_within(b, Mass::from_unit(0.5, Mass::GRAM)));
    /// ```
    #[inline]
    pub fn eq_within(self, other: Self, delta: Self) -> bool {
        (self.0 - other.0).abs() < delta.0.abs()
    }

    /// Total order over canonical magnitudes (see [`f64::total_cmp`]).
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl<D: Dimension> Measure for Scalar<D> {
    #[inline]
    fn canonical(self) -> f64 {
        self.0
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

impl<D: Dimension> Clone for Scalar<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Scalar<D> {}

impl<D: Dimension> fmt::Debug for Scalar<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?} {})", D::NAME, self.0, D::FIELD)
    }
}

impl<D: Dimension> Default for Scalar<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> PartialEq for Scalar<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension> PartialOrd for Scalar<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Scalar<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_canonical(self.0 + rhs.0)
    }
}

impl<D: Dimension> Sub for Scalar<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_canonical(self.0 - rhs.0)
    }
}

impl<D: Dimension> Neg for Scalar<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_canonical(-self.0)
    }
}

/// Adds a raw magnitude expressed in the canonical unit.
impl<D: Dimension> Add<f64> for Scalar<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 + rhs)
    }
}

impl<D: Dimension> Add<Scalar<D>> for f64 {
    type Output = Scalar<D>;
    #[inline]
    fn add(self, rhs: Scalar<D>) -> Scalar<D> {
        Scalar::from_canonical(self + rhs.0)
    }
}

/// Subtracts a raw magnitude expressed in the canonical unit.
impl<D: Dimension> Sub<f64> for Scalar<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 - rhs)
    }
}

impl<D: Dimension> Sub<Scalar<D>> for f64 {
    type Output = Scalar<D>;
    #[inline]
    fn sub(self, rhs: Scalar<D>) -> Scalar<D> {
        Scalar::from_canonical(self - rhs.0)
    }
}

impl<D: Dimension> Mul<f64> for Scalar<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Scalar<D>> for f64 {
    type Output = Scalar<D>;
    #[inline]
    fn mul(self, rhs: Scalar<D>) -> Scalar<D> {
        rhs * self
    }
}

impl<D: Dimension> Div<f64> for Scalar<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_canonical(self.0 / rhs)
    }
}

/// Same-dimension division yields a dimensionless ratio.
impl<D: Dimension> Div for Scalar<D> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl<D: Dimension> Sum for Scalar<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Scalar<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Scalar<D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Scalar::from_canonical)
    }
}

/// Serde helper persisting a scalar under its named canonical field.
///
/// Use this with the `#[serde(with = "...")]` attribute when the stored layout must name the canonical unit, e.g.
/// `{"kilometers": 1.5}` for a length or `{"kmSquared": 2.0}` for an area.
///
/// ```rust
/// use measures_core::Length;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Route {
///     #[serde(with = "measures_core::serde_with_field")]
///     distance: Length, // {"kilometers": 1.5}
///
///     detour: Length, // 0.25 (compact default)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_field {
    use super::*;
    use serde::de::{self, IgnoredAny, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Scalar<D>` as a struct with the single field `D::FIELD`.
    pub fn serialize<D, S>(quantity: &Scalar<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct(D::NAME, 1)?;
        state.serialize_field(D::FIELD, &quantity.canonical())?;
        state.end()
    }

    /// Deserializes a `Scalar<D>` from a map holding `D::FIELD`; other keys are skipped.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Scalar<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        struct FieldVisitor<D>(PhantomData<D>);

        impl<'de, D: Dimension> Visitor<'de> for FieldVisitor<D> {
            type Value = Scalar<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "struct {} with field `{}`", D::NAME, D::FIELD)
            }

            fn visit_map<V>(self, mut map: V) -> Result<Scalar<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key == D::FIELD {
                        if value.is_some() {
                            return Err(de::Error::duplicate_field(D::FIELD));
                        }
                        value = Some(map.next_value()?);
                    } else {
                        log::debug!("ignoring unknown field `{}` while reading {}", key, D::NAME);
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                value
                    .map(Scalar::from_canonical)
                    .ok_or_else(|| de::Error::missing_field(D::FIELD))
            }
        }

        deserializer.deserialize_map(FieldVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::Dimension;
    use approx::assert_abs_diff_eq;
    use core::cmp::Ordering;
    use proptest::prelude::*;

    #[derive(Dimension)]
    #[dimension(name = "Test", symbol = "t", field = "ticks")]
    enum TestDim {}

    type Ticks = super::Scalar<TestDim>;

    const TICK: Ticks = Ticks::from_canonical(1.0);
    const DOZEN: Ticks = Ticks::from_canonical(12.0);

    #[test]
    fn from_unit_and_to_are_ratios() {
        let q = Ticks::from_unit(3.0, DOZEN);
        assert_eq!(q.canonical(), 36.0);
        assert_eq!(q.to(TICK), 36.0);
        assert_eq!(q.to(DOZEN), 3.0);
    }

    #[test]
    fn any_instance_is_a_unit() {
        let half_dozen = Ticks::from_unit(0.5, DOZEN);
        let q = Ticks::from_unit(4.0, half_dozen);
        assert_eq!(q.to(DOZEN), 2.0);
    }

    #[test]
    fn conversion_to_zero_unit_is_not_finite() {
        assert!(DOZEN.to(Ticks::ZERO).is_infinite());
        assert!(Ticks::ZERO.to(Ticks::ZERO).is_nan());
    }

    #[test]
    fn arithmetic_with_raw_magnitudes() {
        assert_eq!((DOZEN + 3.0).canonical(), 15.0);
        assert_eq!((3.0 + DOZEN).canonical(), 15.0);
        assert_eq!((DOZEN - 2.0).canonical(), 10.0);
        assert_eq!((2.0 - DOZEN).canonical(), -10.0);
        assert_eq!((DOZEN * 2.0).canonical(), 24.0);
        assert_eq!((2.0 * DOZEN).canonical(), 24.0);
        assert_eq!((DOZEN / 4.0).canonical(), 3.0);
        assert_eq!(DOZEN / TICK, 12.0);
        assert_eq!((-DOZEN).canonical(), -12.0);
    }

    #[test]
    fn helpers() {
        assert_eq!((-DOZEN).abs(), DOZEN);
        assert_eq!(TICK.min(DOZEN), TICK);
        assert_eq!(TICK.max(DOZEN), DOZEN);
        assert_eq!(Ticks::default(), Ticks::ZERO);
        let total: Ticks = [TICK, TICK, DOZEN].into_iter().sum();
        assert_eq!(total.canonical(), 14.0);
    }

    #[test]
    fn eq_within_is_strict() {
        assert!(DOZEN.eq_within(DOZEN, TICK));
        assert!(DOZEN.eq_within(DOZEN + 0.5, TICK));
        assert!(!DOZEN.eq_within(DOZEN + 1.0, TICK));
        assert!(DOZEN.eq_within(DOZEN + 0.5, -TICK));
    }

    #[test]
    fn ordering() {
        assert!(TICK < DOZEN);
        assert_eq!(TICK.total_cmp(&DOZEN), Ordering::Less);
        assert_eq!(DOZEN.total_cmp(&DOZEN), Ordering::Equal);
        assert_eq!(
            Ticks::from_canonical(f64::NAN).partial_cmp(&TICK),
            None
        );
    }

    #[test]
    fn debug_names_the_dimension() {
        assert_eq!(format!("{:?}", DOZEN), "Test(12.0 ticks)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_raw_magnitude() {
        let json = serde_json::to_string(&DOZEN).unwrap();
        assert_eq!(json, "12.0");
        let back: Ticks = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DOZEN);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn named_field_layout() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "crate::serde_with_field")]
            q: Ticks,
        }

        let json = serde_json::to_string(&Wrapper { q: DOZEN }).unwrap();
        assert_eq!(json, r#"{"q":{"ticks":12.0}}"#);

        let back: Wrapper = serde_json::from_str(r#"{"q":{"note":"x","ticks":2.5}}"#).unwrap();
        assert_abs_diff_eq!(back.q.canonical(), 2.5);

        assert!(serde_json::from_str::<Wrapper>(r#"{"q":{"other":1.0}}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"q":{"ticks":1.0,"ticks":2.0}}"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_addition_commutes(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let (a, b) = (Ticks::from_canonical(a), Ticks::from_canonical(b));
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!(a - b, -(b - a));
            prop_assert!(((a + b) - b).eq_within(a, Ticks::from_canonical(1e-6)));
        }

        #[test]
        fn prop_scaling_roundtrip(a in -1e6..1e6f64, s in 1e-3..1e3f64) {
            let q = Ticks::from_canonical(a);
            prop_assert!((q * s / s).eq_within(q, Ticks::from_canonical(1e-6)));
        }

        #[test]
        fn prop_order_matches_magnitudes(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let (qa, qb) = (Ticks::from_canonical(a), Ticks::from_canonical(b));
            prop_assert_eq!(qa.total_cmp(&qb), a.total_cmp(&b));
        }
    }
}
