//! Macros for the cross-dimension operator algebra.

/// Implements `lhs * rhs -> out` for single-magnitude quantities whose canonical units multiply exactly
/// (km × km = km², km² × km = km³).
macro_rules! impl_canonical_product {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl ::core::ops::Mul<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn mul(self, rhs: $rhs) -> $out {
                <$out>::from_canonical(self.canonical() * rhs.canonical())
            }
        }
    };
}

/// Implements `lhs / rhs -> out` for single-magnitude quantities whose canonical units divide exactly
/// (km³ / km² = km).
macro_rules! impl_canonical_quotient {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl ::core::ops::Div<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn div(self, rhs: $rhs) -> $out {
                <$out>::from_canonical(self.canonical() / rhs.canonical())
            }
        }
    };
}

/// Implements both orders of `quotient * denominator -> numerator` for a [`Compound`](crate::Compound) quotient.
///
/// The stored numerator is rescaled by `rhs / stored_denominator`, which leaves `(n / d) * d == n` exact.
macro_rules! impl_quotient_undo {
    ($quotient:ty, $denominator:ty => $numerator:ty) => {
        impl ::core::ops::Mul<$denominator> for $quotient {
            type Output = $numerator;
            #[inline]
            fn mul(self, rhs: $denominator) -> $numerator {
                let (numerator, denominator) = self.components();
                numerator * (rhs / denominator)
            }
        }

        impl ::core::ops::Mul<$quotient> for $denominator {
            type Output = $numerator;
            #[inline]
            fn mul(self, rhs: $quotient) -> $numerator {
                rhs * self
            }
        }
    };
}

/// Implements `numerator / denominator -> quotient`, storing the pair as given.
macro_rules! impl_quotient_of {
    ($numerator:ty, $denominator:ty => $quotient:ty) => {
        impl ::core::ops::Div<$denominator> for $numerator {
            type Output = $quotient;
            #[inline]
            fn div(self, rhs: $denominator) -> $quotient {
                <$quotient>::from_components(self, rhs)
            }
        }
    };
}

/// Implements both orders of `first * second -> product` for a [`Compound`](crate::Compound) product.
macro_rules! impl_product_of {
    ($first:ty, $second:ty => $product:ty) => {
        impl ::core::ops::Mul<$second> for $first {
            type Output = $product;
            #[inline]
            fn mul(self, rhs: $second) -> $product {
                <$product>::from_components(self, rhs)
            }
        }

        impl ::core::ops::Mul<$first> for $second {
            type Output = $product;
            #[inline]
            fn mul(self, rhs: $first) -> $product {
                <$product>::from_components(rhs, self)
            }
        }
    };
}

/// Implements `product / first -> second` and `product / second -> first` for a [`Compound`](crate::Compound)
/// product, rescaling the kept factor by the ratio of the removed one.
macro_rules! impl_product_undo {
    ($product:ty, $first:ty, $second:ty) => {
        impl ::core::ops::Div<$second> for $product {
            type Output = $first;
            #[inline]
            fn div(self, rhs: $second) -> $first {
                let (first, second) = self.components();
                first * (second / rhs)
            }
        }

        impl ::core::ops::Div<$first> for $product {
            type Output = $second;
            #[inline]
            fn div(self, rhs: $first) -> $second {
                let (first, second) = self.components();
                second * (first / rhs)
            }
        }
    };
}

pub(crate) use impl_canonical_product;
pub(crate) use impl_canonical_quotient;
pub(crate) use impl_product_of;
pub(crate) use impl_product_undo;
pub(crate) use impl_quotient_of;
pub(crate) use impl_quotient_undo;
