//! Core type system for strongly typed physical quantities.
//!
//! `measures-core` models a fixed family of quantities:
//!
//! - A single-magnitude quantity is a [`Scalar<D>`], one `f64` in the canonical unit of the dimension `D`
//!   ([`Duration`], [`Mass`], [`Length`], [`Temperature`], [`Area`], [`Volume`]).
//! - A derived quantity is a [`Compound<D>`], which keeps its two component quantities instead of flattening them
//!   ([`Speed`], [`Density`], [`Momentum`], [`VolumetricFlowRate`]).
//! - Unit constants are ordinary values (`Length::KILOMETER`), so any value can be used as a unit.
//! - The cross-type operators encode dimensional analysis: `Length * Length` is an [`Area`], `Length / Duration` a
//!   [`Speed`], `Momentum / Mass` a [`Speed`] again.
//!
//! Most users should depend on `measures` (the facade crate).
//!
//! # Quick start
//!
//! ```rust
//! use measures_core::{Duration, Length, Speed};
//!
//! let d = Length::from_unit(100.0, Length::METER);
//! let t = Duration::from_unit(20.0, Duration::SECOND);
//! let v = d / t;
//! assert!((v.to(Speed::METER_PER_SECOND) - 5.0).abs() < 1e-12);
//! assert_eq!(v.to_string(), "5.00m/s");
//! ```
//!
//! Incompatible dimensions do not mix:
//!
//! ```compile_fail
//! use measures_core::{Duration, Length};
//!
//! let _ = Length::KILOMETER + Duration::SECOND;
//! ```
//!
//! # Feature flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every quantity. Scalars persist as their raw canonical `f64`
//!   (or as `{"<field>": value}` through [`serde_with_field`]); compounds persist both components by name.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Conversions and
//! arithmetic are pure `f64` computations; they do not panic on their own, but they follow IEEE-754 behavior (NaN and
//! infinities propagate, e.g. when converting to a zero unit).
#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod compound;
mod dimension;
mod macros;
mod scalar;

pub mod si;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use compound::Compound;
pub use dimension::{CompoundDimension, Dimension, Measure, Operation};
pub use scalar::Scalar;

/// Derive macro implementing [`Dimension`] for an empty enum from a `#[dimension(name, symbol, field)]` attribute.
///
/// The expansion refers to `crate::Dimension`, so it is meant for crates exposing the same crate-root API.
pub use measures_derive::Dimension;

#[cfg(feature = "serde")]
pub use scalar::serde_with_field;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::area;
pub use units::density;
pub use units::duration;
pub use units::flow;
pub use units::length;
pub use units::mass;
pub use units::momentum;
pub use units::speed;
pub use units::temperature;
pub use units::volume;

pub use units::area::Area;
pub use units::density::Density;
pub use units::duration::Duration;
pub use units::flow::VolumetricFlowRate;
pub use units::length::Length;
pub use units::mass::Mass;
pub use units::momentum::Momentum;
pub use units::speed::Speed;
pub use units::temperature::Temperature;
pub use units::volume::Volume;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Cross-type algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_chain_to_volume_and_back() {
        let side = Length::from_unit(3.0, Length::METER);
        let area = side * side;
        let volume = area * side;
        assert_relative_eq!(volume.to(Volume::CUBIC_METER), 27.0, max_relative = 1e-12);
        assert_relative_eq!((volume / side).to(Area::SQUARE_METER), 9.0, max_relative = 1e-12);
        assert_relative_eq!((volume / area).to(Length::METER), 3.0, max_relative = 1e-12);
        assert_relative_eq!((area / side).to(Length::METER), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn density_and_flow_share_volume() {
        let water = Mass::from_unit(1_000.0, Mass::KILOGRAM) / Volume::CUBIC_METER;
        let flow = Volume::from_unit(2.0, Volume::CUBIC_METER) / Duration::SECOND;
        let mass_per_minute = water * (flow * Duration::MINUTE);
        assert_relative_eq!(mass_per_minute.to(Mass::KILOGRAM), 120_000.0, max_relative = 1e-12);
    }

    #[test]
    fn momentum_through_speed() {
        let v = Length::from_unit(10.0, Length::METER) / Duration::SECOND;
        let p = Mass::from_unit(3.0, Mass::KILOGRAM) * v;
        assert_relative_eq!(p.to(Momentum::KILOGRAM_METER_PER_SECOND), 30.0, max_relative = 1e-12);
        assert_relative_eq!((p / Mass::KILOGRAM).to(Speed::METER_PER_SECOND), 30.0, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Debug output
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn debug_shows_components() {
        assert_eq!(format!("{:?}", Length::KILOMETER), "Length(1.0 kilometers)");
        assert_eq!(
            format!("{:?}", Speed::METER_PER_SECOND),
            "Speed { length: Length(0.001 kilometers), duration: Duration(1.0 seconds) }"
        );
    }
}
