//! Strongly typed physical quantities and conversions.
//!
//! `measures` is the user-facing crate in this workspace. It re-exports the full API from `measures-core`: the
//! scalar quantities ([`Duration`], [`Mass`], [`Length`], [`Temperature`], [`Area`], [`Volume`]), the derived
//! quantities ([`Speed`], [`Density`], [`Momentum`], [`VolumetricFlowRate`]) and the SI formatting helper.
//!
//! Every value stores its magnitude in one canonical unit; unit constants are plain values of the same type, so
//! `Length::from_unit(3.0, Length::METER)` and `length.to(Length::LIGHT_YEAR)` are the whole conversion API.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Encodes the dimensional algebra between the supported quantities in operator impls (`Length / Duration` is a
//!   `Speed`, `Speed * Duration` is a `Length` again).
//! - Human readable output with SI prefixes (`"1.50 km"`) or fixed units (`"1.00km/h"`).
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary unit algebra: only the listed quantities and their operator identities exist.
//! - Exact arithmetic: quantities are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use measures::{Duration, Length, Speed};
//!
//! let v = Length::KILOMETER / Duration::HOUR;
//! assert_eq!(v.to_string_kilometers_per_hour(), "1.00km/h");
//! assert!((v.to(Speed::METER_PER_SECOND) - 1.0 / 3.6).abs() < 1e-12);
//!
//! let trip = v * Duration::from_unit(90.0, Duration::MINUTE);
//! assert_eq!(trip.to_string(), "1.50 km");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measures::{Mass, Volume};
//!
//! let _ = Mass::KILOGRAM * Volume::LITER; // only Mass / Volume is a Density
//! ```
//!
//! # Feature flags
//!
//! - `serde` (default): serialization support; scalars persist as their raw canonical `f64`, compounds as a struct of
//!   both components. Use [`serde_with_field`] for the `{"kilometers": 1.0}` layout.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Conversions and
//! arithmetic are pure `f64` computations; they do not panic on their own, but they follow IEEE-754 behavior (NaN and
//! infinities propagate according to the underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use measures_core::*;
