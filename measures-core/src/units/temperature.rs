//! Thermodynamic temperatures.
//!
//! Storage is always kelvin and the arithmetic operators act on kelvin directly. The Celsius and Fahrenheit scales
//! are affine, so their offsets live only in the named constructors and accessors below and are never usable as a
//! `unit` argument.
//!
//! ```rust
//! use measures_core::Temperature;
//!
//! assert_eq!(Temperature::from_celsius(0.0).to_kelvin(), 273.15);
//! assert!(Temperature::from_fahrenheit(32.0).to_celsius().abs() < 0.01);
//! ```

use crate::{Dimension, Scalar};
use core::fmt;

/// Dimension tag for temperature.
#[derive(Dimension)]
#[dimension(name = "Temperature", symbol = "K", field = "kelvin")]
pub enum TemperatureDim {}

/// A temperature, stored in kelvin.
pub type Temperature = Scalar<TemperatureDim>;

const CELSIUS_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 459.67;

impl Scalar<TemperatureDim> {
    /// One kelvin.
    pub const KELVIN: Self = Self::from_canonical(1.0);
    /// 0 K.
    pub const ABSOLUTE_ZERO: Self = Self::from_canonical(0.0);
    /// Melting point of water at one atmosphere.
    pub const FREEZING: Self = Self::from_canonical(CELSIUS_OFFSET);
    /// Boiling point of water at one atmosphere.
    pub const BOILING: Self = Self::from_canonical(373.15);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[("K", Self::KELVIN)];

    /// Creates a temperature from kelvin.
    #[inline]
    pub const fn from_kelvin(kelvin: f64) -> Self {
        Self::from_canonical(kelvin)
    }

    /// Creates a temperature from degrees Celsius.
    #[inline]
    pub fn from_celsius(celsius: f64) -> Self {
        Self::from_canonical(celsius + CELSIUS_OFFSET)
    }

    /// Creates a temperature from degrees Fahrenheit.
    #[inline]
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self::from_canonical((fahrenheit + FAHRENHEIT_OFFSET) * 5.0 / 9.0)
    }

    /// Temperature in kelvin.
    #[inline]
    pub const fn to_kelvin(self) -> f64 {
        self.canonical()
    }

    /// Temperature in degrees Celsius.
    #[inline]
    pub fn to_celsius(self) -> f64 {
        self.canonical() - CELSIUS_OFFSET
    }

    /// Temperature in degrees Fahrenheit.
    #[inline]
    pub fn to_fahrenheit(self) -> f64 {
        self.canonical() * 9.0 / 5.0 - FAHRENHEIT_OFFSET
    }

    /// `"293.15K"`.
    pub fn to_string_kelvin(&self) -> String {
        format!("{:.2}K", self.to_kelvin())
    }

    /// `"20.00°C"`.
    pub fn to_string_celsius(&self) -> String {
        format!("{:.2}°C", self.to_celsius())
    }

    /// `"68.00°F"`.
    pub fn to_string_fahrenheit(&self) -> String {
        format!("{:.2}°F", self.to_fahrenheit())
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_kelvin())
    }
}
