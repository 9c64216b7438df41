//! Predefined quantity modules, one per dimension.
//!
//! ## Modules
//!
//! - [`duration`]: time spans (second is canonical).
//! - [`mass`]: masses (kilogram is canonical) including astronomical masses.
//! - [`length`]: lengths (kilometre is canonical) including astronomical distances.
//! - [`temperature`]: thermodynamic temperature (kelvin) with Celsius/Fahrenheit helpers.
//! - [`area`]: `Length × Length`, stored in km².
//! - [`volume`]: `Area × Length`, stored in km³.
//! - [`speed`]: `Length / Duration` pair.
//! - [`density`]: `Mass / Volume` pair.
//! - [`momentum`]: `Mass × Speed` pair.
//! - [`flow`]: `Volume / Duration` pair.

pub mod area;
pub mod density;
pub mod duration;
pub mod flow;
pub mod length;
pub mod mass;
pub mod momentum;
pub mod speed;
pub mod temperature;
pub mod volume;
