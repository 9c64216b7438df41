//! Volumetric flow rates, kept as a `(Volume, Duration)` pair.

use crate::dimension::{CompoundDimension, Operation};
use crate::macros::{impl_quotient_of, impl_quotient_undo};
use crate::units::duration::Duration;
use crate::units::volume::Volume;
use crate::Compound;
use core::fmt;

/// Dimension tag for volumetric flow: volume over duration.
pub enum FlowDim {}

impl CompoundDimension for FlowDim {
    type First = Volume;
    type Second = Duration;

    const OPERATION: Operation = Operation::Quotient;
    const NAME: &'static str = "VolumetricFlowRate";
    const FIELDS: [&'static str; 2] = ["volume", "duration"];
    const REFERENCE: (Volume, Duration) = (Volume::CUBIC_METER, Duration::SECOND);
}

/// A volumetric flow rate.
pub type VolumetricFlowRate = Compound<FlowDim>;

impl Compound<FlowDim> {
    /// No flow.
    pub const ZERO: Self = Self::from_components(Volume::ZERO, Duration::SECOND);
    /// Largest finite flow rate in cubic metres per second.
    pub const MAX: Self = Self::from_components(Volume::from_canonical(Volume::CUBIC_METER.canonical() * f64::MAX), Duration::SECOND);
    /// One cubic metre per second (reference unit).
    pub const CUBIC_METER_PER_SECOND: Self = Self::from_components(Volume::CUBIC_METER, Duration::SECOND);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[("m³/s", Self::CUBIC_METER_PER_SECOND)];

    /// `"1.00m³/s"`.
    pub fn to_string_cubic_meters_per_second(&self) -> String {
        format!("{:.2}m³/s", self.to(Self::CUBIC_METER_PER_SECOND))
    }
}

impl fmt::Display for VolumetricFlowRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_cubic_meters_per_second())
    }
}

impl_quotient_of!(Volume, Duration => VolumetricFlowRate);
impl_quotient_undo!(VolumetricFlowRate, Duration => Volume);
