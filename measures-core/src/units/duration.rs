//! Durations.
//!
//! The canonical unit is the SI second. Civil units use the conventional mapping `1 day = 86_400 s` (leap seconds
//! ignored) and the year is the Julian year of 365.25 days, the same year the light-year is defined with.
//!
//! ```rust
//! use measures_core::Duration;
//!
//! let half_hour = Duration::from_unit(0.5, Duration::HOUR);
//! assert_eq!(half_hour.to(Duration::SECOND), 1_800.0);
//! assert_eq!(half_hour.to_string_minutes(), "30.00 minutes");
//! ```

use crate::si::{format_si, SiFormat};
use crate::{Dimension, Scalar};
use core::fmt;

/// Dimension tag for time.
#[derive(Dimension)]
#[dimension(name = "Duration", symbol = "s", field = "seconds")]
pub enum TimeDim {}

/// A span of time, stored in seconds.
pub type Duration = Scalar<TimeDim>;

/// Seconds per mean solar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

impl Scalar<TimeDim> {
    /// One nanosecond.
    pub const NANOSECOND: Self = Self::from_canonical(1e-9);
    /// One microsecond.
    pub const MICROSECOND: Self = Self::from_canonical(1e-6);
    /// One millisecond.
    pub const MILLISECOND: Self = Self::from_canonical(1e-3);
    /// One second.
    pub const SECOND: Self = Self::from_canonical(1.0);
    /// One minute.
    pub const MINUTE: Self = Self::from_canonical(60.0);
    /// One hour.
    pub const HOUR: Self = Self::from_canonical(3_600.0);
    /// One mean solar day.
    pub const DAY: Self = Self::from_canonical(SECONDS_PER_DAY);
    /// One week.
    pub const WEEK: Self = Self::from_canonical(7.0 * SECONDS_PER_DAY);
    /// One Julian year.
    pub const YEAR: Self = Self::from_canonical(DAYS_PER_YEAR * SECONDS_PER_DAY);
    /// Ten years.
    pub const DECADE: Self = Self::from_canonical(10.0 * DAYS_PER_YEAR * SECONDS_PER_DAY);
    /// A hundred years.
    pub const CENTURY: Self = Self::from_canonical(100.0 * DAYS_PER_YEAR * SECONDS_PER_DAY);
    /// A thousand years.
    pub const MILLENNIUM: Self = Self::from_canonical(1_000.0 * DAYS_PER_YEAR * SECONDS_PER_DAY);

    /// Units offered by value editors, in display order.
    pub const DISPLAY_UNITS: &'static [(&'static str, Self)] = &[
        ("ns", Self::NANOSECOND),
        ("µs", Self::MICROSECOND),
        ("ms", Self::MILLISECOND),
        ("s", Self::SECOND),
        ("min", Self::MINUTE),
        ("h", Self::HOUR),
        ("d", Self::DAY),
        ("wk", Self::WEEK),
        ("y", Self::YEAR),
        ("dec", Self::DECADE),
        ("c", Self::CENTURY),
        ("ky", Self::MILLENNIUM),
    ];

    /// Forced nanoseconds, e.g. `"1500.00 ns"`.
    pub fn to_string_nanoseconds(&self) -> String {
        format_si(self.canonical(), TimeDim::SYMBOL, SiFormat::fixed(-9))
    }

    /// Forced microseconds.
    pub fn to_string_microseconds(&self) -> String {
        format_si(self.canonical(), TimeDim::SYMBOL, SiFormat::fixed(-6))
    }

    /// Forced milliseconds.
    pub fn to_string_milliseconds(&self) -> String {
        format_si(self.canonical(), TimeDim::SYMBOL, SiFormat::fixed(-3))
    }

    /// Forced seconds.
    pub fn to_string_seconds(&self) -> String {
        format_si(self.canonical(), TimeDim::SYMBOL, SiFormat::fixed(0))
    }

    /// `"2.00 minutes"`, `"1.00 minute"`.
    pub fn to_string_minutes(&self) -> String {
        self.format_civil(Self::MINUTE, "minute", "s", "")
    }

    /// `"2.00 hours"`, `"1.00 hour"`.
    pub fn to_string_hours(&self) -> String {
        self.format_civil(Self::HOUR, "hour", "s", "")
    }

    /// `"2.00 days"`, `"1.00 day"`.
    pub fn to_string_days(&self) -> String {
        self.format_civil(Self::DAY, "day", "s", "")
    }

    /// `"2.00 weeks"`, `"1.00 week"`.
    pub fn to_string_weeks(&self) -> String {
        self.format_civil(Self::WEEK, "week", "s", "")
    }

    /// `"2.00 years"`, `"1.00 year"`.
    pub fn to_string_years(&self) -> String {
        self.format_civil(Self::YEAR, "year", "s", "")
    }

    /// `"2.00 decades"`, `"1.00 decade"`.
    pub fn to_string_decades(&self) -> String {
        self.format_civil(Self::DECADE, "decade", "s", "")
    }

    /// `"2.00 centuries"`, `"1.00 century"`.
    pub fn to_string_centuries(&self) -> String {
        self.format_civil(Self::CENTURY, "centur", "ies", "y")
    }

    /// `"2.00 millennia"`, `"1.00 millennium"`.
    pub fn to_string_millennia(&self) -> String {
        self.format_civil(Self::MILLENNIUM, "millenni", "a", "um")
    }

    /// The singular form is used only when the rendered number is exactly `1.00`.
    fn format_civil(&self, unit: Self, stem: &str, plural: &str, singular: &str) -> String {
        let number = format!("{:.2}", self.to(unit));
        let suffix = if number == "1.00" { singular } else { plural };
        format!("{} {}{}", number, stem, suffix)
    }
}

/// Best-fitting SI prefix over seconds, e.g. `"1.50 ms"`.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_si(self.canonical(), TimeDim::SYMBOL, SiFormat::new()))
    }
}
