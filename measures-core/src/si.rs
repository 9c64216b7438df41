//! SI-prefix formatting shared by every quantity's `Display` and named formatters.
//!
//! A magnitude stored in some canonical unit (kilometres, kilograms, seconds …) is rendered against the base unit
//! symbol (`m`, `g`, `s` …) using the largest prefix that keeps the shown number at or above one.
//!
//! ```rust
//! use measures_core::si::{format_si, SiFormat};
//!
//! // 1.5 km stored in kilometres, rendered against metres.
//! let f = SiFormat::new().exponent(3).min_exponent(0);
//! assert_eq!(format_si(1.5, "m", f), "1.50 km");
//! assert_eq!(format_si(0.5, "m", f), "500.00 m");
//! ```

/// Prefixes from yocto to yotta, indexed by `(exponent + 24) / 3`.
const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

const MIN_EXPONENT: i32 = -24;
const MAX_EXPONENT: i32 = 24;

/// Options for [`format_si`].
///
/// `exponent` is the power of ten of the stored unit relative to the base symbol (3 for kilometres rendered as
/// metres). `min_exponent`/`max_exponent` bound the prefixes that may be picked; setting both to the same value
/// forces a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiFormat {
    decimals: usize,
    exponent: i32,
    min_exponent: i32,
    max_exponent: i32,
}

impl SiFormat {
    /// Two decimals, value already in the base unit, any prefix from yocto to yotta.
    pub const fn new() -> Self {
        Self {
            decimals: 2,
            exponent: 0,
            min_exponent: MIN_EXPONENT,
            max_exponent: MAX_EXPONENT,
        }
    }

    /// Forces the given prefix exponent.
    pub const fn fixed(exponent: i32) -> Self {
        Self::new().min_exponent(exponent).max_exponent(exponent)
    }

    /// Number of decimals shown.
    pub const fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Power of ten of the stored unit relative to the base symbol.
    pub const fn exponent(mut self, exponent: i32) -> Self {
        self.exponent = exponent;
        self
    }

    /// Smallest prefix exponent that may be picked (rounded up to a multiple of three).
    pub const fn min_exponent(mut self, exponent: i32) -> Self {
        self.min_exponent = clamp_exponent(exponent);
        self
    }

    /// Largest prefix exponent that may be picked (rounded up to a multiple of three).
    pub const fn max_exponent(mut self, exponent: i32) -> Self {
        self.max_exponent = clamp_exponent(exponent);
        self
    }
}

impl Default for SiFormat {
    fn default() -> Self {
        Self::new()
    }
}

const fn clamp_exponent(exponent: i32) -> i32 {
    let e = if exponent < MIN_EXPONENT {
        MIN_EXPONENT
    } else if exponent > MAX_EXPONENT {
        MAX_EXPONENT
    } else {
        exponent
    };
    // round toward +inf onto the prefix grid
    e + (3 - e.rem_euclid(3)) % 3
}

/// Multiplies by `10^power`, dividing for negative powers so exact powers of ten stay exact.
fn shift(value: f64, power: i32) -> f64 {
    if power >= 0 {
        value * 10f64.powi(power)
    } else {
        value / 10f64.powi(-power)
    }
}

/// Rounds to `decimals` places the way the rendered number will show it.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals.min(i32::MAX as usize) as i32);
    (value * scale).round() / scale
}

/// Picks the prefix exponent for `value` (expressed in the stored unit).
///
/// The comparison uses the rounded number, so `0.9999999 km` shows as `1.00 km` rather than `1000.00 m`.
fn select_exponent(value: f64, format: SiFormat) -> i32 {
    let (lo, hi) = (format.min_exponent, format.max_exponent.max(format.min_exponent));

    if value == 0.0 || !value.is_finite() {
        return 0.clamp(lo, hi);
    }

    let magnitude = value.abs();
    let mut exponent = hi;
    while exponent > lo {
        if round_to(shift(magnitude, format.exponent - exponent), format.decimals) >= 1.0 {
            return exponent;
        }
        exponent -= 3;
    }
    lo
}

/// Renders `value` (stored with `format.exponent` relative to `symbol`) with the best-fitting SI prefix.
pub fn format_si(value: f64, symbol: &str, format: SiFormat) -> String {
    let exponent = select_exponent(value, format);
    let shown = shift(value, format.exponent - exponent);
    let prefix = PREFIXES[((exponent - MIN_EXPONENT) / 3) as usize];
    format!("{:.*} {}{}", format.decimals, shown, prefix, symbol)
}
