//! Severity normalization: raw instrument score to percent of worst possible.

use crate::models::Polarity;

/// Native scale of every lower-is-worse measure. The inversion below is fixed
/// to this scale, and cohort construction rejects inverted measures on any
/// other range.
pub const INVERTED_SCALE_MAX: f64 = 100.0;

/// Normalize `raw` to 0–100, where 100 is the worst score on the instrument.
///
/// No clamping: a raw score outside the instrument's range yields a value
/// outside 0–100.
pub fn severity(polarity: Polarity, max_scale: f64, raw: f64) -> f64 {
    match polarity {
        Polarity::LowerIsWorse => (INVERTED_SCALE_MAX - raw) / INVERTED_SCALE_MAX * 100.0,
        Polarity::HigherIsWorse => raw / max_scale * 100.0,
    }
}
