//! Per-stage decimal rounding.
//!
//! Every formula in this crate rounds its own output to `ndec` decimals and
//! downstream formulas consume the rounded value, so precision loss
//! compounds along the dependency chain. The rounding rule matches NumPy's
//! `round`: scale by a power of ten, round half to even, scale back.

/// Default number of decimal digits applied at each stage.
pub const DEFAULT_NDEC: i32 = 4;

/// Round `value` to `ndec` decimal digits, ties to even.
///
/// Negative `ndec` rounds to tens, hundreds, and so on. Values that would
/// overflow when scaled are returned unchanged.
#[inline]
pub fn round_to(value: f64, ndec: i32) -> f64 {
    if ndec >= 0 {
        let scale = 10f64.powi(ndec);
        let scaled = value * scale;
        if !scaled.is_finite() {
            return value;
        }
        scaled.round_ties_even() / scale
    } else {
        let scale = 10f64.powi(-ndec);
        (value / scale).round_ties_even() * scale
    }
}
