//! regression — ordinary least squares for a single predictor.
//!
//! Purpose
//! -------
//! Implement the closed-form OLS fit of y = β₀ + β₁x + ε together with the
//! sums of squares it is built from and the ANOVA decomposition of the
//! response variation. Every formula rounds its result to `ndec` decimals
//! and recomputes its inputs from the raw data, so results are a pure
//! function of `(x, y, ndec)`.
//!
//! Key behaviors
//! -------------
//! - [`sums`]: S_xx, S_xy, and SST.
//! - [`coefficients`]: β̂₁ = S_xy / S_xx, β̂₀ = ȳ − β̂₁x̄, and fitted values.
//! - [`decomposition`]: SSR, SSE, MSR, and MSE.
//! - [`data::Sample`] and [`options::RegressionOptions`] wrap the pipeline
//!   for callers that prefer a validated carrier and one options value.
//! - [`validation`] and [`errors`] hold the shared input guards and the
//!   [`RegressionError`] type.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite and `x.len() == y.len()`; statistics that divide by
//!   n − 2 require n ≥ 3.
//! - Denominators that round to zero are reported, never divided by.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests` builds the t-test, F-test, and ANOVA table on top
//!   of these formulas.

pub mod coefficients;
pub mod data;
pub mod decomposition;
pub mod errors;
pub mod options;
pub mod rounding;
pub mod sums;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::coefficients::{beta0, beta1, predicted};
pub use self::data::Sample;
pub use self::decomposition::{mse, msr, sse, ssr};
pub use self::errors::{RegressionError, RegressionResult};
pub use self::options::RegressionOptions;
pub use self::rounding::{round_to, DEFAULT_NDEC};
pub use self::sums::{sst, sxx, sxy};
pub use self::validation::{validate_pair, validate_series, MIN_INFERENCE_LEN};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::data::Sample;
    pub use super::errors::{RegressionError, RegressionResult};
    pub use super::options::RegressionOptions;
}
