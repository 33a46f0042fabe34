//! statistical_tests::distributions — reference distributions for the tests.
//!
//! Purpose
//! -------
//! Give the t-test and F-test a narrow capability, [`ReferenceDistribution`],
//! for the only two operations they need: the cumulative distribution
//! function and its inverse. The concrete Student-t and Fisher–Snedecor
//! distributions are backed by `statrs`, and this is the only module that
//! names `statrs` types.
//!
//! Key behaviors
//! -------------
//! - [`TDistribution::new`] builds a standard Student-t with `dof` degrees
//!   of freedom.
//! - [`FDistribution::new`] builds an F(`dof1`, `dof2`) distribution.
//! - Both constructors reject non-positive or non-finite degrees of freedom
//!   with [`TestError::InvalidDegreesOfFreedom`], mapping the corresponding
//!   `statrs` constructor errors.
//!
//! Invariants & assumptions
//! ------------------------
//! - `quantile(p)` is only called with `p ∈ (0, 1)`; callers validate
//!   `alpha` before deriving tail probabilities from it.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against tabulated critical values and the identity
//!   F(1, ν)₁₋α = (t(ν)₁₋α/2)².

use crate::statistical_tests::errors::{TestError, TestResult};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Minimal capability a reference distribution must offer to the tests.
pub trait ReferenceDistribution {
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Inverse CDF: the value x with P(X ≤ x) = p.
    fn quantile(&self, p: f64) -> f64;

    /// Value exceeded with probability `tail`, i.e. `quantile(1 − tail)`.
    fn upper_critical_value(&self, tail: f64) -> f64 {
        self.quantile(1.0 - tail)
    }
}

/// Standard Student-t distribution (location 0, scale 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TDistribution {
    inner: StudentsT,
}

impl TDistribution {
    /// Build a Student-t with `dof` degrees of freedom.
    ///
    /// Errors
    /// ------
    /// - `TestError::InvalidDegreesOfFreedom(dof)` unless `dof` is finite
    ///   and strictly positive.
    pub fn new(dof: f64) -> TestResult<Self> {
        check_dof(dof)?;
        let inner =
            StudentsT::new(0.0, 1.0, dof).map_err(|_| TestError::InvalidDegreesOfFreedom(dof))?;
        Ok(TDistribution { inner })
    }
}

impl ReferenceDistribution for TDistribution {
    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }
}

/// Fisher–Snedecor F distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FDistribution {
    inner: FisherSnedecor,
}

impl FDistribution {
    /// Build an F distribution with numerator `dof1` and denominator `dof2`
    /// degrees of freedom.
    ///
    /// Errors
    /// ------
    /// - `TestError::InvalidDegreesOfFreedom` carrying the first offending
    ///   value.
    pub fn new(dof1: f64, dof2: f64) -> TestResult<Self> {
        check_dof(dof1)?;
        check_dof(dof2)?;
        let inner = FisherSnedecor::new(dof1, dof2)
            .map_err(|_| TestError::InvalidDegreesOfFreedom(dof1.min(dof2)))?;
        Ok(FDistribution { inner })
    }
}

impl ReferenceDistribution for FDistribution {
    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }
}

#[inline]
fn check_dof(dof: f64) -> TestResult<()> {
    if dof.is_finite() && dof > 0.0 {
        Ok(())
    } else {
        Err(TestError::InvalidDegreesOfFreedom(dof))
    }
}
