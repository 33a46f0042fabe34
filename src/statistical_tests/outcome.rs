//! statistical_tests::outcome — result record shared by the t- and F-tests.

/// TestOutcome — outcome of a single hypothesis test on the fitted line.
///
/// Purpose
/// -------
/// Carry the sample size, the observed statistic, the critical value at the
/// requested significance level, the p-value, and the reject decision, so
/// that callers can report a test without recomputing any formula.
///
/// Fields
/// ------
/// - `n`: `usize`
///   Sample size the test was run on.
/// - `statistic`: `f64`
///   Observed test statistic (t₀ or F₀), rounded to the working precision.
/// - `critical_value`: `f64`
///   Critical value of the reference distribution, rounded likewise.
/// - `p_value`: `f64`
///   Unrounded p-value of the statistic.
/// - `reject`: `bool`
///   Whether H₀: β₁ = 0 is rejected. The t-test compares |t₀| with the
///   critical value; the F-test compares the p-value with `alpha`.
///
/// Invariants
/// ----------
/// - `p_value` lies in [0, 1].
/// - The fields are mutually consistent with the decision rule of the test
///   that produced them; the record never re-derives `reject`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TestOutcome {
    n: usize,
    statistic: f64,
    critical_value: f64,
    p_value: f64,
    reject: bool,
}

impl TestOutcome {
    pub(crate) fn new(
        n: usize, statistic: f64, critical_value: f64, p_value: f64, reject: bool,
    ) -> Self {
        TestOutcome { n, statistic, critical_value, p_value, reject }
    }

    /// Sample size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Observed test statistic.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Critical value at the requested significance level.
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// p-value of [`statistic`](Self::statistic).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Whether the null hypothesis of a zero slope is rejected.
    pub fn reject(&self) -> bool {
        self.reject
    }
}

impl std::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n = {}, statistic = {}, critical value = {}, p-value = {:e}, reject H0: {}",
            self.n, self.statistic, self.critical_value, self.p_value, self.reject
        )
    }
}
