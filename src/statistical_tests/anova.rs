//! statistical_tests::anova — analysis-of-variance table for the fitted line.
//!
//! Purpose
//! -------
//! Assemble the sum-of-squares decomposition and the F-test into the classic
//! three-row ANOVA table (regression, residual, total) that reporting
//! front-ends print or convert into data frames.
//!
//! Key behaviors
//! -------------
//! - [`anova`] runs the F-test once and fills:
//!   - regression: SSR, df = 1, MSR, F₀, p-value, reject;
//!   - residual: SSE, df = n − 2, MSE;
//!   - total: SST, df = n − 1.
//! - Cells that do not apply to a row are `None`.
//! - [`AnovaTable`] implements `Display` as a fixed-width text table using
//!   the [`ANOVA_COLUMNS`] header; p-values are rendered with
//!   [`format_p_value`] (two-digit mantissa, signed two-digit exponent).
//!
//! Invariants & assumptions
//! ------------------------
//! - The regression row's F statistic equals `f_score(x, y, ndec)` and its
//!   decision equals `f_test(x, y, alpha, ndec).reject()`.
//! - Every numeric cell is produced by the same per-stage rounded formulas
//!   as the free functions; the table performs no arithmetic of its own.

use crate::regression::{
    decomposition::{mse, msr, sse, ssr},
    sums::sst,
};
use crate::statistical_tests::{errors::TestResult, f_test::f_test};

/// Column labels of the ANOVA table, in display order.
pub const ANOVA_COLUMNS: [&str; 7] =
    ["source", "sum_sq", "df", "mean_sq", "F_0", "p_value", "reject"];

/// Source of variation for an ANOVA row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnovaSource {
    /// Variation explained by the fitted line.
    Regression,
    /// Variation left in the residuals.
    Residual,
    /// Total corrected variation of the response.
    Total,
}

impl AnovaSource {
    /// Lower-case label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            AnovaSource::Regression => "regression",
            AnovaSource::Residual => "residual",
            AnovaSource::Total => "total",
        }
    }
}

impl std::fmt::Display for AnovaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the ANOVA table.
///
/// `mean_sq` is absent for the total row; `f_statistic`, `p_value`, and
/// `reject` are present only on the regression row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaRow {
    pub source: AnovaSource,
    pub sum_sq: f64,
    pub df: usize,
    pub mean_sq: Option<f64>,
    pub f_statistic: Option<f64>,
    pub p_value: Option<f64>,
    pub reject: Option<bool>,
}

impl AnovaRow {
    /// p-value rendered with [`format_p_value`], if the row carries one.
    pub fn p_value_label(&self) -> Option<String> {
        self.p_value.map(format_p_value)
    }

    fn cells(&self) -> [String; 7] {
        let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        [
            self.source.to_string(),
            self.sum_sq.to_string(),
            self.df.to_string(),
            optional(self.mean_sq.map(|v| v.to_string())),
            optional(self.f_statistic.map(|v| v.to_string())),
            optional(self.p_value_label()),
            optional(self.reject.map(|v| v.to_string())),
        ]
    }
}

/// AnovaTable — the regression / residual / total decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaTable {
    rows: [AnovaRow; 3],
}

impl AnovaTable {
    /// Regression row.
    pub fn regression(&self) -> &AnovaRow {
        &self.rows[0]
    }

    /// Residual row.
    pub fn residual(&self) -> &AnovaRow {
        &self.rows[1]
    }

    /// Total row.
    pub fn total(&self) -> &AnovaRow {
        &self.rows[2]
    }

    /// All rows in display order.
    pub fn rows(&self) -> &[AnovaRow; 3] {
        &self.rows
    }
}

impl std::fmt::Display for AnovaTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body: Vec<[String; 7]> = self.rows.iter().map(AnovaRow::cells).collect();
        let mut widths = ANOVA_COLUMNS.map(str::len);
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.len());
            }
        }

        for (i, (label, width)) in ANOVA_COLUMNS.iter().zip(widths).enumerate() {
            if i == 0 {
                write!(f, "{label:<width$}")?;
            } else {
                write!(f, "  {label:>width$}")?;
            }
        }
        for cells in &body {
            writeln!(f)?;
            for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
                if i == 0 {
                    write!(f, "{cell:<width$}")?;
                } else {
                    write!(f, "  {cell:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

/// Build the ANOVA table for the simple regression of `y` on `x`.
///
/// Parameters
/// ----------
/// - `x`, `y`: `&[f64]`
///   Predictor and response, equal length n ≥ 3.
/// - `alpha`: `f64`
///   Significance level of the F-test on the regression row.
/// - `ndec`: `i32`
///   Decimal digits applied at every stage.
///
/// Errors
/// ------
/// - Any error from [`f_test`] or the decomposition formulas.
///
/// Examples
/// --------
/// ```rust
/// use rust_lra::statistical_tests::anova::anova;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.1, 3.9, 6.2, 7.8, 10.1];
///
/// let table = anova(&x, &y, 0.05, 4).unwrap();
///
/// assert_eq!(table.residual().df, 3);
/// assert_eq!(table.total().df, 4);
/// assert!(table.residual().f_statistic.is_none());
/// println!("{table}");
/// ```
pub fn anova(x: &[f64], y: &[f64], alpha: f64, ndec: i32) -> TestResult<AnovaTable> {
    let test = f_test(x, y, alpha, ndec)?;
    let n = test.n();

    let regression = AnovaRow {
        source: AnovaSource::Regression,
        sum_sq: ssr(x, y, ndec)?,
        df: 1,
        mean_sq: Some(msr(x, y, ndec)?),
        f_statistic: Some(test.statistic()),
        p_value: Some(test.p_value()),
        reject: Some(test.reject()),
    };
    let residual = AnovaRow {
        source: AnovaSource::Residual,
        sum_sq: sse(x, y, ndec)?,
        df: n - 2,
        mean_sq: Some(mse(x, y, ndec)?),
        f_statistic: None,
        p_value: None,
        reject: None,
    };
    let total = AnovaRow {
        source: AnovaSource::Total,
        sum_sq: sst(y, ndec)?,
        df: n - 1,
        mean_sq: None,
        f_statistic: None,
        p_value: None,
        reject: None,
    };

    Ok(AnovaTable { rows: [regression, residual, total] })
}

/// Format a p-value in scientific notation with two decimals and a signed,
/// at least two-digit exponent (`1.66e-10`, `5.00e-05`, `1.00e+00`).
/// Non-finite values render as `nan`, `inf`, or `-inf`.
pub fn format_p_value(p: f64) -> String {
    if !p.is_finite() {
        return p.to_string().to_lowercase();
    }
    let formatted = format!("{p:.2e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}
