//! Structured terminal logging for verbose analysis runs (`obs_slog`).
//!
//! Records go to stderr through a `slog-term` full-format decorator behind
//! a non-blocking `slog-async` drain. Only the `Sample` methods log; the
//! formulas themselves stay silent.

use crate::statistical_tests::{anova::AnovaTable, outcome::TestOutcome};
use slog::{info, o, Drain, Logger};

/// Build a non-blocking stderr logger. Records are dropped rather than
/// blocking the caller if the async channel fills up.
pub(crate) fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::Drop)
        .build()
        .fuse();
    Logger::root(drain, o!("crate" => "rust_lra"))
}

/// Log one hypothesis-test outcome as key-value pairs.
pub(crate) fn log_outcome(logger: &Logger, test: &'static str, outcome: &TestOutcome) {
    info!(logger, "hypothesis test";
        "test" => test,
        "n" => outcome.n(),
        "statistic" => outcome.statistic(),
        "critical_value" => outcome.critical_value(),
        "p_value" => outcome.p_value(),
        "reject" => outcome.reject()
    );
}

/// Log every ANOVA row, one record per source of variation.
pub(crate) fn log_anova(logger: &Logger, table: &AnovaTable) {
    for row in table.rows() {
        info!(logger, "anova";
            "source" => row.source.label(),
            "sum_sq" => row.sum_sq,
            "df" => row.df,
            "mean_sq" => row.mean_sq,
            "f_statistic" => row.f_statistic,
            "p_value" => row.p_value_label(),
            "reject" => row.reject
        );
    }
}
