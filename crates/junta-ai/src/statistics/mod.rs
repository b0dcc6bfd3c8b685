//! Anonymous aggregate reporting over every stored submission.
//!
//! Nothing is cached: each request re-reads the store and folds the whole
//! submission list into a two-level frequency table, from which category,
//! per-question, summary and export views are derived.

pub mod aggregate;
pub mod categories;
pub mod period;
pub mod router;
pub mod views;

pub use aggregate::{aggregate, AggregateStats, AnswerCounts};
pub use categories::{category_breakdown, Category, CategoryBreakdown};
pub use period::{ParsePeriodError, ReportingPeriod};
pub use router::{build_report, statistics_router, StatisticsState};
pub use views::{
    question_breakdown, ExportReport, QuestionBreakdown, StatisticsReport, StatisticsSummary,
};

/// Rounds to two decimal places, the precision used by every percentage.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
