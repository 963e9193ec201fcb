//! Pure report assembly: extracted records in, everything a render pass
//! needs out. The interactive shells stay thin by calling this once per
//! render and doing nothing else with the data.

use serde::Serialize;

use crate::period::ReportPeriod;
use crate::record::ExpenseRecord;
use crate::summary::{CategoryTotal, DailyTotal, summarize_by_category, summarize_by_day, total};

/// One render pass worth of derived data. Rebuilt per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub period: ReportPeriod,
    /// Table rows, most recent first.
    pub records: Vec<ExpenseRecord>,
    pub total: f64,
    pub by_category: Vec<CategoryTotal>,
    pub by_day: Vec<DailyTotal>,
}

impl Report {
    /// No qualifying expenses: an informational state, not a failure.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derive the aggregates and table ordering from extracted records.
pub fn build_report(mut records: Vec<ExpenseRecord>, period: ReportPeriod) -> Report {
    let by_category = summarize_by_category(&records);
    let by_day = summarize_by_day(&records);
    let total = total(&records);

    // Stable sort keeps extraction order within a day.
    records.sort_by(|a, b| b.date.cmp(&a.date));

    Report {
        period,
        records,
        total,
        by_category,
        by_day,
    }
}
