//! Category and daily aggregation over extracted expense records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::record::ExpenseRecord;

/// Total spend in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Total spend on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Sum records per category, largest amount first (chart order).
pub fn summarize_by_category(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records {
        *totals.entry(r.category.as_str()).or_insert(0.0) += r.amount;
    }

    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
        })
        .collect();
    out.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    out
}

/// Sum records per day, chronological for trend rendering.
pub fn summarize_by_day(records: &[ExpenseRecord]) -> Vec<DailyTotal> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for r in records {
        *totals.entry(r.date).or_insert(0.0) += r.amount;
    }

    totals
        .into_iter()
        .map(|(date, amount)| DailyTotal { date, amount })
        .collect()
}

/// Grand total across all records.
pub fn total(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}
