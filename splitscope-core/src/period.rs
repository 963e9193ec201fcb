//! Report date ranges: calendar months and the rolling "discover" window.

use anyhow::{Result, bail};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// The date range handed to the expense fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Calendar-month range: the 1st through the last day of the month.
    ///
    /// With `widen_month_end` set, a 30- or 31-day month instead ends on
    /// the 1st of the following month. The widened boundary matches the
    /// historical report windows, so it stays available behind a toggle;
    /// February never widens.
    pub fn calendar_month(year: i32, month: u32, widen_month_end: bool) -> Result<Self> {
        let start = date(year, month, 1)?;
        let last = last_day_of_month(year, month)?;
        let end = if widen_month_end && last.day() >= 30 {
            first_of_next_month(year, month)?
        } else {
            last
        };
        Ok(Self { start, end })
    }

    /// Rolling window from the 26th of the prior month through the 26th of
    /// the selected month.
    pub fn discover(year: i32, month: u32) -> Result<Self> {
        let (prior_year, prior_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
        Ok(Self {
            start: date(prior_year, prior_month, 26)?,
            end: date(year, month, 26)?,
        })
    }

    /// Number of calendar days covered, inclusive of both bounds.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => Ok(d),
        None => bail!("invalid date {year:04}-{month:02}-{day:02}"),
    }
}

fn first_of_next_month(year: i32, month: u32) -> Result<NaiveDate> {
    if month == 12 {
        date(year + 1, 1, 1)
    } else {
        date(year, month + 1, 1)
    }
}

fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    Ok(first_of_next_month(year, month)? - Days::new(1))
}
