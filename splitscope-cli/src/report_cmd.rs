//! Request resolution and the fetch → extract → assemble flow shared by
//! `report` and `dashboard`.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};

use splitscope_api::SplitwiseClient;
use splitscope_core::{NON_GROUP_ID, Report, ReportPeriod, build_report, extract};

use crate::config::Config;

/// Report selection flags shared by `report` and `dashboard`.
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// Group name (default: report.default_group from config)
    #[arg(long)]
    pub group: Option<String>,

    /// Report the "non-group expenses" bucket instead of a named group
    #[arg(long, conflicts_with = "group")]
    pub non_group: bool,

    /// Month 1-12 (default: current month)
    #[arg(long)]
    pub month: Option<u32>,

    /// Year (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Rolling 26th-to-26th window instead of the calendar month
    #[arg(long)]
    pub discover: bool,

    /// Never widen 30/31-day months to the 1st of the next month
    #[arg(long)]
    pub no_widen: bool,
}

#[derive(Debug, Clone)]
pub enum GroupSelection {
    Named(String),
    NonGroup,
}

/// Everything needed to produce one report: where to look and when.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub group: GroupSelection,
    pub year: i32,
    pub month: u32,
    pub discover: bool,
    pub widen_month_end: bool,
}

impl ReportRequest {
    /// Resolve CLI args against config defaults and today's date.
    pub fn from_args(args: &ReportArgs, cfg: &Config) -> Result<Self> {
        let today = Local::now().date_naive();
        Self::resolve(args, cfg, today)
    }

    fn resolve(args: &ReportArgs, cfg: &Config, today: NaiveDate) -> Result<Self> {
        let group = if args.non_group {
            GroupSelection::NonGroup
        } else {
            match args.group.clone().or_else(|| cfg.report.default_group.clone()) {
                Some(name) => GroupSelection::Named(name),
                None => bail!(
                    "no group selected; pass --group <name> or --non-group, \
                     or set report.default_group in config.toml"
                ),
            }
        };

        let month = match args.month {
            Some(m) if (1..=12).contains(&m) => m,
            Some(m) => bail!("month must be 1-12, got {m}"),
            None => today.month(),
        };

        Ok(Self {
            group,
            year: args.year.unwrap_or_else(|| today.year()),
            month,
            discover: args.discover,
            widen_month_end: cfg.report.widen_month_end && !args.no_widen,
        })
    }

    pub fn period(&self) -> Result<ReportPeriod> {
        if self.discover {
            ReportPeriod::discover(self.year, self.month)
        } else {
            ReportPeriod::calendar_month(self.year, self.month, self.widen_month_end)
        }
    }

    /// "March 2026", independent of the mode's exact date bounds.
    pub fn month_label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(d) => d.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }
}

/// One render pass: resolve the group, fetch, extract the user's share,
/// assemble the report. Returns the resolved group label for the header.
pub async fn run_report(
    client: &SplitwiseClient,
    request: &ReportRequest,
) -> Result<(String, Report)> {
    let period = request.period()?;

    let (group_id, group_label) = match &request.group {
        GroupSelection::Named(name) => {
            let group = client.group_by_name(name).await?;
            (group.id, group.name)
        }
        GroupSelection::NonGroup => (NON_GROUP_ID, "Non-group expenses".to_string()),
    };

    let user_id = client.current_user().await?;
    let transactions = client.expenses(group_id, period.start, period.end).await?;
    let records = extract(&transactions, user_id);

    Ok((group_label, build_report(records, period)))
}

/// Blocking wrapper for the dashboard's synchronous event loop.
///
/// The binary runs under #[tokio::main], so a nested runtime would panic:
/// reuse the current handle via block_in_place when one exists.
pub fn fetch_report_blocking(
    client: &SplitwiseClient,
    request: &ReportRequest,
) -> Result<(String, Report)> {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        tokio::task::block_in_place(|| handle.block_on(run_report(client, request)))
    } else {
        let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
        rt.block_on(run_report(client, request))
    }
}
