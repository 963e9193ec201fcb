//! Plain-terminal rendering: expense table, totals, category charts, and
//! the daily trend sparkline.

use splitscope_core::{CategoryTotal, DailyTotal, Report};

const BAR_WIDTH: usize = 30;
const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn print_report(group_label: &str, report: &Report) {
    println!(
        "# {} — {} to {}\n",
        group_label, report.period.start, report.period.end
    );

    if report.is_empty() {
        println!("No expenses found for this period and group.");
        return;
    }

    println!("{}", expense_table(report));
    println!("Total expenses: {}\n", format_currency(report.total));

    println!("## Share of spend\n");
    println!("{}", category_share_view(&report.by_category, report.total));

    println!("## Spend by category\n");
    println!("{}", category_bar_chart(&report.by_category));

    println!("## Daily trend\n");
    println!("{}", daily_trend(&report.by_day));
}

pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Detail table, newest expense first.
pub fn expense_table(report: &Report) -> String {
    let mut cat_w = "Category".len();
    let mut desc_w = "Description".len();
    for r in &report.records {
        cat_w = cat_w.max(r.category.chars().count());
        desc_w = desc_w.max(r.description.chars().count());
    }

    let mut s = String::new();
    s.push_str(&format!(
        "{:<10}  {:<cat_w$}  {:<desc_w$}  {:>10}\n",
        "Date", "Category", "Description", "Amount"
    ));
    s.push_str(&format!(
        "{}  {}  {}  {}\n",
        "-".repeat(10),
        "-".repeat(cat_w),
        "-".repeat(desc_w),
        "-".repeat(10)
    ));
    for r in &report.records {
        s.push_str(&format!(
            "{:<10}  {:<cat_w$}  {:<desc_w$}  {:>10}\n",
            r.date.format("%Y-%m-%d").to_string(),
            r.category,
            r.description,
            format_currency(r.amount)
        ));
    }
    s
}

/// Proportional view: each category's percentage of the total, with a bar
/// scaled against the whole.
pub fn category_share_view(totals: &[CategoryTotal], grand_total: f64) -> String {
    let cat_w = label_width(totals);
    let mut s = String::new();
    for t in totals {
        let share = if grand_total > 0.0 {
            t.amount / grand_total
        } else {
            0.0
        };
        let filled = ((share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        s.push_str(&format!(
            "{:<cat_w$}  {:>5.1}%  {}\n",
            t.category,
            share * 100.0,
            "█".repeat(filled)
        ));
    }
    s
}

/// Magnitude view: bars scaled against the largest category.
pub fn category_bar_chart(totals: &[CategoryTotal]) -> String {
    let cat_w = label_width(totals);
    let max = totals.iter().map(|t| t.amount).fold(0.0_f64, f64::max);

    let mut s = String::new();
    for t in totals {
        let filled = if max > 0.0 {
            (((t.amount / max) * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH)
        } else {
            0
        };
        s.push_str(&format!(
            "{:<cat_w$}  {:<BAR_WIDTH$}  {:>10}\n",
            t.category,
            "█".repeat(filled),
            format_currency(t.amount)
        ));
    }
    s
}

/// One character per reported day, scaled against the busiest day.
pub fn daily_trend(days: &[DailyTotal]) -> String {
    let Some(first) = days.first() else {
        return String::new();
    };
    let last = days.last().unwrap_or(first);
    let max = days.iter().map(|d| d.amount).fold(0.0_f64, f64::max);

    let mut spark = String::new();
    for d in days {
        let idx = if max > 0.0 {
            (((d.amount / max) * (SPARK_CHARS.len() - 1) as f64).round() as usize)
                .min(SPARK_CHARS.len() - 1)
        } else {
            0
        };
        spark.push(SPARK_CHARS[idx]);
    }

    let peak = days
        .iter()
        .max_by(|a, b| a.amount.total_cmp(&b.amount))
        .unwrap_or(first);

    format!(
        "{}\n{} to {}, peak {} on {}\n",
        spark,
        first.date,
        last.date,
        format_currency(peak.amount),
        peak.date
    )
}

fn label_width(totals: &[CategoryTotal]) -> usize {
    totals
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(0)
}
