use chrono::NaiveDate;
use splitscope_core::{
    Participant, RawTransaction, ReportPeriod, build_report, extract,
};

const ME: i64 = 7;
const ROOMMATE: i64 = 8;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

fn split(
    id: i64,
    description: &str,
    day: u32,
    category: Option<&str>,
    my_owed: f64,
    my_paid: f64,
) -> RawTransaction {
    RawTransaction {
        id,
        description: description.to_string(),
        date: d(day),
        category: category.map(str::to_string),
        participants: vec![
            Participant {
                user_id: ME,
                owed_share: my_owed,
                paid_share: my_paid,
            },
            Participant {
                user_id: ROOMMATE,
                owed_share: my_paid,
                paid_share: my_owed,
            },
        ],
    }
}

/// A plausible month of shared-apartment expenses.
fn march_transactions() -> Vec<RawTransaction> {
    vec![
        // I owe half, roommate paid.
        split(1, "HEB groceries", 2, Some("Groceries"), 42.10, 0.0),
        // I paid the whole thing, owe half.
        split(2, "Dinner at Wakaba", 5, Some("Dining out"), 18.65, 37.30),
        // Settle-up entry filed under General: must vanish from the report.
        split(3, "Payment", 6, Some("General"), 0.0, 120.0),
        // Rent, roommate-entered.
        split(4, "March rent", 1, Some("Rent"), 650.0, 0.0),
        // I fronted a ticket for the roommate only.
        split(5, "Concert ticket for roommate", 14, Some("Entertainment"), 0.0, 55.0),
        // Uncategorized utility charge.
        split(6, "Electric bill", 20, None, 31.25, 62.50),
        // An expense between two other people entirely.
        RawTransaction {
            id: 7,
            description: "Not my lunch".to_string(),
            date: d(8),
            category: Some("Dining out".to_string()),
            participants: vec![Participant {
                user_id: 99,
                owed_share: 14.0,
                paid_share: 14.0,
            }],
        },
        // Groceries again, later in the month.
        split(8, "HEB groceries", 27, Some("Groceries"), 23.40, 46.80),
    ]
}

#[test]
fn test_full_month_pipeline() {
    let period = ReportPeriod::calendar_month(2026, 3, true).unwrap();
    let records = extract(&march_transactions(), ME);
    let report = build_report(records, period);

    // 8 inputs: one General, one foreign, six attributable.
    assert_eq!(report.records.len(), 6);

    // March has 31 days, so the default window widens to April 1st.
    assert_eq!(report.period.start, d(1));
    assert_eq!(report.period.end, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());

    // Table is newest-first.
    let dates: Vec<NaiveDate> = report.records.iter().map(|r| r.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    // Attribution: owed wins, paid only as fallback.
    let ticket = report
        .records
        .iter()
        .find(|r| r.description.contains("Concert"))
        .unwrap();
    assert_eq!(ticket.amount, 55.0);
    let dinner = report
        .records
        .iter()
        .find(|r| r.description.contains("Wakaba"))
        .unwrap();
    assert_eq!(dinner.amount, 18.65);

    // Absent category lands in the fallback bucket.
    let electric = report
        .records
        .iter()
        .find(|r| r.description.contains("Electric"))
        .unwrap();
    assert_eq!(electric.category, "Uncategorized");

    // The three views agree on the grand total.
    let expected = 42.10 + 18.65 + 650.0 + 55.0 + 31.25 + 23.40;
    assert!((report.total - expected).abs() < 1e-9);
    let by_cat: f64 = report.by_category.iter().map(|c| c.amount).sum();
    let by_day: f64 = report.by_day.iter().map(|d| d.amount).sum();
    assert!((by_cat - report.total).abs() < 1e-9);
    assert!((by_day - report.total).abs() < 1e-9);

    // Category chart order is largest-first; daily trend is chronological.
    assert_eq!(report.by_category[0].category, "Rent");
    assert!(report.by_day.windows(2).all(|w| w[0].date < w[1].date));

    // Groceries collapse into one category row.
    let groceries = report
        .by_category
        .iter()
        .find(|c| c.category == "Groceries")
        .unwrap();
    assert!((groceries.amount - 65.50).abs() < 1e-9);
}

#[test]
fn test_pipeline_is_pure_and_repeatable() {
    let txns = march_transactions();
    let period = ReportPeriod::calendar_month(2026, 3, true).unwrap();
    let a = build_report(extract(&txns, ME), period);
    let b = build_report(extract(&txns, ME), period);
    assert_eq!(a, b);
}

#[test]
fn test_empty_month_is_a_state_not_an_error() {
    let period = ReportPeriod::calendar_month(2026, 2, true).unwrap();
    let report = build_report(extract(&[], ME), period);
    assert!(report.is_empty());
}
