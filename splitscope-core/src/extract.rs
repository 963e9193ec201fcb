//! Per-user expense extraction: shared transactions in, one attributable
//! record per qualifying transaction out.

use tracing::debug;

use crate::record::{ExpenseRecord, RawTransaction, UserId};

/// Filter `transactions` down to the share attributable to `target`.
///
/// Attribution is a two-case decision table, mutually exclusive per
/// transaction:
/// - `owed_share > 0` — the record carries what the user owes, regardless
///   of who fronted the money;
/// - `owed_share == 0 && paid_share > 0` — the user paid on someone else's
///   behalf and the record carries what they paid out.
///
/// A transaction contributes at most one record. "General"-category
/// transactions and transactions the target is not a party to contribute
/// nothing.
pub fn extract(transactions: &[RawTransaction], target: UserId) -> Vec<ExpenseRecord> {
    let mut records = Vec::new();

    for txn in transactions {
        let category = txn.category_name();
        if category.eq_ignore_ascii_case("general") {
            continue;
        }

        let Some(share) = txn.participant(target) else {
            // Target is not a party to this expense.
            continue;
        };

        let amount = if share.owed_share > 0.0 {
            share.owed_share
        } else if share.paid_share > 0.0 {
            share.paid_share
        } else {
            debug!(id = txn.id, "zero owed and paid share, skipping");
            continue;
        };

        records.push(ExpenseRecord {
            category: category.to_string(),
            amount,
            date: txn.date,
            description: txn.description.clone(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Participant;
    use chrono::NaiveDate;

    const ME: UserId = 7;

    fn txn(
        id: i64,
        category: Option<&str>,
        owed: f64,
        paid: f64,
    ) -> RawTransaction {
        RawTransaction {
            id,
            description: format!("expense-{id}"),
            date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            category: category.map(str::to_string),
            participants: vec![
                Participant {
                    user_id: ME,
                    owed_share: owed,
                    paid_share: paid,
                },
                Participant {
                    user_id: 8,
                    owed_share: 1.0,
                    paid_share: 0.0,
                },
            ],
        }
    }

    #[test]
    fn test_owed_share_wins_even_when_paid_too() {
        let out = extract(&[txn(1, Some("Food"), 12.5, 12.5)], ME);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].amount, 12.5);
        assert_eq!(out[0].category, "Food");
    }

    #[test]
    fn test_paid_only_falls_back_to_paid_share() {
        let out = extract(&[txn(2, None, 0.0, 30.0)], ME);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].amount, 30.0);
        assert_eq!(out[0].category, "Uncategorized");
    }

    #[test]
    fn test_zero_shares_emit_nothing() {
        assert!(extract(&[txn(3, Some("Food"), 0.0, 0.0)], ME).is_empty());
    }

    #[test]
    fn test_general_is_excluded_case_insensitively() {
        for cat in ["General", "general", "GENERAL", "gEnErAl"] {
            assert!(
                extract(&[txn(4, Some(cat), 5.0, 0.0)], ME).is_empty(),
                "category {cat:?} should be excluded"
            );
        }
    }

    #[test]
    fn test_non_participant_emits_nothing() {
        let mut t = txn(5, Some("Food"), 12.5, 0.0);
        t.participants.retain(|p| p.user_id != ME);
        assert!(extract(&[t], ME).is_empty());
    }

    #[test]
    fn test_at_most_one_record_per_transaction() {
        // Both shares positive must still yield exactly one record.
        let out = extract(&[txn(6, Some("Food"), 20.0, 45.0)], ME);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].amount, 20.0);
    }

    #[test]
    fn test_idempotent_and_order_preserving() {
        let txns = vec![
            txn(1, Some("Food"), 12.5, 12.5),
            txn(2, Some("General"), 5.0, 0.0),
            txn(3, None, 0.0, 30.0),
            txn(4, Some("Rent"), 450.0, 900.0),
        ];
        let first = extract(&txns, ME);
        let second = extract(&txns, ME);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(
            first.iter().map(|r| r.description.as_str()).collect::<Vec<_>>(),
            ["expense-1", "expense-3", "expense-4"]
        );
    }

    #[test]
    fn test_description_passes_through_unmodified() {
        let mut t = txn(9, Some("Food"), 3.0, 0.0);
        t.description = "  Tacos & drinks  ".to_string();
        let out = extract(&[t], ME);
        assert_eq!(out[0].description, "  Tacos & drinks  ");
    }
}
