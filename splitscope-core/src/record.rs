//! Expense record types shared across the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Splitwise numeric user id.
pub type UserId = i64;

/// Splitwise numeric group id.
pub type GroupId = i64;

/// The "non-group expenses" bucket: expenses not filed under any group.
pub const NON_GROUP_ID: GroupId = 0;

/// One participant's stake in a shared expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: UserId,
    /// Amount this user owes as their portion of the expense.
    pub owed_share: f64,
    /// Amount this user personally paid toward the expense.
    pub paid_share: f64,
}

/// A shared expense, parsed exactly once at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub id: i64,
    pub description: String,
    pub date: NaiveDate,
    /// `None` when the source reports no category.
    pub category: Option<String>,
    pub participants: Vec<Participant>,
}

impl RawTransaction {
    /// Category name with the source's "no category" case normalized.
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or("Uncategorized")
    }

    /// The participant entry for `user_id`, if this user is a party.
    pub fn participant(&self, user_id: UserId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.user_id == user_id)
    }
}

/// One user's share of one transaction, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub category: String,
    /// Strictly positive; zero attributions are never emitted.
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(category: Option<&str>) -> RawTransaction {
        RawTransaction {
            id: 1,
            description: "Dinner".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            category: category.map(str::to_string),
            participants: vec![
                Participant {
                    user_id: 10,
                    owed_share: 12.5,
                    paid_share: 25.0,
                },
                Participant {
                    user_id: 11,
                    owed_share: 12.5,
                    paid_share: 0.0,
                },
            ],
        }
    }

    #[test]
    fn test_category_name_fallback() {
        assert_eq!(txn(Some("Food")).category_name(), "Food");
        assert_eq!(txn(None).category_name(), "Uncategorized");
    }

    #[test]
    fn test_participant_lookup() {
        let t = txn(Some("Food"));
        assert_eq!(t.participant(11).unwrap().owed_share, 12.5);
        assert!(t.participant(99).is_none());
    }

    #[test]
    fn test_record_serde_round_trip() {
        let r = ExpenseRecord {
            category: "Food".to_string(),
            amount: 12.5,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            description: "Dinner".to_string(),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"2026-03-14\""));
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
