//! Serde mirror of the Splitwise v3.0 payloads, plus the one-shot
//! conversion into the typed core transaction.
//!
//! Splitwise encodes money as decimal strings ("12.50") and expense dates
//! as RFC3339 timestamps. Both are parsed exactly once here; anything that
//! fails produces a structured malformed-record error so the caller can
//! skip that expense and keep the batch.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use splitscope_core::{GroupId, Participant, RawTransaction, ReportError, UserId};

#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub user: WireUser,
}

#[derive(Debug, Deserialize)]
pub struct WireUser {
    pub id: UserId,
}

#[derive(Debug, Deserialize)]
pub struct GroupsResponse {
    pub groups: Vec<WireGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireGroup {
    pub id: GroupId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpensesResponse {
    pub expenses: Vec<WireExpense>,
}

#[derive(Debug, Deserialize)]
pub struct WireExpense {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub category: Option<WireCategory>,
    #[serde(default)]
    pub users: Vec<WireShare>,
}

#[derive(Debug, Deserialize)]
pub struct WireCategory {
    #[serde(default)]
    pub name: Option<String>,
}

/// One per-participant share. Older payloads nest the id under `user`,
/// newer ones carry a flat `user_id`; both are accepted.
#[derive(Debug, Deserialize)]
pub struct WireShare {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user: Option<WireUserRef>,
    #[serde(default)]
    pub owed_share: Option<String>,
    #[serde(default)]
    pub paid_share: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireUserRef {
    pub id: UserId,
}

impl WireExpense {
    /// Tombstones still show up in listings; they carry a deletion stamp.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Parse into the typed core transaction.
    pub fn try_into_transaction(self) -> Result<RawTransaction, ReportError> {
        let id = self.id;

        let date_raw = self
            .date
            .as_deref()
            .ok_or_else(|| malformed(id, "missing date"))?;
        let date = parse_expense_date(date_raw)
            .ok_or_else(|| malformed(id, format!("unparseable date '{date_raw}'")))?;

        let mut participants = Vec::with_capacity(self.users.len());
        for share in self.users {
            let user_id = share
                .user_id
                .or(share.user.map(|u| u.id))
                .ok_or_else(|| malformed(id, "share without a user id"))?;
            participants.push(Participant {
                user_id,
                owed_share: parse_money(id, share.owed_share.as_deref(), "owed_share")?,
                paid_share: parse_money(id, share.paid_share.as_deref(), "paid_share")?,
            });
        }

        Ok(RawTransaction {
            id,
            description: self.description,
            date,
            category: self.category.and_then(|c| c.name),
            participants,
        })
    }
}

/// Expense dates arrive as RFC3339 ("2026-03-14T00:00:00Z"); bare dates
/// are accepted too.
fn parse_expense_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_money(id: i64, raw: Option<&str>, field: &str) -> Result<f64, ReportError> {
    let raw = raw.ok_or_else(|| malformed(id, format!("missing {field}")))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| malformed(id, format!("unparseable {field} '{raw}'")))
}

fn malformed(id: i64, reason: impl Into<String>) -> ReportError {
    ReportError::MalformedExpense {
        id,
        reason: reason.into(),
    }
}
