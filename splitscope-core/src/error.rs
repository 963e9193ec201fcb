//! Failure taxonomy for a report run.
//!
//! Fetch-level failures abort the render; malformed-record failures are
//! logged and skipped one at a time at the API boundary. An empty result
//! is a state, not an error, and never appears here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// No API key stored; the CLI prints the remedy.
    #[error("no Splitwise API key configured; run: splitscope auth set-key")]
    MissingApiKey,

    /// The named group does not exist for this account.
    #[error("group not found: {0}")]
    GroupNotFound(String),

    /// One expense payload could not be parsed into a transaction.
    #[error("malformed expense {id}: {reason}")]
    MalformedExpense { id: i64, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_remedy_or_cause() {
        assert!(ReportError::MissingApiKey.to_string().contains("auth set-key"));
        assert_eq!(
            ReportError::GroupNotFound("Apartment".to_string()).to_string(),
            "group not found: Apartment"
        );
        let e = ReportError::MalformedExpense {
            id: 42,
            reason: "missing date".to_string(),
        };
        assert_eq!(e.to_string(), "malformed expense 42: missing date");
    }
}
