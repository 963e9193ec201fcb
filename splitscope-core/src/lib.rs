//! splitscope-core: pure expense extraction, aggregation, and report assembly.
//!
//! No I/O lives here. The API crate parses Splitwise payloads into
//! [`RawTransaction`]s, this crate turns them into one user's expense
//! records and the derived report, and the CLI renders the result.

pub mod error;
pub mod extract;
pub mod period;
pub mod record;
pub mod report;
pub mod summary;

pub use error::ReportError;
pub use extract::extract;
pub use period::ReportPeriod;
pub use record::{ExpenseRecord, GroupId, NON_GROUP_ID, Participant, RawTransaction, UserId};
pub use report::{Report, build_report};
pub use summary::{CategoryTotal, DailyTotal, summarize_by_category, summarize_by_day};
