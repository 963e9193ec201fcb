//! Thin async client for the Splitwise REST API (v3.0).
//!
//! One fetch per report render, no retries, no caching. HTTP failures
//! abort the render; malformed expense payloads are dropped one at a time.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use splitscope_core::{GroupId, RawTransaction, ReportError, UserId};

use crate::wire::{CurrentUserResponse, ExpensesResponse, GroupsResponse, WireGroup};

pub const DEFAULT_BASE_URL: &str = "https://secure.splitwise.com/api/v3.0";

/// Upper bound on expenses returned per fetch; a month of shared expenses
/// sits far below this.
const EXPENSE_FETCH_LIMIT: u32 = 1000;

#[derive(Debug, Clone)]
pub struct SplitwiseClient {
    http: reqwest::Client,
    base_url: String,
}

impl SplitwiseClient {
    /// Build a client that sends a personal API key as a bearer token.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .context("API key contains characters not valid in a header")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("building http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Numeric id of the authenticated user.
    pub async fn current_user(&self) -> Result<UserId> {
        let resp: CurrentUserResponse = self.get("get_current_user", &[]).await?;
        Ok(resp.user.id)
    }

    /// All groups visible to the authenticated user.
    pub async fn groups(&self) -> Result<Vec<WireGroup>> {
        let resp: GroupsResponse = self.get("get_groups", &[]).await?;
        Ok(resp.groups)
    }

    /// Resolve a group by exact name.
    pub async fn group_by_name(&self, name: &str) -> Result<WireGroup> {
        let groups = self.groups().await?;
        groups
            .into_iter()
            .find(|g| g.name == name)
            .ok_or_else(|| ReportError::GroupNotFound(name.to_string()).into())
    }

    /// Expenses for one group between `after` and `before`, parsed into
    /// typed transactions. Deleted and malformed expenses are dropped
    /// individually; a bad record never fails the batch.
    pub async fn expenses(
        &self,
        group_id: GroupId,
        after: NaiveDate,
        before: NaiveDate,
    ) -> Result<Vec<RawTransaction>> {
        let query = [
            ("group_id", group_id.to_string()),
            ("dated_after", after.to_string()),
            ("dated_before", before.to_string()),
            ("visible", "true".to_string()),
            ("limit", EXPENSE_FETCH_LIMIT.to_string()),
        ];
        let resp: ExpensesResponse = self.get("get_expenses", &query).await?;
        debug!(count = resp.expenses.len(), group_id, "fetched expenses");

        let mut txns = Vec::with_capacity(resp.expenses.len());
        for expense in resp.expenses {
            if expense.is_deleted() {
                continue;
            }
            match expense.try_into_transaction() {
                Ok(txn) => txns.push(txn),
                Err(e) => warn!("skipping expense: {e}"),
            }
        }
        Ok(txns)
    }

    async fn get<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("splitwise {endpoint} request"))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("splitwise {endpoint} error: {status} {txt}");
        }

        resp.json::<T>()
            .await
            .with_context(|| format!("parse splitwise {endpoint} response"))
    }
}
