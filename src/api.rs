// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{ListLedgerResponse, PeriodTransactions, PortfolioSummaryResponse, Preset};
use crate::utils::http_client;

/// Issued when a fetch starts; only the latest ticket may land its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Monotonic fetch counter used to drop responses that were overtaken by a
/// newer request for the same view.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: http_client(timeout_secs)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Backend rejected {}", url))?;
        resp.json()
            .with_context(|| format!("Invalid JSON from {}", url))
    }

    pub fn summary(&self) -> Result<PortfolioSummaryResponse> {
        self.get_json("data", &[])
    }

    pub fn ledgers(&self) -> Result<ListLedgerResponse> {
        self.get_json("ledgers", &[])
    }

    /// Transactions of one ledger within the preset's calendar month.
    pub fn ledger_transactions(&self, ledger_id: &str, preset: Preset) -> Result<PeriodTransactions> {
        let (from, to) = preset.date_range()?;
        self.get_json(
            &format!("ledger/{}", ledger_id),
            &[("from", from.to_string()), ("to", to.to_string())],
        )
    }
}
