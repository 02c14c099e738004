// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Presentation state for the dashboard view.
//!
//! The state owns what the user controls (presets, hidden series) and the
//! latest accepted payload. Chart datasets are derived on demand through the
//! pure functions in [`crate::charts`] and memoized per input combination.

use crate::api::{RequestSequence, Ticket};
use crate::charts::{
    BreakdownSlice, ChartCache, MonthlyComparison, MonthlyWindow, NetWorthChart,
    VisibilitySet, aggregate_categories, breakdown_slices, build_net_worth, monthly_totals,
};
use crate::errors::ChartResult;
use crate::models::{PortfolioSummaryResponse, Preset};

#[derive(Debug, Default)]
pub struct DashboardState {
    requests: RequestSequence,
    payload: PortfolioSummaryResponse,
    revision: u64,
    presets: Vec<Preset>,
    hidden: VisibilitySet,
    net_worth_cache: ChartCache<(u64, VisibilitySet), NetWorthChart>,
    breakdown_cache: ChartCache<(u64, Vec<Preset>), Vec<BreakdownSlice>>,
    monthly_cache: ChartCache<(u64, MonthlyWindow), MonthlyComparison>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; hand the ticket back to [`DashboardState::accept`] with its response.
    pub fn begin_fetch(&self) -> Ticket {
        self.requests.begin()
    }

    /// Store `payload` if `ticket` is the latest fetch. Returns whether it was kept.
    pub fn accept(&mut self, ticket: Ticket, payload: PortfolioSummaryResponse) -> bool {
        if !self.requests.is_current(ticket) {
            tracing::debug!(seq = ticket.seq(), "discarding stale portfolio response");
            return false;
        }
        self.payload = payload;
        self.revision += 1;
        self.net_worth_cache.invalidate();
        self.breakdown_cache.invalidate();
        self.monthly_cache.invalidate();
        tracing::info!(revision = self.revision, "portfolio summary updated");
        true
    }

    pub fn payload(&self) -> &PortfolioSummaryResponse {
        &self.payload
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn set_presets(&mut self, presets: Vec<Preset>) {
        self.presets = presets;
    }

    pub fn hidden(&self) -> &VisibilitySet {
        &self.hidden
    }

    /// Flip a series between shown and hidden. Returns whether it is now hidden.
    pub fn toggle_series(&mut self, name: &str) -> bool {
        self.hidden.toggle(name)
    }

    pub fn net_worth(&mut self) -> ChartResult<NetWorthChart> {
        let key = (self.revision, self.hidden.clone());
        let payload = &self.payload;
        let hidden = &self.hidden;
        self.net_worth_cache.get_or_try_insert_with(key, || {
            build_net_worth(
                &payload.total_balance,
                payload.total_prediction.as_ref(),
                hidden,
            )
        })
    }

    pub fn breakdown(&mut self) -> ChartResult<Vec<BreakdownSlice>> {
        let key = (self.revision, self.presets.clone());
        let payload = &self.payload;
        let presets = &self.presets;
        self.breakdown_cache.get_or_try_insert_with(key, || {
            Ok(breakdown_slices(&aggregate_categories(
                &payload.spend_per_month,
                presets,
            )?))
        })
    }

    pub fn monthly(&mut self, window: MonthlyWindow) -> ChartResult<MonthlyComparison> {
        let payload = &self.payload;
        self.monthly_cache
            .get_or_try_insert_with((self.revision, window), || {
                monthly_totals(&payload.spend_per_month, window)
            })
    }

    /// Derivations computed so far, across all three charts.
    pub fn computations(&self) -> u64 {
        self.net_worth_cache.misses() + self.breakdown_cache.misses() + self.monthly_cache.misses()
    }
}
