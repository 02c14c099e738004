// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod breakdown;
pub mod config;
pub mod exporter;
pub mod monthly;
pub mod net_worth;
pub mod transactions;

use std::path::Path;

use anyhow::Result;

use crate::api::ApiClient;
use crate::charts::MonthlyWindow;
use crate::config::Config;
use crate::dashboard::DashboardState;
use crate::models::Preset;
use crate::utils::{parse_preset, read_summary_file};

/// Effective configuration with `--api-url` applied on top.
pub fn effective_config(mut cfg: Config, m: &clap::ArgMatches) -> Config {
    let url = m.get_one::<String>("api-url").or_else(|| {
        m.subcommand()
            .and_then(|(_, sub)| sub.try_get_one::<String>("api-url").ok().flatten())
    });
    if let Some(url) = url {
        cfg.api_url = url.trim().to_string();
    }
    cfg
}

pub fn client(cfg: &Config) -> Result<ApiClient> {
    ApiClient::new(&cfg.api_url, cfg.timeout_secs)
}

/// Fill `state` from `--input` when given, otherwise from the backend.
pub fn load_dashboard(cfg: &Config, m: &clap::ArgMatches) -> Result<DashboardState> {
    let mut state = DashboardState::new();
    let ticket = state.begin_fetch();
    let payload = match m.get_one::<String>("input") {
        Some(path) => read_summary_file(Path::new(path.trim()))?,
        None => client(cfg)?.summary()?,
    };
    state.accept(ticket, payload);
    Ok(state)
}

pub fn presets_from(sub: &clap::ArgMatches) -> Result<Vec<Preset>> {
    sub.get_many::<String>("preset")
        .map(|vals| vals.map(|s| parse_preset(s)).collect())
        .unwrap_or_else(|| Ok(Vec::new()))
}

pub fn window_from(cfg: &Config, sub: &clap::ArgMatches) -> Result<MonthlyWindow> {
    let years = sub
        .get_one::<u32>("window")
        .copied()
        .unwrap_or(cfg.window_years);
    let window = match sub.get_one::<i32>("year") {
        Some(year) => MonthlyWindow::new(*year, years)?,
        None => MonthlyWindow::current(years)?,
    };
    Ok(window)
}

/// Currency label: the backend's if it sent one, else the configured one.
pub fn currency_label<'a>(state: &'a DashboardState, cfg: &'a Config) -> &'a str {
    let ccy = state.payload().base_currency.trim();
    if ccy.is_empty() { cfg.currency.as_str() } else { ccy }
}
