// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::charts::MonthlyComparison;
use crate::config::Config;
use crate::dashboard::DashboardState;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

use super::window_from;

pub fn handle(state: &mut DashboardState, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let grid = state.monthly(window_from(cfg, sub)?)?;
    if maybe_print_json(sub.get_flag("json"), &grid)? {
        return Ok(());
    }
    let ccy = super::currency_label(state, cfg).to_string();
    let mut headers = vec!["Month".to_string()];
    headers.extend(grid.years.iter().map(|y| y.to_string()));
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    println!("Spend per month");
    println!("{}", pretty_table(&header_refs, rows(&grid, &ccy)));
    Ok(())
}

/// Empty cells mark years without data, never a zero.
pub fn rows(grid: &MonthlyComparison, ccy: &str) -> Vec<Vec<String>> {
    grid.rows
        .iter()
        .map(|r| {
            let mut row = vec![r.label.clone()];
            row.extend(
                r.totals
                    .iter()
                    .map(|t| t.map(|v| fmt_money(v, ccy)).unwrap_or_default()),
            );
            row
        })
        .collect()
}
