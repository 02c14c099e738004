// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::charts::BreakdownSlice;
use crate::config::Config;
use crate::dashboard::DashboardState;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

use super::presets_from;

pub fn slices(state: &mut DashboardState, sub: &clap::ArgMatches) -> Result<Vec<BreakdownSlice>> {
    state.set_presets(presets_from(sub)?);
    Ok(state.breakdown()?)
}

pub fn handle(state: &mut DashboardState, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let data = slices(state, sub)?;
    if maybe_print_json(sub.get_flag("json"), &data)? {
        return Ok(());
    }
    let ccy = super::currency_label(state, cfg).to_string();
    let scope = if state.presets().is_empty() {
        "all time".to_string()
    } else {
        state
            .presets()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let rows = data
        .iter()
        .map(|s| vec![s.name.clone(), fmt_money(s.value, &ccy)])
        .collect();
    println!("Spend breakdown ({})", scope);
    println!("{}", pretty_table(&["Category", "Amount"], rows));
    Ok(())
}
