// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::charts::{NetWorthChart, VisibilitySet};
use crate::config::Config;
use crate::dashboard::DashboardState;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

/// Chart for the hidden names and projection choice on `sub`.
pub fn chart(state: &mut DashboardState, sub: &clap::ArgMatches) -> Result<NetWorthChart> {
    if let Some(names) = sub.get_many::<String>("hide") {
        for name in names {
            if !state.hidden().is_hidden(name) {
                state.toggle_series(name);
            }
        }
    }
    let chart = state.net_worth()?;
    let show_prediction = sub
        .try_get_one::<bool>("no-prediction")
        .ok()
        .flatten()
        .map(|flag| !*flag)
        .unwrap_or(true);
    Ok(if show_prediction {
        chart
    } else {
        chart.without_projection()
    })
}

pub fn handle(state: &mut DashboardState, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let chart = chart(state, sub)?;
    if maybe_print_json(sub.get_flag("json"), &chart)? {
        return Ok(());
    }
    let ccy = super::currency_label(state, cfg).to_string();
    let hidden = state.hidden();

    let mut headers: Vec<String> = vec!["Date".into()];
    for name in &chart.categories {
        if hidden.is_hidden(name) {
            headers.push(format!("{} (hidden)", name));
        } else {
            headers.push(name.clone());
        }
    }
    headers.push("Total".into());
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    println!("Net worth over time ({})", ccy);
    println!("{}", pretty_table(&header_refs, rows(&chart, hidden, &ccy)));
    println!("Current total: {}", fmt_money(chart.current_total, &ccy));
    Ok(())
}

/// One row per point; gaps render empty, the last column sums visible series.
pub fn rows(chart: &NetWorthChart, hidden: &VisibilitySet, ccy: &str) -> Vec<Vec<String>> {
    chart
        .points
        .iter()
        .map(|p| {
            let mut row = vec![p.date.format("%a %b %d %Y").to_string()];
            for name in &chart.categories {
                row.push(p.get(name).map(|v| fmt_money(v, ccy)).unwrap_or_default());
            }
            row.push(fmt_money(hidden.visible_total(p, &chart.categories), ccy));
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::build_net_worth;
    use crate::models::{BalancePayload, NamedSeries, PredictionPayload};

    #[test]
    fn projection_rows_leave_history_blank() {
        let balances = BalancePayload {
            timestamps: vec![Some(0)],
            series: vec![NamedSeries::new("Neon", vec![Some(1200.0)])],
        };
        let prediction = PredictionPayload {
            name: "Prediction".into(),
            values: vec![Some(1300.0)],
        };
        let hidden = VisibilitySet::new();
        let chart = build_net_worth(&balances, Some(&prediction), &hidden).unwrap();
        let rows = rows(&chart, &hidden, "CHF");
        assert_eq!(rows[0], ["Thu Jan 01 1970", "CHF 1'200", "", "CHF 1'200"]);
        assert_eq!(rows[1], ["Fri Jan 02 1970", "", "CHF 1'300", "CHF 1'300"]);
    }
}
