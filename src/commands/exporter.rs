// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};

use crate::charts::DATE_KEY;
use crate::config::Config;
use crate::dashboard::DashboardState;

pub fn handle(state: &mut DashboardState, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("net-worth", sub)) => export_net_worth(state, sub),
        Some(("breakdown", sub)) => export_breakdown(state, sub),
        Some(("monthly", sub)) => export_monthly(state, cfg, sub),
        _ => Ok(()),
    }
}

fn target(sub: &clap::ArgMatches) -> Result<(String, String)> {
    let fmt = sub
        .get_one::<String>("format")
        .context("--format is required")?
        .to_lowercase();
    let out = sub
        .get_one::<String>("out")
        .context("--out is required")?
        .trim()
        .to_string();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    Ok((fmt, out))
}

fn write_json<T: serde::Serialize>(out: &str, v: &T) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(v)?)?;
    Ok(())
}

fn cell(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn export_net_worth(state: &mut DashboardState, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = target(sub)?;
    let chart = super::net_worth::chart(state, sub)?;
    if fmt == "json" {
        write_json(&out, &chart)?;
    } else {
        let mut wtr = csv::Writer::from_path(&out)?;
        let mut header = vec![DATE_KEY.to_string()];
        header.extend(chart.categories.iter().cloned());
        wtr.write_record(&header)?;
        for p in &chart.points {
            let mut rec = vec![p.date.to_string()];
            rec.extend(chart.categories.iter().map(|name| cell(p.get(name))));
            wtr.write_record(&rec)?;
        }
        wtr.flush()?;
    }
    println!("Exported net worth to {}", out);
    Ok(())
}

fn export_breakdown(state: &mut DashboardState, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = target(sub)?;
    let slices = super::breakdown::slices(state, sub)?;
    if fmt == "json" {
        write_json(&out, &slices)?;
    } else {
        let mut wtr = csv::Writer::from_path(&out)?;
        wtr.write_record(["category", "amount"])?;
        for s in &slices {
            wtr.write_record([s.name.clone(), s.value.to_string()])?;
        }
        wtr.flush()?;
    }
    println!("Exported spend breakdown to {}", out);
    Ok(())
}

fn export_monthly(state: &mut DashboardState, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = target(sub)?;
    let grid = state.monthly(super::window_from(cfg, sub)?)?;
    if fmt == "json" {
        write_json(&out, &grid)?;
    } else {
        let mut wtr = csv::Writer::from_path(&out)?;
        let mut header = vec!["month".to_string()];
        header.extend(grid.years.iter().map(|y| y.to_string()));
        wtr.write_record(&header)?;
        for r in &grid.rows {
            let mut rec = vec![r.label.clone()];
            rec.extend(r.totals.iter().map(|t| cell(*t)));
            wtr.write_record(&rec)?;
        }
        wtr.flush()?;
    }
    println!("Exported monthly spend to {}", out);
    Ok(())
}
