// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Result, bail};

use crate::charts::monthly::MAX_WINDOW_YEARS;
use crate::config::{Config, config_path};
use crate::utils::pretty_table;

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let path = config_path()?;
            set(&path, sub)?;
            println!("Saved configuration to {}", path.display());
            Ok(())
        }
        _ => show(cfg),
    }
}

fn show(cfg: &Config) -> Result<()> {
    let rows = vec![
        vec!["config file".into(), config_path()?.display().to_string()],
        vec!["api_url".into(), cfg.api_url.clone()],
        vec!["timeout_secs".into(), cfg.timeout_secs.to_string()],
        vec!["window_years".into(), cfg.window_years.to_string()],
        vec!["currency".into(), cfg.currency.clone()],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

/// Apply the given settings to the file at `path` and write it back.
///
/// Starts from the file itself, not the effective config, so env and flag
/// overrides are never persisted.
pub fn set(path: &Path, sub: &clap::ArgMatches) -> Result<Config> {
    let mut cfg = Config::load_from(path)?;
    if let Some(url) = sub.get_one::<String>("url") {
        let url = url.trim();
        if url.is_empty() {
            bail!("api url cannot be empty");
        }
        cfg.api_url = url.to_string();
    }
    if let Some(timeout) = sub.get_one::<u64>("timeout") {
        cfg.timeout_secs = *timeout;
    }
    if let Some(window) = sub.get_one::<u32>("window") {
        if !(1..=MAX_WINDOW_YEARS).contains(window) {
            bail!("window must be between 1 and {} years", MAX_WINDOW_YEARS);
        }
        cfg.window_years = *window;
    }
    if let Some(ccy) = sub.get_one::<String>("currency") {
        cfg.currency = ccy.trim().to_uppercase();
    }
    cfg.save_to(path)?;
    tracing::info!(path = %path.display(), "configuration saved");
    Ok(cfg)
}
