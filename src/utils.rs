// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;
use std::sync::Once;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

use crate::models::{PortfolioSummaryResponse, Preset};

const UA: &str = concat!(
    "moneyboard/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/moneyboard)"
);

static TRACING_INIT: Once = Once::new();

/// Install the fmt subscriber once; `RUST_LOG` refines the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("moneyboard=info"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn http_client(timeout_secs: u64) -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Parse `YYYY-MM` into a preset.
pub fn parse_preset(s: &str) -> Result<Preset> {
    let s = s.trim();
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    let (year, month) = s
        .split_once('-')
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(Preset::new(month.parse()?, year.parse()?)?)
}

/// `CHF 1'234`: whole units, apostrophe thousands separators.
pub fn fmt_money(amount: f64, ccy: &str) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{} {}{}", ccy, sign, grouped)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn read_summary_file(path: &Path) -> Result<PortfolioSummaryResponse> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Read portfolio summary at {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Parse portfolio summary at {}", path.display()))
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}
