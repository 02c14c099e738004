// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};

use crate::api::ApiClient;
use crate::models::PeriodTransactions;
use crate::utils::{maybe_print_json, parse_preset, pretty_table};

pub fn handle(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let preset = parse_preset(
        sub.get_one::<String>("preset")
            .context("--preset is required")?,
    )?;
    let ledger_id = match sub.get_one::<String>("ledger") {
        Some(id) => id.trim().to_string(),
        None => client
            .ledgers()?
            .ledgers
            .into_iter()
            .next()
            .map(|l| l.id)
            .ok_or_else(|| anyhow!("No ledgers available"))?,
    };
    let data = client
        .ledger_transactions(&ledger_id, preset)
        .with_context(|| format!("Load transactions of ledger {} for {}", ledger_id, preset))?;
    if !maybe_print_json(sub.get_flag("json"), &data)? {
        println!("{} ({})", data.name, preset);
        println!(
            "{}",
            pretty_table(&["Symbol", "Date", "Amount", "Description", "Category"], rows(&data))
        );
    }
    Ok(())
}

pub fn rows(data: &PeriodTransactions) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for ledger in &data.ledgers {
        for r in &ledger.records {
            out.push(vec![
                ledger.symbol.clone(),
                r.date.format("%a %b %d %Y").to_string(),
                r.amount.map(|a| format!("{:.2}", a)).unwrap_or_default(),
                r.description.clone(),
                r.category.clone().unwrap_or_default(),
            ]);
        }
    }
    out
}
