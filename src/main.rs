// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use moneyboard::{cli, commands, config::Config, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let matches = cli::build_cli().get_matches();
    let cfg = commands::effective_config(Config::load()?, &matches);

    match matches.subcommand() {
        Some(("net-worth", sub)) => {
            let mut state = commands::load_dashboard(&cfg, sub)?;
            commands::net_worth::handle(&mut state, &cfg, sub)?
        }
        Some(("breakdown", sub)) => {
            let mut state = commands::load_dashboard(&cfg, sub)?;
            commands::breakdown::handle(&mut state, &cfg, sub)?
        }
        Some(("monthly", sub)) => {
            let mut state = commands::load_dashboard(&cfg, sub)?;
            commands::monthly::handle(&mut state, &cfg, sub)?
        }
        Some(("export", sub)) => {
            let mut state = commands::load_dashboard(&cfg, sub)?;
            commands::exporter::handle(&mut state, &cfg, sub)?
        }
        Some(("transactions", sub)) => {
            commands::transactions::handle(&commands::client(&cfg)?, sub)?
        }
        Some(("config", sub)) => commands::config::handle(&cfg, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
