// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the dataset as JSON instead of a table")
}

fn preset_arg() -> Arg {
    Arg::new("preset")
        .long("preset")
        .value_name("YYYY-MM")
        .action(ArgAction::Append)
        .help("Reporting month; repeat to combine several")
}

fn window_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .help("Most recent year of the comparison window (default: this year)"),
    )
    .arg(
        Arg::new("window")
            .long("window")
            .value_parser(value_parser!(u32))
            .help("Number of years to compare"),
    )
}

pub fn build_cli() -> Command {
    Command::new("moneyboard")
        .version(clap::crate_version!())
        .about("Net worth, spend breakdown and monthly comparison charts from your finance backend")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Backend base URL (overrides config and MONEYBOARD_API_URL)"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .global(true)
                .value_name("FILE")
                .help("Read a portfolio summary JSON file instead of fetching"),
        )
        .subcommand(
            Command::new("net-worth")
                .about("Stacked balances over time with the backend projection")
                .arg(
                    Arg::new("hide")
                        .long("hide")
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Hide a series (repeatable); it stays in the legend"),
                )
                .arg(
                    Arg::new("no-prediction")
                        .long("no-prediction")
                        .action(ArgAction::SetTrue)
                        .help("Leave the projection off the chart"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("breakdown")
                .about("Spend per category, optionally scoped to reporting months")
                .arg(preset_arg())
                .arg(json_flag()),
        )
        .subcommand(window_args(
            Command::new("monthly")
                .about("Spend per month compared across recent years")
                .arg(json_flag()),
        ))
        .subcommand(
            Command::new("transactions")
                .about("Ledger transactions for one reporting month")
                .arg(preset_arg().required(true).action(ArgAction::Set))
                .arg(
                    Arg::new("ledger")
                        .long("ledger")
                        .help("Ledger id (default: first ledger)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("export")
                .about("Write a chart dataset to a file")
                .subcommand_required(true)
                .subcommand(export_target("net-worth").arg(
                    Arg::new("hide")
                        .long("hide")
                        .action(ArgAction::Append),
                ))
                .subcommand(export_target("breakdown").arg(preset_arg()))
                .subcommand(window_args(export_target("monthly"))),
        )
        .subcommand(
            Command::new("config")
                .about("Show the effective configuration (or change it with `set`)")
                .subcommand(
                    Command::new("set")
                        .about("Persist settings to the config file")
                        .arg_required_else_help(true)
                        .arg(Arg::new("url").long("url").help("Backend base URL"))
                        .arg(
                            Arg::new("timeout")
                                .long("timeout")
                                .value_parser(value_parser!(u64))
                                .help("Request timeout in seconds"),
                        )
                        .arg(
                            Arg::new("window")
                                .long("window")
                                .value_parser(value_parser!(u32))
                                .help("Default number of years for monthly comparisons"),
                        )
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .help("Fallback currency label"),
                        ),
                ),
        )
}

fn export_target(name: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("format")
                .long("format")
                .required(true)
                .value_parser(["csv", "json"]),
        )
        .arg(Arg::new("out").long("out").required(true))
}
