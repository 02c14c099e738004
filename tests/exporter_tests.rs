// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneyboard::{cli, commands, config::Config};
use serde_json::json;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

fn summary_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({
            "total_balance": {
                "timestamps": [0, 86400],
                "balances": [
                    {"name": "Neon", "series": [100.0, null]},
                    {"name": "UBS", "series": [50.0, 60.0]}
                ]
            },
            "total_prediction": {"name": "Prediction", "series": [200.0]},
            "spend_per_month": {"months": {
                "1": {"2024": {"Food": 50, "Rent": 1000}, "2022": {"Food": 10}},
                "2": {"2024": {"Food": 30}}
            }},
            "base_currency": "CHF"
        })
    )
    .unwrap();
    file.flush().unwrap();
    file
}

fn run_export(args: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(args);
    let cfg = Config::default();
    if let Some(("export", export_m)) = matches.subcommand() {
        let mut state = commands::load_dashboard(&cfg, export_m)?;
        commands::exporter::handle(&mut state, &cfg, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_breakdown_scoped_to_presets_as_json() {
    let input = summary_file();
    let dir = tempdir().unwrap();
    let out = dir.path().join("breakdown.json");
    run_export(&[
        "moneyboard",
        "--input",
        input.path().to_str().unwrap(),
        "export",
        "breakdown",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
        "--preset",
        "2024-01",
        "--preset",
        "2024-02",
    ])
    .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"name": "Rent", "value": 1000.0},
            {"name": "Food", "value": 80.0}
        ])
    );
}

#[test]
fn export_net_worth_csv_leaves_projection_gaps_empty() {
    let input = summary_file();
    let dir = tempdir().unwrap();
    let out = dir.path().join("net_worth.csv");
    run_export(&[
        "moneyboard",
        "--input",
        input.path().to_str().unwrap(),
        "export",
        "net-worth",
        "--format",
        "csv",
        "--out",
        out.to_str().unwrap(),
        "--hide",
        "UBS",
    ])
    .unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "date,Neon,UBS,Prediction",
            "1970-01-01,100,0,",
            "1970-01-02,0,0,",
            "1970-01-03,,,200",
        ]
    );
}

#[test]
fn export_monthly_marks_absent_years_as_null() {
    let input = summary_file();
    let dir = tempdir().unwrap();
    let out = dir.path().join("monthly.json");
    run_export(&[
        "moneyboard",
        "--input",
        input.path().to_str().unwrap(),
        "export",
        "monthly",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
        "--year",
        "2024",
    ])
    .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed["years"], json!([2022, 2023, 2024]));
    assert_eq!(parsed["rows"][0]["label"], "Jan");
    assert_eq!(parsed["rows"][0]["totals"], json!([10.0, null, 1050.0]));
    assert_eq!(parsed["rows"][1]["totals"], json!([null, null, 30.0]));
}

#[test]
fn export_rejects_unknown_format() {
    let res = cli::build_cli().try_get_matches_from([
        "moneyboard",
        "export",
        "breakdown",
        "--format",
        "xml",
        "--out",
        "ignored.xml",
    ]);
    assert!(res.is_err());
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let out = dir.path().join("out.json");
    let res = run_export(&[
        "moneyboard",
        "--input",
        missing.to_str().unwrap(),
        "export",
        "breakdown",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(res.is_err());
    assert!(!out.exists());
}
