// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ChartError;

/// One account's balances, index-aligned to a shared timestamp axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    #[serde(rename = "series")]
    pub values: Vec<Option<f64>>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalancePayload {
    /// Seconds since the unix epoch, strictly increasing. The backend may
    /// send `null`; alignment rejects those.
    pub timestamps: Vec<Option<i64>>,
    #[serde(rename = "balances")]
    pub series: Vec<NamedSeries>,
}

/// Forward values with no timestamps: position `i` lands `i + 1` days after
/// the last historical date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub name: String,
    #[serde(rename = "series")]
    pub values: Vec<Option<f64>>,
}

pub type CategoryAmounts = BTreeMap<String, Decimal>;

/// month -> year -> category -> signed amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendPerMonth {
    pub months: BTreeMap<u32, BTreeMap<i32, CategoryAmounts>>,
}

impl SpendPerMonth {
    pub fn bucket(&self, month: u32, year: i32) -> Option<&CategoryAmounts> {
        self.months.get(&month).and_then(|years| years.get(&year))
    }

    /// Add `amount` to a category's bucket, creating the bucket if needed.
    pub fn insert(
        &mut self,
        month: u32,
        year: i32,
        category: &str,
        amount: Decimal,
    ) -> Result<(), ChartError> {
        let slot = self
            .months
            .entry(month)
            .or_default()
            .entry(year)
            .or_default()
            .entry(category.to_string())
            .or_insert(Decimal::ZERO);
        *slot = slot.checked_add(amount).ok_or_else(|| {
            ChartError::InvalidInput(format!(
                "spend for '{}' in {}/{} overflows",
                category, month, year
            ))
        })?;
        Ok(())
    }
}

fn default_base_currency() -> String {
    "CHF".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummaryResponse {
    pub total_balance: BalancePayload,
    #[serde(default)]
    pub total_prediction: Option<PredictionPayload>,
    #[serde(default)]
    pub spend_per_month: SpendPerMonth,
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

/// A single (month, year) reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Preset {
    pub month: u32,
    pub year: i32,
}

impl Preset {
    pub fn new(month: u32, year: i32) -> Result<Self, ChartError> {
        if !(1..=12).contains(&month) {
            return Err(ChartError::InvalidInput(format!(
                "preset month {} is outside 1..=12",
                month
            )));
        }
        Ok(Self { month, year })
    }

    /// First and last calendar day of the preset's month.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate), ChartError> {
        let invalid = || ChartError::InvalidInput(format!("invalid preset {}", self));
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(invalid)?;
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let last = next.pred_opt().ok_or_else(invalid)?;
        Ok((first, last))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerMeta {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLedgerResponse {
    pub ledgers: Vec<LedgerMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub date: NaiveDate,
    pub amount: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolLedger {
    pub symbol: String,
    #[serde(default)]
    pub records: Vec<LedgerRecord>,
}

/// A ledger's transactions, as returned for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTransactions {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ledgers: Vec<SymbolLedger>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_rejects_month_thirteen() {
        assert!(Preset::new(13, 2024).is_err());
        assert!(Preset::new(0, 2024).is_err());
        assert_eq!(Preset::new(12, 2024).unwrap().to_string(), "2024-12");
    }

    #[test]
    fn preset_date_range_handles_leap_february_and_december() {
        let (from, to) = Preset::new(2, 2024).unwrap().date_range().unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, to) = Preset::new(12, 2023).unwrap().date_range().unwrap();
        assert_eq!(to, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn summary_parses_wire_shape_with_string_month_keys() {
        let raw = r#"{
            "total_balance": {
                "timestamps": [0, 86400],
                "balances": [{"id": "n1", "name": "Neon", "currency": "CHF", "series": [1.5, null]}]
            },
            "total_prediction": {"name": "Prediction", "series": [2.0]},
            "spend_per_month": {"months": {"1": {"2024": {"Food": 50, "Rent": 1000.25}}}}
        }"#;
        let summary: PortfolioSummaryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.base_currency, "CHF");
        assert_eq!(summary.total_balance.series[0].values, vec![Some(1.5), None]);
        assert_eq!(
            summary.spend_per_month.bucket(1, 2024).unwrap()["Rent"],
            Decimal::new(100025, 2)
        );
        assert_eq!(summary.total_prediction.unwrap().values, vec![Some(2.0)]);
    }

    #[test]
    fn null_timestamp_still_parses_spend() {
        let raw = r#"{
            "total_balance": {"timestamps": [0, null], "balances": []},
            "spend_per_month": {"months": {"3": {"2024": {"Food": 12}}}}
        }"#;
        let summary: PortfolioSummaryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.total_balance.timestamps, vec![Some(0), None]);
        assert_eq!(
            summary.spend_per_month.bucket(3, 2024).unwrap()["Food"],
            Decimal::from(12)
        );
    }

    #[test]
    fn insert_rejects_overflowing_amounts() {
        let mut s = SpendPerMonth::default();
        let big = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        s.insert(1, 2024, "Food", big).unwrap();
        assert!(s.insert(1, 2024, "Food", big).is_err());
    }
}
