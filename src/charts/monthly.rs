// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::errors::{ChartError, ChartResult};
use crate::models::{CategoryAmounts, SpendPerMonth};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const DEFAULT_WINDOW_YEARS: u32 = 3;
pub const MAX_WINDOW_YEARS: u32 = 50;

/// Trailing run of years ending at `reference_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthlyWindow {
    reference_year: i32,
    years: u32,
    #[serde(skip)]
    first_year: i32,
}

impl MonthlyWindow {
    /// `years` must be in `1..=MAX_WINDOW_YEARS` and the first year must be
    /// representable.
    pub fn new(reference_year: i32, years: u32) -> ChartResult<Self> {
        if years == 0 || years > MAX_WINDOW_YEARS {
            return Err(ChartError::InvalidInput(format!(
                "monthly window of {} years is outside 1..={}",
                years, MAX_WINDOW_YEARS
            )));
        }
        let first_year = i32::try_from(years - 1)
            .ok()
            .and_then(|back| reference_year.checked_sub(back))
            .ok_or_else(|| {
                ChartError::InvalidInput(format!(
                    "monthly window of {} years ending in {} starts before year {}",
                    years,
                    reference_year,
                    i32::MIN
                ))
            })?;
        Ok(Self {
            reference_year,
            years,
            first_year,
        })
    }

    /// Window of `years` ending at the current local year.
    pub fn current(years: u32) -> ChartResult<Self> {
        Self::new(Local::now().year(), years)
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    /// Years covered, oldest first.
    pub fn span(&self) -> Vec<i32> {
        (self.first_year..=self.reference_year).collect()
    }
}

impl Default for MonthlyWindow {
    fn default() -> Self {
        let reference_year = Local::now().year();
        Self {
            reference_year,
            years: DEFAULT_WINDOW_YEARS,
            first_year: reference_year - (DEFAULT_WINDOW_YEARS as i32 - 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: u32,
    pub label: String,
    /// One cell per window year; `None` when that year has no data for the month.
    pub totals: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyComparison {
    pub years: Vec<i32>,
    pub rows: Vec<MonthRow>,
}

pub fn month_label(month: u32) -> Option<&'static str> {
    MONTH_LABELS.get(month.checked_sub(1)? as usize).copied()
}

fn bucket_total(month: u32, year: i32, categories: &CategoryAmounts) -> ChartResult<f64> {
    let sum = categories
        .values()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(*amount))
        .ok_or_else(|| {
            ChartError::InvalidInput(format!("spend total for {}/{} overflows", month, year))
        })?;
    Ok(sum.to_f64().unwrap_or_default())
}

/// Total spend per (month, year), one row per month that has any data.
/// A cell whose sum no longer fits a `Decimal` is `InvalidInput`.
pub fn monthly_totals(
    spend: &SpendPerMonth,
    window: MonthlyWindow,
) -> ChartResult<MonthlyComparison> {
    let years = window.span();
    let mut rows = Vec::new();

    for (month, by_year) in &spend.months {
        let Some(label) = month_label(*month) else {
            tracing::warn!(month, "skipping spend bucket with invalid month");
            continue;
        };
        let totals = years
            .iter()
            .map(|year| {
                by_year
                    .get(year)
                    .map(|categories| bucket_total(*month, *year, categories))
                    .transpose()
            })
            .collect::<ChartResult<Vec<_>>>()?;
        rows.push(MonthRow {
            month: *month,
            label: label.to_string(),
            totals,
        });
    }

    Ok(MonthlyComparison { years, rows })
}
