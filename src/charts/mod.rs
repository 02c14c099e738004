// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations from raw portfolio payloads to chart datasets.
//!
//! Nothing in here performs I/O or keeps state between calls; the same inputs
//! always produce the same datasets, which is what lets [`cache::ChartCache`]
//! memoize them.

pub mod align;
pub mod cache;
pub mod categories;
pub mod monthly;
pub mod net_worth;
pub mod prediction;
pub mod visibility;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::{ChartError, ChartResult};

pub use align::align_series;
pub use cache::ChartCache;
pub use categories::{BreakdownSlice, CategoryTotal, aggregate_categories, breakdown_slices};
pub use monthly::{MonthRow, MonthlyComparison, MonthlyWindow, monthly_totals};
pub use net_worth::{NetWorthChart, build_net_worth};
pub use prediction::append_prediction;
pub use visibility::VisibilitySet;

/// Field name of a point's date. No series may use it.
pub const DATE_KEY: &str = "date";

fn check_series_name(name: &str) -> ChartResult<()> {
    if name == DATE_KEY {
        return Err(ChartError::InvalidInput(format!(
            "series name '{}' is reserved for the point date",
            DATE_KEY
        )));
    }
    Ok(())
}

/// One dated record of a chart, keyed by series name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl ChartPoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_serializes_date_beside_series() {
        let mut point = ChartPoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        point.values.insert("Neon".into(), 1.5);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!({"date": "2024-01-02", "Neon": 1.5}));
    }
}
