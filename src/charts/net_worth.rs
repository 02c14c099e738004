// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use super::{ChartPoint, VisibilitySet, align_series, append_prediction};
use crate::errors::ChartResult;
use crate::models::{BalancePayload, PredictionPayload};

/// Stacked net worth dataset, ready for an area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorthChart {
    /// Legend order: historical series as received, then the prediction.
    pub categories: Vec<String>,
    pub points: Vec<ChartPoint>,
    /// Number of leading points that come from history rather than the projection.
    pub historical_len: usize,
    /// Sum of the visible historical series at the latest historical point.
    pub current_total: f64,
}

impl NetWorthChart {
    pub fn historical(&self) -> &[ChartPoint] {
        &self.points[..self.historical_len]
    }

    pub fn projection(&self) -> &[ChartPoint] {
        &self.points[self.historical_len..]
    }

    /// Drop the projected points and any legend entry only they use.
    pub fn without_projection(mut self) -> Self {
        self.points.truncate(self.historical_len);
        let points = &self.points;
        self.categories
            .retain(|name| points.iter().any(|p| p.values.contains_key(name)));
        self
    }
}

/// Align balances, append the projection when one is given and there is
/// history to anchor it to, then zero the hidden series.
pub fn build_net_worth(
    balances: &BalancePayload,
    prediction: Option<&PredictionPayload>,
    hidden: &VisibilitySet,
) -> ChartResult<NetWorthChart> {
    let history = align_series(&balances.timestamps, &balances.series)?;
    let historical_len = history.len();

    let mut categories: Vec<String> = Vec::with_capacity(balances.series.len() + 1);
    for s in &balances.series {
        if !categories.contains(&s.name) {
            categories.push(s.name.clone());
        }
    }

    let current_total = history
        .last()
        .map(|last| hidden.visible_total(last, &categories))
        .unwrap_or(0.0);

    let points = match prediction {
        Some(p) if !history.is_empty() => {
            if !categories.contains(&p.name) {
                categories.push(p.name.clone());
            }
            append_prediction(history, p)?
        }
        Some(p) => {
            tracing::warn!(series = %p.name, "no balance history; projection dropped");
            history
        }
        None => history,
    };

    Ok(NetWorthChart {
        categories,
        points: hidden.apply(&points),
        historical_len,
        current_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedSeries;

    fn balances() -> BalancePayload {
        BalancePayload {
            timestamps: vec![Some(0), Some(86_400), Some(172_800)],
            series: vec![
                NamedSeries::new("Neon", vec![Some(10.0), Some(20.0), Some(30.0)]),
                NamedSeries::new("UBS", vec![Some(1.0), None, Some(3.0)]),
            ],
        }
    }

    fn prediction() -> PredictionPayload {
        PredictionPayload {
            name: "Prediction".into(),
            values: vec![Some(5.0), Some(5.0)],
        }
    }

    #[test]
    fn builds_history_and_projection() {
        let chart = build_net_worth(&balances(), Some(&prediction()), &VisibilitySet::new()).unwrap();
        assert_eq!(chart.categories, vec!["Neon", "UBS", "Prediction"]);
        assert_eq!(chart.historical().len(), 3);
        assert_eq!(chart.projection().len(), 2);
        assert_eq!(chart.current_total, 33.0);
    }

    #[test]
    fn hidden_series_keep_legend_and_leave_total() {
        let hidden: VisibilitySet = ["UBS"].into_iter().collect();
        let chart = build_net_worth(&balances(), Some(&prediction()), &hidden).unwrap();
        assert!(chart.categories.contains(&"UBS".to_string()));
        assert_eq!(chart.current_total, 30.0);
        assert!(chart.historical().iter().all(|p| p.get("UBS") == Some(0.0)));
    }

    #[test]
    fn without_projection_keeps_history_only() {
        let chart = build_net_worth(&balances(), Some(&prediction()), &VisibilitySet::new())
            .unwrap()
            .without_projection();
        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.categories, vec!["Neon", "UBS"]);
    }

    #[test]
    fn empty_history_drops_projection() {
        let chart = build_net_worth(
            &BalancePayload::default(),
            Some(&prediction()),
            &VisibilitySet::new(),
        )
        .unwrap();
        assert!(chart.points.is_empty());
        assert!(chart.categories.is_empty());
        assert_eq!(chart.current_total, 0.0);
    }
}
