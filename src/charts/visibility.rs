// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ChartPoint;

/// Series names the user has hidden from a chart.
///
/// Hiding zeroes a series' contribution but keeps its legend entry, so the
/// same name can be toggled back on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibilitySet {
    hidden: BTreeSet<String>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide `name` if visible, show it if hidden. Returns whether it is now hidden.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.hidden.remove(name) {
            false
        } else {
            self.hidden.insert(name.to_string());
            true
        }
    }

    pub fn hide(&mut self, name: &str) {
        self.hidden.insert(name.to_string());
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }

    /// Copy of `points` with every hidden series forced to `0.0`.
    ///
    /// Only keys already present in a point are touched; gaps stay gaps and
    /// names nobody plots are ignored.
    pub fn apply(&self, points: &[ChartPoint]) -> Vec<ChartPoint> {
        points
            .iter()
            .map(|p| {
                let mut point = p.clone();
                for name in &self.hidden {
                    if let Some(v) = point.values.get_mut(name) {
                        *v = 0.0;
                    }
                }
                point
            })
            .collect()
    }

    /// Sum of the visible `names` at `point`.
    pub fn visible_total<'a>(
        &self,
        point: &ChartPoint,
        names: impl IntoIterator<Item = &'a String>,
    ) -> f64 {
        names
            .into_iter()
            .filter(|name| !self.is_hidden(name))
            .filter_map(|name| point.get(name))
            .sum()
    }
}

impl<S: Into<String>> FromIterator<S> for VisibilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            hidden: iter.into_iter().map(Into::into).collect(),
        }
    }
}
