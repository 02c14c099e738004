// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::errors::{ChartError, ChartResult};
use crate::models::{CategoryAmounts, Preset, SpendPerMonth};

pub type CategoryTotal = BTreeMap<String, Decimal>;

fn accumulate(total: &mut CategoryTotal, bucket: &CategoryAmounts) -> ChartResult<()> {
    for (category, amount) in bucket {
        let slot = total.entry(category.clone()).or_insert(Decimal::ZERO);
        *slot = slot.checked_add(*amount).ok_or_else(|| {
            ChartError::InvalidInput(format!("spend total for '{}' overflows", category))
        })?;
    }
    Ok(())
}

/// Sum spend per category.
///
/// With no presets every bucket counts. Otherwise only the buckets the presets
/// name are folded in; presets pointing at a month without data contribute
/// nothing. A preset listed twice counts twice. A total that no longer fits
/// a `Decimal` is `InvalidInput`.
pub fn aggregate_categories(
    spend: &SpendPerMonth,
    presets: &[Preset],
) -> ChartResult<CategoryTotal> {
    let mut total = CategoryTotal::new();
    if presets.is_empty() {
        for years in spend.months.values() {
            for bucket in years.values() {
                accumulate(&mut total, bucket)?;
            }
        }
        return Ok(total);
    }

    for preset in presets {
        match spend.bucket(preset.month, preset.year) {
            Some(bucket) => accumulate(&mut total, bucket)?,
            None => tracing::debug!(%preset, "no spend recorded for preset"),
        }
    }
    Ok(total)
}

/// A donut chart slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub name: String,
    pub value: f64,
}

/// Slices ordered by amount, largest first; equal amounts by name.
pub fn breakdown_slices(total: &CategoryTotal) -> Vec<BreakdownSlice> {
    let mut items: Vec<(&String, &Decimal)> = total.iter().collect();
    items.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    items
        .into_iter()
        .map(|(name, amount)| BreakdownSlice {
            name: name.clone(),
            value: amount.to_f64().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend() -> SpendPerMonth {
        let mut s = SpendPerMonth::default();
        s.insert(1, 2024, "Food", Decimal::from(50)).unwrap();
        s.insert(1, 2024, "Rent", Decimal::from(1000)).unwrap();
        s.insert(2, 2024, "Food", Decimal::from(30)).unwrap();
        s
    }

    fn preset(month: u32, year: i32) -> Preset {
        Preset::new(month, year).unwrap()
    }

    #[test]
    fn unscoped_sums_every_bucket() {
        let total = aggregate_categories(&spend(), &[]).unwrap();
        assert_eq!(total.len(), 2);
        assert_eq!(total["Food"], Decimal::from(80));
        assert_eq!(total["Rent"], Decimal::from(1000));
    }

    #[test]
    fn scoped_reads_only_named_buckets() {
        let total = aggregate_categories(&spend(), &[preset(1, 2024)]).unwrap();
        assert_eq!(total["Food"], Decimal::from(50));
        assert_eq!(total["Rent"], Decimal::from(1000));
    }

    #[test]
    fn missing_bucket_is_skipped() {
        assert!(aggregate_categories(&spend(), &[preset(3, 2024)]).unwrap().is_empty());
        assert!(aggregate_categories(&spend(), &[preset(1, 2023)]).unwrap().is_empty());
    }

    #[test]
    fn repeated_categories_across_presets_add_up() {
        let total = aggregate_categories(&spend(), &[preset(2, 2024), preset(1, 2024)]).unwrap();
        assert_eq!(total["Food"], Decimal::from(80));
    }

    #[test]
    fn covering_presets_match_unscoped() {
        let presets = [preset(2, 2024), preset(1, 2024)];
        assert_eq!(
            aggregate_categories(&spend(), &presets).unwrap(),
            aggregate_categories(&spend(), &[]).unwrap()
        );
    }

    #[test]
    fn fractional_amounts_sum_exactly_in_any_order() {
        let mut s = SpendPerMonth::default();
        s.insert(1, 2024, "Coffee", Decimal::new(1, 1)).unwrap();
        s.insert(2, 2024, "Coffee", Decimal::new(2, 1)).unwrap();
        s.insert(3, 2024, "Coffee", Decimal::new(3, 1)).unwrap();
        let forward = aggregate_categories(&s, &[preset(1, 2024), preset(2, 2024), preset(3, 2024)]).unwrap();
        let backward = aggregate_categories(&s, &[preset(3, 2024), preset(2, 2024), preset(1, 2024)]).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward["Coffee"], Decimal::new(6, 1));
    }

    #[test]
    fn overflowing_total_is_invalid_input() {
        let s: SpendPerMonth = serde_json::from_str(
            r#"{"months": {"1": {"2024": {"Food": 5e28}}, "2": {"2024": {"Food": 5e28}}}}"#,
        )
        .unwrap();
        assert!(matches!(
            aggregate_categories(&s, &[]),
            Err(ChartError::InvalidInput(msg)) if msg.contains("'Food'")
        ));
        assert!(aggregate_categories(&s, &[preset(1, 2024)]).is_ok());
    }

    #[test]
    fn slices_sort_largest_first() {
        let slices = breakdown_slices(&aggregate_categories(&spend(), &[]).unwrap());
        assert_eq!(slices[0].name, "Rent");
        assert_eq!(slices[0].value, 1000.0);
        assert_eq!(slices[1].name, "Food");
        assert_eq!(slices[1].value, 80.0);
    }
}
