// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate};

use super::{ChartPoint, check_series_name};
use crate::errors::{ChartError, ChartResult};
use crate::models::NamedSeries;

/// Calendar day (UTC) of a unix timestamp in seconds.
pub fn timestamp_to_date(secs: i64) -> ChartResult<NaiveDate> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| ChartError::InvalidInput(format!("timestamp {} is out of range", secs)))
}

/// Merge a shared timestamp axis with named series into one point per
/// timestamp. Every point carries every series name; gaps become `0.0`.
///
/// A missing timestamp, or a series named like the date field, is `InvalidInput`.
pub fn align_series(
    timestamps: &[Option<i64>],
    series: &[NamedSeries],
) -> ChartResult<Vec<ChartPoint>> {
    let timestamps = timestamps
        .iter()
        .enumerate()
        .map(|(i, ts)| {
            ts.ok_or_else(|| ChartError::InvalidInput(format!("timestamp {} is missing", i)))
        })
        .collect::<ChartResult<Vec<i64>>>()?;
    for s in series {
        check_series_name(&s.name)?;
        if s.values.len() != timestamps.len() {
            return Err(ChartError::InvalidInput(format!(
                "series '{}' has {} values for {} timestamps",
                s.name,
                s.values.len(),
                timestamps.len()
            )));
        }
    }
    if let Some(w) = timestamps.windows(2).find(|w| w[0] >= w[1]) {
        return Err(ChartError::InvalidInput(format!(
            "timestamps must be strictly increasing ({} followed by {})",
            w[0], w[1]
        )));
    }

    let mut points = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        let mut point = ChartPoint::new(timestamp_to_date(*ts)?);
        for s in series {
            point
                .values
                .insert(s.name.clone(), s.values[i].unwrap_or(0.0));
        }
        points.push(point);
    }
    tracing::debug!(
        points = points.len(),
        series = series.len(),
        "aligned balance series"
    );
    Ok(points)
}
