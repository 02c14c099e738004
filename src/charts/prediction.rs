// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Days;

use super::{ChartPoint, check_series_name};
use crate::errors::{ChartError, ChartResult};
use crate::models::PredictionPayload;

/// Extend `history` with one point per prediction value, dated one day after
/// another starting the day after the last historical point.
///
/// Appended points only carry the prediction's own key; historical series are
/// left as gaps for the renderer to bridge.
pub fn append_prediction(
    mut history: Vec<ChartPoint>,
    prediction: &PredictionPayload,
) -> ChartResult<Vec<ChartPoint>> {
    check_series_name(&prediction.name)?;
    let anchor = match history.last() {
        Some(last) => last.date,
        None => {
            return Err(ChartError::InvalidInput(
                "cannot anchor a projection with no historical data".into(),
            ));
        }
    };

    history.reserve(prediction.values.len());
    for (i, value) in prediction.values.iter().enumerate() {
        let date = anchor
            .checked_add_days(Days::new(i as u64 + 1))
            .ok_or_else(|| {
                ChartError::InvalidInput(format!(
                    "projection step {} overflows the calendar from {}",
                    i + 1,
                    anchor
                ))
            })?;
        let mut point = ChartPoint::new(date);
        point
            .values
            .insert(prediction.name.clone(), value.unwrap_or(0.0));
        history.push(point);
    }
    Ok(history)
}
