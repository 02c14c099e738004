// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by the chart derivation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The caller broke a documented precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
