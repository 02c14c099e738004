// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod charts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod utils;
