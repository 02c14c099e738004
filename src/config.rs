// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::charts::monthly::DEFAULT_WINDOW_YEARS;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Moneyboard", "moneyboard"));

pub const API_URL_ENV: &str = "MONEYBOARD_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
    pub window_years: u32,
    /// Used for labels when the backend does not name its base currency.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000/api".into(),
            timeout_secs: 15,
            window_years: DEFAULT_WINDOW_YEARS,
            currency: "CHF".into(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Read `path`; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("Parse config at {}", path.display()))
    }

    /// Platform config file, then `MONEYBOARD_API_URL`.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&config_path()?)?;
        cfg.apply_env_override(std::env::var(API_URL_ENV).ok());
        Ok(cfg)
    }

    pub fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            self.api_url = url;
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config dir")?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Write config at {}", path.display()))
    }
}
