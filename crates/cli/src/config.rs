// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rotation settings: built-in defaults, then an optional TOML file, then
//! command-line flags.
//!
//! ```toml
//! keep = false
//!
//! [quotas]
//! hours = 48
//! days = 14
//! ```

use std::path::{Path, PathBuf};

use gfs_core::{Mode, Policy, Quotas};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a config file. Missing keys fall back to built-in defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub quotas: Quotas,
    pub keep: bool,
}

/// Values given on the command line; `None` leaves the lower layer alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub minutes: Option<u32>,
    pub hours: Option<u32>,
    pub days: Option<u32>,
    pub weeks: Option<u32>,
    pub months: Option<u32>,
    pub years: Option<u32>,
    pub keep: bool,
}

impl Overrides {
    fn quota(&self, policy: Policy) -> Option<u32> {
        match policy {
            Policy::Minutely => self.minutes,
            Policy::Hourly => self.hours,
            Policy::Daily => self.days,
            Policy::Weekly => self.weeks,
            Policy::Monthly => self.months,
            Policy::Yearly => self.years,
        }
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub quotas: Quotas,
    pub mode: Mode,
}

impl Settings {
    fn from_file(file: FileConfig) -> Self {
        Self { quotas: file.quotas, mode: mode(file.keep) }
    }

    /// Layer command-line values on top. `--keep` can only switch the mode
    /// to keep, never back to forget.
    pub fn apply(mut self, overrides: &Overrides) -> Self {
        for policy in Policy::ALL {
            if let Some(quota) = overrides.quota(policy) {
                self.quotas.set(policy, quota);
            }
        }
        if overrides.keep {
            self.mode = Mode::Keep;
        }
        self
    }
}

fn mode(keep: bool) -> Mode {
    if keep {
        Mode::Keep
    } else {
        Mode::Forget
    }
}

pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Resolve settings from `path` (or `GFS_CONFIG`) and the command line.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<Settings, ConfigError> {
    let path = path.map(Path::to_path_buf).or_else(crate::env::config_path);
    let base = match path {
        Some(path) => {
            let file = load(&path)?;
            tracing::debug!(path = %path.display(), "loaded config file");
            Settings::from_file(file)
        }
        None => Settings::default(),
    };
    let settings = base.apply(overrides);
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
