// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Config file used when `--config` is not given.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("GFS_CONFIG").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Log filter directives (`tracing_subscriber::EnvFilter` syntax).
pub fn log_filter() -> Option<String> {
    std::env::var("GFS_LOG").ok().filter(|s| !s.is_empty())
}
