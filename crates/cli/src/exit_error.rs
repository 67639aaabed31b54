// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! `run()` returns `ExitError` for failures with a defined exit status and
//! leaves `main()` to print the message and terminate.

use std::fmt;

use crate::config::ConfigError;

/// Unreadable input stream.
pub const EXIT_INPUT: i32 = 1;
/// Bad configuration; matches clap's usage-error status.
pub const EXIT_CONFIG: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn input(err: std::io::Error) -> Self {
        Self::new(EXIT_INPUT, format!("failed to read input: {err}"))
    }
}

impl From<ConfigError> for ExitError {
    fn from(err: ConfigError) -> Self {
        Self::new(EXIT_CONFIG, err.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
