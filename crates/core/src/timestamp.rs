// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp extraction from backup file names.
//!
//! Backup names embed `$(date +%Y%m%d%H%M%S)`, optionally behind directory
//! segments and followed by one extension:
//! `backups/db/20100518193000.tar` parses as 2010-05-18 19:30:00, while
//! `backups/db/20100518193000.tar.gz` is not a match.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::moment::Moment;

/// Number of digits in `YYYYMMDDhhmmss`.
pub const TIMESTAMP_LEN: usize = 14;

/// Errors from extracting a timestamp out of a file name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty file name")]
    Empty,
    #[error("'{text}' is not a YYYYMMDDhhmmss timestamp")]
    Layout { text: String },
    #[error("'{text}' is not a valid calendar date and time")]
    InvalidDate { text: String },
}

/// A backup file name paired with the timestamp embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: String,
    timestamp: NaiveDateTime,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self { name: name.into(), timestamp }
    }

    /// Extract the timestamp from `name`, keeping `name` verbatim.
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        let timestamp = parse_timestamp(name)?;
        Ok(Self::new(name, timestamp))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The timestamp truncated to minute granularity.
    pub fn moment(&self) -> Moment {
        Moment::from_datetime(&self.timestamp)
    }
}

/// Final path segment with its last extension removed.
///
/// Only one suffix goes: `c.tar.gz` becomes `c.tar`. A leading dot is part
/// of the name (`.hidden` has no extension).
pub fn stem(path: &str) -> &str {
    let base = path.rsplit('/').next().unwrap_or(path);
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[..idx],
        _ => base,
    }
}

/// Parse the `YYYYMMDDhhmmss` timestamp embedded in `path`.
pub fn parse_timestamp(path: &str) -> Result<NaiveDateTime, ParseError> {
    if path.is_empty() {
        return Err(ParseError::Empty);
    }
    let text = stem(path);
    if text.len() != TIMESTAMP_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::Layout { text: text.to_string() });
    }

    let field = |range: std::ops::Range<usize>| -> u32 {
        text[range].bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };
    let year = field(0..4) as i32;
    let (month, day) = (field(4..6), field(6..8));
    let (hour, minute, second) = (field(8..10), field(10..12), field(12..14));

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| ParseError::InvalidDate { text: text.to_string() })
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
