// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rotation planning: run every policy over one file list and split it into
//! files to keep and files to forget.

use serde::Deserialize;

use crate::policy::Policy;
use crate::select::{select_files, KeepSet};
use crate::timestamp::FileRecord;

/// Multiplier applied to the natural period of each granularity when
/// building the default quotas.
pub const DEFAULT_FACTOR: u32 = 3;

/// Number of buckets to keep for each granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Quotas {
    pub minutes: u32,
    pub hours: u32,
    pub days: u32,
    pub weeks: u32,
    pub months: u32,
    pub years: u32,
}

impl Default for Quotas {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_FACTOR * 60,
            hours: DEFAULT_FACTOR * 24,
            days: DEFAULT_FACTOR * 7,
            weeks: DEFAULT_FACTOR * 4,
            months: DEFAULT_FACTOR * 12,
            years: DEFAULT_FACTOR * 5,
        }
    }
}

impl Quotas {
    /// All quotas set to zero, so nothing is kept until some are raised.
    pub const fn none() -> Self {
        Self { minutes: 0, hours: 0, days: 0, weeks: 0, months: 0, years: 0 }
    }

    pub fn get(&self, policy: Policy) -> u32 {
        match policy {
            Policy::Minutely => self.minutes,
            Policy::Hourly => self.hours,
            Policy::Daily => self.days,
            Policy::Weekly => self.weeks,
            Policy::Monthly => self.months,
            Policy::Yearly => self.years,
        }
    }

    pub fn set(&mut self, policy: Policy, quota: u32) {
        let slot = match policy {
            Policy::Minutely => &mut self.minutes,
            Policy::Hourly => &mut self.hours,
            Policy::Daily => &mut self.days,
            Policy::Weekly => &mut self.weeks,
            Policy::Monthly => &mut self.months,
            Policy::Yearly => &mut self.years,
        };
        *slot = quota;
    }

    /// Each policy with its quota, finest first.
    pub fn iter(&self) -> impl Iterator<Item = (Policy, u32)> + '_ {
        Policy::ALL.into_iter().map(move |policy| (policy, self.get(policy)))
    }
}

/// Which side of the split to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    Keep,
    #[default]
    Forget,
}

/// Outcome of running every policy over a file list.
#[derive(Debug, Clone)]
pub struct Plan {
    files: Vec<FileRecord>,
    keep: KeepSet,
}

impl Plan {
    /// All files, newest first.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn keep_set(&self) -> &KeepSet {
        &self.keep
    }

    pub fn is_kept(&self, file: &FileRecord) -> bool {
        self.keep.contains(file.name())
    }

    pub fn kept(&self) -> impl Iterator<Item = &FileRecord> {
        self.emit(Mode::Keep)
    }

    pub fn forgotten(&self) -> impl Iterator<Item = &FileRecord> {
        self.emit(Mode::Forget)
    }

    /// Files on the `mode` side of the split, newest first.
    pub fn emit(&self, mode: Mode) -> impl Iterator<Item = &FileRecord> {
        let want = mode == Mode::Keep;
        self.files.iter().filter(move |f| self.is_kept(f) == want)
    }
}

/// Parse candidate names, one per line. Surrounding whitespace is trimmed
/// and lines without a timestamp are dropped.
pub fn parse_lines<I, S>(lines: I) -> Vec<FileRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| match FileRecord::parse(line.as_ref().trim()) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(error = %e, "skipping line");
                None
            }
        })
        .collect()
}

/// Stable sort, newest first. Equal timestamps keep their input order.
pub fn sort_newest_first(files: &mut [FileRecord]) {
    files.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
}

/// Run each policy with its quota over `files`.
pub fn plan(mut files: Vec<FileRecord>, quotas: &Quotas) -> Plan {
    sort_newest_first(&mut files);

    let mut keep = KeepSet::new();
    for (policy, quota) in quotas.iter() {
        let before = keep.len();
        select_files(&mut keep, &files, policy, quota);
        tracing::debug!(%policy, quota, added = keep.len() - before, "policy applied");
    }
    tracing::info!(files = files.len(), kept = keep.len(), "rotation planned");

    Plan { files, keep }
}

#[cfg(test)]
#[path = "retention_tests.rs"]
mod tests;
