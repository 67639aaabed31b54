// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-granularity file selection.

use std::collections::HashSet;

use crate::policy::Policy;
use crate::timestamp::FileRecord;

/// Names of files to retain, accumulated across policies.
pub type KeepSet = HashSet<String>;

/// Mark the newest file of each of the `quota` most recent buckets.
///
/// `files` must be sorted newest first. Counting starts at the bucket holding
/// the newest file; empty buckets still use up quota. Selection stops early
/// once every file has been consumed. Names already in `keep` stay there, so
/// running several policies against one set yields their union.
pub fn select_files(keep: &mut KeepSet, files: &[FileRecord], policy: Policy, quota: u32) {
    let Some(newest) = files.first() else {
        return;
    };
    if quota < 1 {
        return;
    }

    let mut bucket = policy.first(newest.moment());
    let mut remaining = files.iter().peekable();
    for _ in 0..quota {
        // Seconds are below bucket resolution, so comparing minute-truncated
        // moments is the same as comparing against the bucket start instant.
        if let Some(file) = remaining.next_if(|f| f.moment() >= bucket) {
            tracing::trace!(%policy, %bucket, file = file.name(), "keep");
            keep.insert(file.name().to_string());
        }
        while remaining.next_if(|f| f.moment() >= bucket).is_some() {}
        if remaining.peek().is_none() {
            return;
        }
        bucket = policy.next(bucket);
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
