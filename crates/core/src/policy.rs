// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retention granularities.
//!
//! Each [`Policy`] splits time into buckets. `first` snaps a moment down to
//! the start of its bucket and `next` steps a bucket start back to the start
//! of the preceding bucket.

use std::fmt;

use crate::moment::Moment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Policy {
    /// All policies, finest first.
    pub const ALL: [Policy; 6] = [
        Policy::Minutely,
        Policy::Hourly,
        Policy::Daily,
        Policy::Weekly,
        Policy::Monthly,
        Policy::Yearly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Policy::Minutely => "minutely",
            Policy::Hourly => "hourly",
            Policy::Daily => "daily",
            Policy::Weekly => "weekly",
            Policy::Monthly => "monthly",
            Policy::Yearly => "yearly",
        }
    }

    /// Start of the bucket containing `m`.
    pub fn first(self, m: Moment) -> Moment {
        match self {
            Policy::Minutely => m,
            Policy::Hourly => Moment { minute: 0, ..m },
            Policy::Daily => Moment { hour: 0, minute: 0, ..m },
            Policy::Weekly => {
                let mut m = Moment { hour: 0, minute: 0, ..m };
                for _ in 0..m.weekday() {
                    m = m.by_day();
                }
                m
            }
            Policy::Monthly => Moment { day: 1, hour: 0, minute: 0, ..m },
            Policy::Yearly => Moment { month: 1, day: 1, hour: 0, minute: 0, ..m },
        }
    }

    /// Start of the bucket preceding the one that starts at `m`.
    pub fn next(self, m: Moment) -> Moment {
        match self {
            Policy::Minutely => m.by_minute(),
            Policy::Hourly => m.by_hour(),
            Policy::Daily => m.by_day(),
            Policy::Weekly => (0..7).fold(m, |acc, _| acc.by_day()),
            Policy::Monthly => m.by_month(),
            Policy::Yearly => m.by_year(),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
