// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers shared across crates.
//!
//! Enabled for this crate's unit tests and for other crates through the
//! `test-support` feature.

use chrono::{NaiveDate, NaiveDateTime};

use crate::moment::days_in_month;
use crate::timestamp::FileRecord;

/// Build a timestamp, panicking on impossible fields.
#[allow(clippy::expect_used)]
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .expect("valid test timestamp")
}

/// A record whose name is `YYYY/MM/DD/HH` and whose timestamp is a
/// minute and two seconds past that hour.
pub fn hour_record(year: i32, month: u32, day: u32, hour: u32) -> FileRecord {
    FileRecord::new(
        format!("{year:04}/{month:02}/{day:02}/{hour:02}"),
        datetime(year, month, day, hour, 1, 2),
    )
}

/// One [`hour_record`] for every hour of every day in `years`, oldest first.
pub fn hourly_records(years: std::ops::Range<i32>) -> Vec<FileRecord> {
    let mut records = Vec::new();
    for year in years {
        for month in 1..=12 {
            for day in 1..=days_in_month(i64::from(year), month) {
                for hour in 0..24 {
                    records.push(hour_record(year, month, day, hour));
                }
            }
        }
    }
    records
}

/// Hourly records for 2007 through 2010 and the names a
/// 28/8/5/13/3 hourly/daily/weekly/monthly/yearly rotation keeps, sorted.
pub mod long_scenario {
    pub const YEARS: std::ops::Range<i32> = 2007..2011;
    pub const FILE_COUNT: usize = 35_064;

    pub const KEPT: [&str; 50] = [
        // yearly
        "2008/12/31/23",
        // monthly
        "2009/12/31/23",
        "2010/01/31/23",
        "2010/02/28/23",
        "2010/03/31/23",
        "2010/04/30/23",
        "2010/05/31/23",
        "2010/06/30/23",
        "2010/07/31/23",
        "2010/08/31/23",
        "2010/09/30/23",
        "2010/10/31/23",
        "2010/11/30/23",
        // weekly
        "2010/12/04/23",
        "2010/12/11/23",
        "2010/12/18/23",
        // daily
        "2010/12/24/23",
        "2010/12/25/23",
        "2010/12/26/23",
        "2010/12/27/23",
        "2010/12/28/23",
        "2010/12/29/23",
        // hourly
        "2010/12/30/20",
        "2010/12/30/21",
        "2010/12/30/22",
        "2010/12/30/23",
        "2010/12/31/00",
        "2010/12/31/01",
        "2010/12/31/02",
        "2010/12/31/03",
        "2010/12/31/04",
        "2010/12/31/05",
        "2010/12/31/06",
        "2010/12/31/07",
        "2010/12/31/08",
        "2010/12/31/09",
        "2010/12/31/10",
        "2010/12/31/11",
        "2010/12/31/12",
        "2010/12/31/13",
        "2010/12/31/14",
        "2010/12/31/15",
        "2010/12/31/16",
        "2010/12/31/17",
        "2010/12/31/18",
        "2010/12/31/19",
        "2010/12/31/20",
        "2010/12/31/21",
        "2010/12/31/22",
        "2010/12/31/23",
    ];
}

pub mod strategies {
    use proptest::prelude::*;

    use crate::moment::{days_in_month, Moment};
    use crate::timestamp::FileRecord;

    /// Any valid moment between years -3000 and 3000.
    pub fn arb_moment() -> impl Strategy<Value = Moment> {
        (-3000i64..=3000, 1u32..=12)
            .prop_flat_map(|(year, month)| {
                (Just(year), Just(month), 1..=days_in_month(year, month), 0u32..24, 0u32..60)
            })
            .prop_map(|(year, month, day, hour, minute)| Moment::new(year, month, day, hour, minute))
    }

    /// Up to `max` records spread over 2000-2003, in arbitrary order. Names
    /// are distinct and parse back to the record's timestamp.
    pub fn arb_records(max: usize) -> impl Strategy<Value = Vec<FileRecord>> {
        prop::collection::vec(0i64..(4 * 365 * 24 * 60), 0..max).prop_map(|offsets| {
            offsets
                .into_iter()
                .enumerate()
                .map(|(i, minutes)| {
                    let base = super::datetime(2000, 1, 1, 0, 0, 0);
                    let ts = base + chrono::Duration::minutes(minutes);
                    FileRecord::new(format!("{i}/{}.tar", ts.format("%Y%m%d%H%M%S")), ts)
                })
                .collect()
        })
    }
}
