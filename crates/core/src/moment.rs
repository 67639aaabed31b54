// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Minute-granular calendar arithmetic.
//!
//! A [`Moment`] is a plain set of calendar fields with no timezone and no
//! epoch. Stepping backwards is done field by field so month lengths, leap
//! years and year underflow are handled explicitly instead of by a date
//! library's normalisation.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

/// A calendar instant at minute granularity.
///
/// Field order matters: the derived `Ord` compares year, then month, day,
/// hour and minute, which is the chronological order of valid moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Moment {
    pub const fn new(year: i64, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self { year, month, day, hour, minute }
    }

    /// Truncate a parsed timestamp to its minute. Seconds are dropped.
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self {
            year: i64::from(dt.year()),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }

    /// Whether the fields describe a real calendar date and time of day.
    #[cfg(any(test, feature = "test-support"))]
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
            && self.hour < 24
            && self.minute < 60
    }

    pub fn by_minute(self) -> Self {
        if self.minute > 0 {
            return Self { minute: self.minute - 1, ..self };
        }
        Self { minute: 59, ..self }.by_hour()
    }

    pub fn by_hour(self) -> Self {
        if self.hour > 0 {
            return Self { hour: self.hour - 1, ..self };
        }
        Self { hour: 23, ..self }.by_day()
    }

    pub fn by_day(self) -> Self {
        if self.day > 1 {
            return Self { day: self.day - 1, ..self };
        }
        let m = self.by_month();
        Self { day: days_in_month(m.year, m.month), ..m }
    }

    /// Step back one month. The day is clamped to the length of the new
    /// month, so March 31 becomes February 28 (or 29).
    pub fn by_month(self) -> Self {
        if self.month > 1 {
            return Self { month: self.month - 1, ..self }.clamp_day();
        }
        Self { month: 12, ..self }.by_year()
    }

    pub fn by_year(self) -> Self {
        Self { year: self.year - 1, ..self }.clamp_day()
    }

    fn clamp_day(self) -> Self {
        Self { day: self.day.min(days_in_month(self.year, self.month)), ..self }
    }

    /// Day of the week in the proleptic Gregorian calendar, 0 = Sunday.
    pub fn weekday(&self) -> u32 {
        // Sakamoto's method, with Euclidean remainders so negative years work
        const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if self.month < 3 { self.year - 1 } else { self.year };
        let idx = (self.month.clamp(1, 12) - 1) as usize;
        let days = y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            + OFFSETS[idx]
            + i64::from(self.day);
        days.rem_euclid(7) as u32
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

pub fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
#[path = "moment_tests.rs"]
mod tests;
