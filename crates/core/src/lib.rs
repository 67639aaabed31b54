// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gfs-core: grandfather-father-son backup rotation
//!
//! Decides which timestamped backups to keep. Nothing here touches the
//! filesystem; callers hand in names and get back a [`Plan`].

pub mod moment;
pub mod policy;
pub mod retention;
pub mod select;
pub mod timestamp;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use moment::{days_in_month, is_leap_year, Moment};
pub use policy::Policy;
pub use retention::{parse_lines, plan, sort_newest_first, Mode, Plan, Quotas, DEFAULT_FACTOR};
pub use select::{select_files, KeepSet};
pub use timestamp::{parse_timestamp, FileRecord, ParseError};
