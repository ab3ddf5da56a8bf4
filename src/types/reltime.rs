// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relative time spans with millisecond precision.
//!
//! Framework durations are stored as a signed count of whole milliseconds,
//! which is the precision the automation object model uses for override
//! expiries and schedule offsets.

use std::fmt;
use std::time::Duration;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// A signed time span with millisecond precision.
///
/// # Examples
///
/// ```
/// use haymap_lib::types::RelTime;
///
/// let t = RelTime::from_mins(2);
/// assert_eq!(t.as_millis(), 120_000);
/// assert_eq!(t.as_secs(), 120);
/// assert_eq!(t, RelTime::from_secs(120));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct RelTime(i64);

const MILLIS_IN_SECOND: i64 = 1_000;
const MILLIS_IN_MINUTE: i64 = 60 * MILLIS_IN_SECOND;
const MILLIS_IN_HOUR: i64 = 60 * MILLIS_IN_MINUTE;

impl RelTime {
    /// The zero-length time span.
    pub const ZERO: Self = Self(0);

    /// Creates a time span from whole milliseconds.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Creates a time span from whole seconds.
    ///
    /// Saturates at the representable extremes rather than wrapping.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(MILLIS_IN_SECOND))
    }

    /// Creates a time span from whole minutes.
    ///
    /// Saturates at the representable extremes rather than wrapping.
    #[must_use]
    pub const fn from_mins(mins: i64) -> Self {
        Self(mins.saturating_mul(MILLIS_IN_MINUTE))
    }

    /// Creates a time span from whole hours.
    ///
    /// Saturates at the representable extremes rather than wrapping.
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(MILLIS_IN_HOUR))
    }

    /// Returns the span as whole milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Returns the span as whole seconds, truncated.
    #[must_use]
    pub const fn as_secs(&self) -> i64 {
        self.0 / MILLIS_IN_SECOND
    }

    /// Returns the span as whole minutes, truncated.
    #[must_use]
    pub const fn as_mins(&self) -> i64 {
        self.0 / MILLIS_IN_MINUTE
    }

    /// Returns the span as whole hours, truncated.
    #[must_use]
    pub const fn as_hours(&self) -> i64 {
        self.0 / MILLIS_IN_HOUR
    }

    /// Converts to a [`std::time::Duration`].
    ///
    /// Returns `None` for negative spans, which `Duration` cannot represent.
    #[must_use]
    pub fn to_std(&self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_millis)
    }

    /// Converts to a [`chrono::TimeDelta`].
    #[must_use]
    pub fn to_time_delta(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.0)
    }
}

impl fmt::Display for RelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % MILLIS_IN_SECOND == 0 {
            write!(f, "{}s", self.as_secs())
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}

impl From<Duration> for RelTime {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn from(value: Duration) -> Self {
        Self(value.as_millis() as i64)
    }
}
