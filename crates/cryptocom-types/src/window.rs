//! Half-open time windows used to bound paginated requests

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of the timestamps in a [`PaginationWindow`]
///
/// Order history is queried in nanoseconds, candlesticks in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Milliseconds,
    Nanoseconds,
}

impl TimeUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Nanoseconds => "ns",
        }
    }
}

/// A `[start, end)` time range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationWindow {
    pub start: i64,
    pub end: i64,
    pub unit: TimeUnit,
}

impl PaginationWindow {
    pub fn new(start: i64, end: i64, unit: TimeUnit) -> Self {
        Self { start, end, unit }
    }

    /// Window with millisecond timestamps
    pub fn millis(start: i64, end: i64) -> Self {
        Self::new(start, end, TimeUnit::Milliseconds)
    }

    /// Window with nanosecond timestamps
    pub fn nanos(start: i64, end: i64) -> Self {
        Self::new(start, end, TimeUnit::Nanoseconds)
    }

    /// Number of time units covered
    pub fn width(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Floor of the midpoint, computed without overflow
    pub fn midpoint(&self) -> i64 {
        self.start + self.width() / 2
    }

    /// Split into `[start, mid + 1)` and `[mid, end)`
    ///
    /// The halves share the unit at `mid`, so a record stamped exactly at
    /// the midpoint can be returned by both.
    pub fn split(&self) -> (Self, Self) {
        let mid = self.midpoint();
        (
            Self::new(self.start, mid + 1, self.unit),
            Self::new(mid, self.end, self.unit),
        )
    }

    /// Returns true if both halves of [`split`](Self::split) are strictly narrower
    ///
    /// Windows of width 2 or less reproduce themselves as the left half.
    pub fn can_split(&self) -> bool {
        self.width() > 2
    }
}

impl fmt::Display for PaginationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}){}", self.start, self.end, self.unit.suffix())
    }
}

/// Nanosecond window covering one UTC calendar day
///
/// Returns `None` for dates outside the range representable in `i64` nanoseconds.
pub fn day_window_ns(day: NaiveDate) -> Option<PaginationWindow> {
    let start = day.and_hms_opt(0, 0, 0)?.and_utc().timestamp_nanos_opt()?;
    let next = day.checked_add_days(Days::new(1))?;
    let end = next.and_hms_opt(0, 0, 0)?.and_utc().timestamp_nanos_opt()?;
    Some(PaginationWindow::nanos(start, end))
}
