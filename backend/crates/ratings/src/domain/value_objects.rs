//! Domain Value Objects
//!
//! Immutable value types for the ratings domain.

use chrono::NaiveDate;

/// A rating score in the closed range [1, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(i32);

impl Score {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    pub fn new(value: i32) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<Score> for i32 {
    fn from(s: Score) -> Self {
        s.0
    }
}

/// Calendar-day key component of a rating; time-of-day is never carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RatedDate(NaiveDate);

impl RatedDate {
    /// Strict `YYYY-MM-DD` parse.
    ///
    /// chrono accepts unpadded month/day digits, so the shape is checked
    /// first; `2024-1-1` is rejected, only `2024-01-01` passes.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for RatedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Look-back window for rating queries, in days
///
/// Caller input that is absent, non-numeric, zero, or negative silently
/// falls back to the default; a bad `days` parameter is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow(i64);

impl QueryWindow {
    pub const DEFAULT_DAYS: i64 = 7;

    pub fn from_param(param: Option<&str>) -> Self {
        let days = param
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|d| *d > 0)
            .unwrap_or(Self::DEFAULT_DAYS);
        Self(days)
    }

    pub fn days(&self) -> i64 {
        self.0
    }

    /// Inclusive cutoff date: `today - days`
    pub fn cutoff_from(&self, today: NaiveDate) -> NaiveDate {
        today - chrono::Duration::days(self.0)
    }
}

impl Default for QueryWindow {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}
