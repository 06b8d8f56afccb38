//! Report date ranges and range-label resolution.
//!
//! The dashboard sends human range labels ("today", "last 7 days",
//! "realtime (30m)"); reports run against either the realtime endpoint or a
//! historical date range. [`ReportRange::resolve`] maps a label to one of
//! the two, failing open to realtime for anything it does not recognize so
//! that a stale or mistyped label never turns into a request error.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

/// A date bound understood by the Data API.
///
/// Either a concrete ISO calendar date or one of the relative tokens the
/// API resolves server-side (`"NdaysAgo"`, `"today"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    /// A concrete calendar date, serialized as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// The relative token `"NdaysAgo"`.
    DaysAgo(u32),
    /// The relative token `"today"`.
    Today,
}

impl std::fmt::Display for DateToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::DaysAgo(days) => write!(f, "{days}daysAgo"),
            Self::Today => write!(f, "today"),
        }
    }
}

impl Serialize for DateToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The resolved target of a report request.
///
/// A report runs either against the realtime endpoint (roughly the last 30
/// minutes) or against a historical date range. The two are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRange {
    /// Realtime report (no date bounds).
    Realtime,
    /// Historical report bounded by start and end dates (inclusive).
    Historical {
        /// First day of the range.
        start: DateToken,
        /// Last day of the range.
        end: DateToken,
    },
}

impl ReportRange {
    /// Resolve a range label against a fixed calendar date.
    ///
    /// Recognized labels (case-insensitive, surrounding whitespace ignored):
    ///
    /// | Label | Result |
    /// | --- | --- |
    /// | none, `realtime`, `realtime (30m)`, `last 30 minutes` | realtime |
    /// | `today` | today..today |
    /// | `yesterday` | yesterday..yesterday |
    /// | `this week` | most recent Monday..today |
    /// | `last week` | Monday before this week's..the Sunday after it |
    /// | `last 7/14/28/30/60 days` | `NdaysAgo`..`today` (relative tokens) |
    ///
    /// Anything else resolves to realtime rather than an error.
    #[must_use]
    pub fn resolve(label: Option<&str>, today: NaiveDate) -> Self {
        let Some(label) = label else {
            return Self::Realtime;
        };

        match label.trim().to_lowercase().as_str() {
            "today" => Self::single_day(today),
            "yesterday" => Self::single_day(today - Duration::days(1)),
            "this week" => Self::between(monday_of(today), today),
            "last week" => {
                let monday = monday_of(today);
                Self::between(monday - Duration::days(7), monday - Duration::days(1))
            }
            "last 7 days" => Self::trailing_days(7),
            "last 14 days" => Self::trailing_days(14),
            "last 28 days" => Self::trailing_days(28),
            "last 30 days" => Self::trailing_days(30),
            "last 60 days" => Self::trailing_days(60),
            // "realtime", "realtime (30m)", "last 30 minutes", and anything
            // unrecognized all land here.
            _ => Self::Realtime,
        }
    }

    /// Resolve a range label against the local calendar date.
    #[must_use]
    pub fn resolve_now(label: Option<&str>) -> Self {
        Self::resolve(label, Local::now().date_naive())
    }

    /// Historical range covering a single calendar day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self::Historical {
            start: DateToken::Date(date),
            end: DateToken::Date(date),
        }
    }

    /// Historical range between two concrete dates (inclusive).
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Historical {
            start: DateToken::Date(start),
            end: DateToken::Date(end),
        }
    }

    /// Historical range over the trailing `days` days, expressed with
    /// relative tokens the API resolves server-side.
    #[must_use]
    pub const fn trailing_days(days: u32) -> Self {
        Self::Historical {
            start: DateToken::DaysAgo(days),
            end: DateToken::Today,
        }
    }

    /// Whether this range targets the realtime endpoint.
    #[must_use]
    pub const fn is_realtime(&self) -> bool {
        matches!(self, Self::Realtime)
    }
}

/// The most recent Monday on or before `date`.
fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
