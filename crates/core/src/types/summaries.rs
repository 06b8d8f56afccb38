//! Normalized report summaries.
//!
//! These are the shapes the reporting adapter hands to the dashboard: raw
//! API rows folded into fixed buckets, capped leaderboards, and aggregate
//! engagement numbers. All of them serialize in the camelCase form the
//! dashboard consumes.

use std::collections::BTreeMap;

use serde::Serialize;

use super::buckets::{AgeBracket, Channel, Gender};
use super::metric_value::MetricValue;

/// Users for one city/country pair in the demographics report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityBreakdown {
    pub city: String,
    pub country: String,
    pub users: i64,
}

/// Demographics report: age, gender, and city splits of active users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsSummary {
    /// Active users per fixed age bracket.
    pub age_groups: BTreeMap<AgeBracket, i64>,
    /// Active users per gender bucket.
    pub gender_distribution: BTreeMap<Gender, i64>,
    /// City/country pairs, descending by users, at most 50 entries.
    pub cities: Vec<CityBreakdown>,
}

impl DemographicsSummary {
    /// A summary with every bucket present and zeroed.
    ///
    /// Seeding the full key sets keeps the serialized maps stable for the
    /// dashboard even when a bucket received no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            age_groups: AgeBracket::ALL.into_iter().map(|b| (b, 0)).collect(),
            gender_distribution: Gender::ALL.into_iter().map(|g| (g, 0)).collect(),
            cities: Vec::new(),
        }
    }
}

/// Sessions per traffic channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct TrafficSourcesSummary {
    pub direct: i64,
    pub organic: i64,
    pub social: i64,
    pub paid: i64,
    pub referral: i64,
}

impl TrafficSourcesSummary {
    /// Mutable access to the bucket for a channel.
    #[must_use]
    pub const fn bucket_mut(&mut self, channel: Channel) -> &mut i64 {
        match channel {
            Channel::Direct => &mut self.direct,
            Channel::Organic => &mut self.organic,
            Channel::Social => &mut self.social,
            Channel::Paid => &mut self.paid,
            Channel::Referral => &mut self.referral,
        }
    }

    /// The bucket value for a channel.
    #[must_use]
    pub const fn bucket(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Direct => self.direct,
            Channel::Organic => self.organic,
            Channel::Social => self.social,
            Channel::Paid => self.paid,
            Channel::Referral => self.referral,
        }
    }

    /// Sum across all five buckets.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.direct + self.organic + self.social + self.paid + self.referral
    }
}

/// Aggregate engagement metrics for a date range.
///
/// Rate fields are whole percentages (source fraction × 100, rounded).
/// When `is_mock` is true every field is [`MetricValue::Unavailable`] and
/// serializes as the `-1` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    pub page_views: MetricValue<u64>,
    pub sessions: MetricValue<u64>,
    /// Bounce rate as a whole percentage.
    pub bounce_rate: MetricValue<i64>,
    pub engaged_sessions: MetricValue<u64>,
    /// Engagement rate as a whole percentage.
    pub engagement_rate: MetricValue<i64>,
    /// Average session duration in seconds.
    pub average_session_duration: MetricValue<f64>,
    pub event_count: MetricValue<u64>,
    pub key_events: MetricValue<u64>,
    /// Session key event rate as a whole percentage.
    pub session_key_event_rate: MetricValue<i64>,
    /// True when this summary is placeholder data, not a measurement.
    pub is_mock: bool,
}

impl EngagementSummary {
    /// The placeholder summary: every metric unavailable, `is_mock` set.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            page_views: MetricValue::Unavailable,
            sessions: MetricValue::Unavailable,
            bounce_rate: MetricValue::Unavailable,
            engaged_sessions: MetricValue::Unavailable,
            engagement_rate: MetricValue::Unavailable,
            average_session_duration: MetricValue::Unavailable,
            event_count: MetricValue::Unavailable,
            key_events: MetricValue::Unavailable,
            session_key_event_rate: MetricValue::Unavailable,
            is_mock: true,
        }
    }
}

/// Active users for one country in the realtime report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryUsers {
    pub country: String,
    pub users: i64,
}

/// Active users for one city in the realtime report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityUsers {
    pub city: String,
    pub users: i64,
}

/// Realtime active users with country and city leaderboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUsersSummary {
    pub total_active_users: i64,
    /// Descending by users, at most 10 entries.
    pub top_countries: Vec<CountryUsers>,
    /// Descending by users, at most 10 entries.
    pub top_cities: Vec<CityUsers>,
}

/// New vs. returning active users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserTypesSummary {
    pub new_users: i64,
    pub returning_users: i64,
}

/// A named leaderboard row (top events, top pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCount {
    pub name: String,
    pub count: i64,
}

/// A realtime traffic source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficSourceDetail {
    pub source: String,
    /// Empty when the row was reshaped from channel buckets rather than
    /// measured against the realtime endpoint.
    pub medium: String,
    pub users: i64,
}
