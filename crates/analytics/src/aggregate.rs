//! Pure folds from typed API rows into normalized summaries.
//!
//! Positional access into response rows happens exactly once, in the
//! `from_response` mappers at the top of this module; the folds below work
//! on named fields only. Every fold is deterministic: ties in the
//! descending sorts are broken by name.

use std::collections::HashMap;

use meridian_core::{
    ActiveUsersSummary, AgeBracket, Channel, CityBreakdown, CityUsers, CountryUsers,
    DemographicsSummary, EngagementSummary, Gender, MetricValue, NamedCount, TrafficSourceDetail,
    TrafficSourcesSummary, UserTypesSummary,
};

use crate::ga4::types::RunReportResponse;

/// The API's placeholder for a dimension it could not attribute.
pub const NOT_SET: &str = "(not set)";

/// Cap on city rows in the demographics summary.
const MAX_DEMOGRAPHIC_CITIES: usize = 50;

/// Cap on the realtime country and city leaderboards.
const MAX_LOCATION_ROWS: usize = 10;

// =============================================================================
// Typed rows (boundary mapping from positional wire rows)
// =============================================================================

/// One demographics report row.
#[derive(Debug, Clone)]
pub struct DemographicsRow {
    pub country: String,
    pub city: String,
    pub age_bracket: String,
    pub gender: String,
    pub users: i64,
}

impl DemographicsRow {
    /// Map rows of a country/city/ageBracket/gender x activeUsers report.
    #[must_use]
    pub fn from_response(response: &RunReportResponse) -> Vec<Self> {
        response
            .rows
            .iter()
            .map(|row| Self {
                country: row.dimension(0).to_string(),
                city: row.dimension(1).to_string(),
                age_bracket: row.dimension(2).to_string(),
                gender: row.dimension(3).to_string(),
                users: parse_count(row.metric(0)),
            })
            .collect()
    }
}

/// One channel-grouping report row.
#[derive(Debug, Clone)]
pub struct ChannelRow {
    pub grouping: String,
    pub sessions: i64,
}

impl ChannelRow {
    /// Map rows of a sessionDefaultChannelGrouping x sessions report.
    #[must_use]
    pub fn from_response(response: &RunReportResponse) -> Vec<Self> {
        response
            .rows
            .iter()
            .map(|row| Self {
                grouping: row.dimension(0).to_string(),
                sessions: parse_count(row.metric(0)),
            })
            .collect()
    }
}

/// The single aggregate engagement row, metric values still raw.
///
/// Field order mirrors the metric order of the engagement request; the
/// mapper is the only place that order is relied upon.
#[derive(Debug, Clone)]
pub struct EngagementRow {
    pub page_views: String,
    pub sessions: String,
    pub bounce_rate: String,
    pub engaged_sessions: String,
    pub engagement_rate: String,
    pub average_session_duration: String,
    pub event_count: String,
    pub key_events: String,
    pub session_key_event_rate: String,
}

impl EngagementRow {
    /// Map the first row of the engagement report, if any.
    #[must_use]
    pub fn from_response(response: &RunReportResponse) -> Option<Self> {
        response.rows.first().map(|row| Self {
            page_views: row.metric(0).to_string(),
            sessions: row.metric(1).to_string(),
            bounce_rate: row.metric(2).to_string(),
            engaged_sessions: row.metric(3).to_string(),
            engagement_rate: row.metric(4).to_string(),
            average_session_duration: row.metric(5).to_string(),
            event_count: row.metric(6).to_string(),
            key_events: row.metric(7).to_string(),
            session_key_event_rate: row.metric(8).to_string(),
        })
    }
}

/// One newVsReturning report row.
#[derive(Debug, Clone)]
pub struct UserTypeRow {
    pub segment: String,
    pub active_users: i64,
}

impl UserTypeRow {
    /// Map rows of a newVsReturning x activeUsers report.
    #[must_use]
    pub fn from_response(response: &RunReportResponse) -> Vec<Self> {
        response
            .rows
            .iter()
            .map(|row| Self {
                segment: row.dimension(0).to_string(),
                active_users: parse_count(row.metric(0)),
            })
            .collect()
    }
}

/// One realtime country/city row.
#[derive(Debug, Clone)]
pub struct LocationRow {
    pub country: String,
    pub city: String,
    pub active_users: i64,
}

impl LocationRow {
    /// Map rows of a country/city x activeUsers realtime report.
    #[must_use]
    pub fn from_response(response: &RunReportResponse) -> Vec<Self> {
        response
            .rows
            .iter()
            .map(|row| Self {
                country: row.dimension(0).to_string(),
                city: row.dimension(1).to_string(),
                active_users: parse_count(row.metric(0)),
            })
            .collect()
    }
}

/// One leaderboard row (top events, top pages).
#[derive(Debug, Clone)]
pub struct NamedCountRow {
    pub name: String,
    pub count: i64,
}

impl NamedCountRow {
    /// Map rows of an eventName x count report.
    #[must_use]
    pub fn from_event_rows(response: &RunReportResponse) -> Vec<Self> {
        response
            .rows
            .iter()
            .map(|row| Self {
                name: row.dimension(0).to_string(),
                count: parse_count(row.metric(0)),
            })
            .collect()
    }

    /// Map rows of a pagePath/pageTitle x count report.
    ///
    /// The title is what the dashboard renders; rows without a usable title
    /// fall back to the path.
    #[must_use]
    pub fn from_page_rows(response: &RunReportResponse) -> Vec<Self> {
        response
            .rows
            .iter()
            .map(|row| {
                let path = row.dimension(0);
                let title = row.dimension(1);
                let name = if title.is_empty() || title == NOT_SET {
                    path
                } else {
                    title
                };
                Self {
                    name: name.to_string(),
                    count: parse_count(row.metric(0)),
                }
            })
            .collect()
    }
}

/// One realtime source/medium row.
#[derive(Debug, Clone)]
pub struct SourceMediumRow {
    pub source: String,
    pub medium: String,
    pub active_users: i64,
}

impl SourceMediumRow {
    /// Map rows of a sessionSource/sessionMedium x activeUsers report.
    #[must_use]
    pub fn from_response(response: &RunReportResponse) -> Vec<Self> {
        response
            .rows
            .iter()
            .map(|row| Self {
                source: row.dimension(0).to_string(),
                medium: row.dimension(1).to_string(),
                active_users: parse_count(row.metric(0)),
            })
            .collect()
    }
}

// =============================================================================
// Folds
// =============================================================================

/// Fold demographics rows into age, gender, and city splits.
///
/// Age brackets and genders bucket by the fixed-set matching in
/// `meridian_core::buckets`; brackets matching no bucket contribute to none.
/// City rows accumulate under a composite `"{city}-{country}"` key (city or
/// country names containing a hyphen split back imprecisely - a known
/// limitation), sorted descending and capped at 50.
#[must_use]
pub fn demographics(rows: &[DemographicsRow]) -> DemographicsSummary {
    let mut summary = DemographicsSummary::empty();
    let mut cities: HashMap<String, i64> = HashMap::new();

    for row in rows {
        if let Some(bracket) = AgeBracket::from_api_bracket(&row.age_bracket) {
            *summary.age_groups.entry(bracket).or_insert(0) += row.users;
        }
        let gender = Gender::from_api_gender(&row.gender);
        *summary.gender_distribution.entry(gender).or_insert(0) += row.users;

        let key = format!("{}-{}", row.city, row.country);
        *cities.entry(key).or_insert(0) += row.users;
    }

    let mut entries: Vec<(String, i64)> = cities.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(MAX_DEMOGRAPHIC_CITIES);

    summary.cities = entries
        .into_iter()
        .map(|(key, users)| {
            let (city, country) = key.split_once('-').unwrap_or((key.as_str(), ""));
            CityBreakdown {
                city: city.to_string(),
                country: country.to_string(),
                users,
            }
        })
        .collect();

    summary
}

/// Fold channel-grouping rows into the five channel buckets.
///
/// Groupings matching no bucket are dropped, so the summary total can be
/// strictly less than the input total.
#[must_use]
pub fn traffic_channels(rows: &[ChannelRow]) -> TrafficSourcesSummary {
    let mut summary = TrafficSourcesSummary::default();
    for row in rows {
        if let Some(channel) = Channel::from_grouping(&row.grouping) {
            *summary.bucket_mut(channel) += row.sessions;
        }
    }
    summary
}

/// Parse the engagement row into a measured summary.
///
/// Rates arrive as fractions and become whole percentages; counts and the
/// duration parse with a 0 default on malformed values.
#[must_use]
pub fn engagement(row: &EngagementRow) -> EngagementSummary {
    EngagementSummary {
        page_views: MetricValue::Available(parse_count_u64(&row.page_views)),
        sessions: MetricValue::Available(parse_count_u64(&row.sessions)),
        bounce_rate: MetricValue::Available(parse_percent(&row.bounce_rate)),
        engaged_sessions: MetricValue::Available(parse_count_u64(&row.engaged_sessions)),
        engagement_rate: MetricValue::Available(parse_percent(&row.engagement_rate)),
        average_session_duration: MetricValue::Available(
            row.average_session_duration.parse().unwrap_or(0.0),
        ),
        event_count: MetricValue::Available(parse_count_u64(&row.event_count)),
        key_events: MetricValue::Available(parse_count_u64(&row.key_events)),
        session_key_event_rate: MetricValue::Available(parse_percent(&row.session_key_event_rate)),
        is_mock: false,
    }
}

/// Fold newVsReturning rows into the two user-type counters.
///
/// Segments other than `new` and `returning` (notably `(not set)`) are
/// dropped.
#[must_use]
pub fn user_types(rows: &[UserTypeRow]) -> UserTypesSummary {
    let mut summary = UserTypesSummary::default();
    for row in rows {
        if row.segment.eq_ignore_ascii_case("new") {
            summary.new_users += row.active_users;
        } else if row.segment.eq_ignore_ascii_case("returning") {
            summary.returning_users += row.active_users;
        }
    }
    summary
}

/// Fold realtime location rows into a total and two leaderboards.
///
/// The total sums every row; the country and city leaderboards exclude
/// `(not set)` and are capped at 10 entries each.
#[must_use]
pub fn active_users(rows: &[LocationRow]) -> ActiveUsersSummary {
    let mut total = 0;
    let mut countries: HashMap<&str, i64> = HashMap::new();
    let mut cities: HashMap<&str, i64> = HashMap::new();

    for row in rows {
        total += row.active_users;
        if !row.country.is_empty() && row.country != NOT_SET {
            *countries.entry(row.country.as_str()).or_insert(0) += row.active_users;
        }
        if !row.city.is_empty() && row.city != NOT_SET {
            *cities.entry(row.city.as_str()).or_insert(0) += row.active_users;
        }
    }

    ActiveUsersSummary {
        total_active_users: total,
        top_countries: top_entries(countries)
            .into_iter()
            .map(|(country, users)| CountryUsers { country, users })
            .collect(),
        top_cities: top_entries(cities)
            .into_iter()
            .map(|(city, users)| CityUsers { city, users })
            .collect(),
    }
}

/// Order leaderboard rows descending and cap at the caller's limit.
#[must_use]
pub fn named_counts(rows: &[NamedCountRow], limit: u32) -> Vec<NamedCount> {
    let mut counts: Vec<NamedCount> = rows
        .iter()
        .map(|row| NamedCount {
            name: row.name.clone(),
            count: row.count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts.truncate(limit as usize);
    counts
}

/// Order realtime source/medium rows descending and cap at the limit.
#[must_use]
pub fn traffic_source_details(rows: &[SourceMediumRow], limit: u32) -> Vec<TrafficSourceDetail> {
    let mut details: Vec<TrafficSourceDetail> = rows
        .iter()
        .map(|row| TrafficSourceDetail {
            source: row.source.clone(),
            medium: row.medium.clone(),
            users: row.active_users,
        })
        .collect();
    details.sort_by(|a, b| b.users.cmp(&a.users).then_with(|| a.source.cmp(&b.source)));
    details.truncate(limit as usize);
    details
}

/// Reshape channel buckets into source rows (medium left empty), ordered
/// descending and capped at the limit.
#[must_use]
pub fn channel_details(summary: &TrafficSourcesSummary, limit: u32) -> Vec<TrafficSourceDetail> {
    let mut details: Vec<TrafficSourceDetail> = Channel::ALL
        .into_iter()
        .map(|channel| TrafficSourceDetail {
            source: channel.key().to_string(),
            medium: String::new(),
            users: summary.bucket(channel),
        })
        .collect();
    details.sort_by(|a, b| b.users.cmp(&a.users).then_with(|| a.source.cmp(&b.source)));
    details.truncate(limit as usize);
    details
}

/// Sort accumulated sums descending (name-tiebreak) and cap at 10.
fn top_entries(sums: HashMap<&str, i64>) -> Vec<(String, i64)> {
    let mut entries: Vec<(String, i64)> = sums
        .into_iter()
        .map(|(name, users)| (name.to_string(), users))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(MAX_LOCATION_ROWS);
    entries
}

/// Parse an integer metric value, defaulting to 0.
// Truncation is the parseInt behavior for the occasional decimal string.
#[allow(clippy::cast_possible_truncation)]
fn parse_count(raw: &str) -> i64 {
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|value| value as i64))
        .unwrap_or(0)
}

/// Parse an unsigned metric value, defaulting to 0.
fn parse_count_u64(raw: &str) -> u64 {
    u64::try_from(parse_count(raw).max(0)).unwrap_or(0)
}

/// Parse a fractional rate into a whole percentage, defaulting to 0.
// Rates are small fractions; rounding to whole percent cannot overflow.
#[allow(clippy::cast_possible_truncation)]
fn parse_percent(raw: &str) -> i64 {
    (raw.parse::<f64>().unwrap_or(0.0) * 100.0).round() as i64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ga4::types::{Row, RunReportResponse};

    fn response(rows: Vec<Row>) -> RunReportResponse {
        let row_count = i64::try_from(rows.len()).unwrap();
        RunReportResponse { rows, row_count }
    }

    #[test]
    fn test_demographics_end_to_end_mapping() {
        let response = response(vec![Row::new(
            &["India", "Mumbai", "25-34", "female"],
            &["42"],
        )]);
        let summary = demographics(&DemographicsRow::from_response(&response));

        assert_eq!(summary.age_groups[&AgeBracket::From25To34], 42);
        assert_eq!(summary.gender_distribution[&Gender::Female], 42);
        assert_eq!(
            summary.cities,
            vec![CityBreakdown {
                city: "Mumbai".to_string(),
                country: "India".to_string(),
                users: 42,
            }]
        );
    }

    #[test]
    fn test_demographics_sums_duplicate_city_country_pairs() {
        let rows = vec![
            DemographicsRow {
                country: "India".to_string(),
                city: "Mumbai".to_string(),
                age_bracket: "25-34".to_string(),
                gender: "male".to_string(),
                users: 10,
            },
            DemographicsRow {
                country: "India".to_string(),
                city: "Mumbai".to_string(),
                age_bracket: "35-44".to_string(),
                gender: "female".to_string(),
                users: 5,
            },
        ];
        let summary = demographics(&rows);
        assert_eq!(summary.cities.len(), 1);
        assert_eq!(summary.cities.first().unwrap().users, 15);
    }

    #[test]
    fn test_demographics_unmatched_bracket_contributes_nothing() {
        let rows = vec![DemographicsRow {
            country: "India".to_string(),
            city: "Delhi".to_string(),
            age_bracket: "(not set)".to_string(),
            gender: "(not set)".to_string(),
            users: 9,
        }];
        let summary = demographics(&rows);
        assert_eq!(summary.age_groups.values().sum::<i64>(), 0);
        // Gender has a catch-all bucket, unlike age.
        assert_eq!(summary.gender_distribution[&Gender::Other], 9);
    }

    #[test]
    fn test_demographics_city_cap_and_order() {
        let rows: Vec<DemographicsRow> = (0..60)
            .map(|i| DemographicsRow {
                country: "India".to_string(),
                city: format!("City{i:02}"),
                age_bracket: "25-34".to_string(),
                gender: "male".to_string(),
                users: i,
            })
            .collect();
        let summary = demographics(&rows);
        assert_eq!(summary.cities.len(), 50);
        assert_eq!(summary.cities.first().unwrap().users, 59);
        assert!(
            summary
                .cities
                .windows(2)
                .all(|pair| pair[0].users >= pair[1].users)
        );
    }

    #[test]
    fn test_traffic_channels_drop_unmatched_groupings() {
        let rows = vec![
            ChannelRow {
                grouping: "Direct".to_string(),
                sessions: 10,
            },
            ChannelRow {
                grouping: "Organic Search".to_string(),
                sessions: 20,
            },
            ChannelRow {
                grouping: "Email".to_string(),
                sessions: 7,
            },
        ];
        let summary = traffic_channels(&rows);
        let input_total: i64 = rows.iter().map(|r| r.sessions).sum();
        assert_eq!(summary.direct, 10);
        assert_eq!(summary.organic, 20);
        // Unmatched rows are dropped, not defaulted into a catch-all.
        assert!(summary.total() < input_total);
        assert_eq!(summary.total(), 30);
    }

    #[test]
    fn test_engagement_parses_percentages_and_counts() {
        let row = EngagementRow {
            page_views: "1200".to_string(),
            sessions: "300".to_string(),
            bounce_rate: "0.4567".to_string(),
            engaged_sessions: "180".to_string(),
            engagement_rate: "0.6".to_string(),
            average_session_duration: "72.5".to_string(),
            event_count: "4000".to_string(),
            key_events: "25".to_string(),
            session_key_event_rate: "0.083".to_string(),
        };
        let summary = engagement(&row);
        assert_eq!(summary.page_views, MetricValue::Available(1200));
        assert_eq!(summary.bounce_rate, MetricValue::Available(46));
        assert_eq!(summary.engagement_rate, MetricValue::Available(60));
        assert_eq!(summary.session_key_event_rate, MetricValue::Available(8));
        assert_eq!(
            summary.average_session_duration,
            MetricValue::Available(72.5)
        );
        assert!(!summary.is_mock);
    }

    #[test]
    fn test_engagement_malformed_values_default_to_zero() {
        let row = EngagementRow {
            page_views: "garbage".to_string(),
            sessions: String::new(),
            bounce_rate: "n/a".to_string(),
            engaged_sessions: "1".to_string(),
            engagement_rate: "0.5".to_string(),
            average_session_duration: "oops".to_string(),
            event_count: "2".to_string(),
            key_events: "3".to_string(),
            session_key_event_rate: "0".to_string(),
        };
        let summary = engagement(&row);
        assert_eq!(summary.page_views, MetricValue::Available(0));
        assert_eq!(summary.bounce_rate, MetricValue::Available(0));
        assert_eq!(summary.average_session_duration, MetricValue::Available(0.0));
        assert!(!summary.is_mock);
    }

    #[test]
    fn test_engagement_row_maps_metrics_positionally() {
        let response = response(vec![Row::new(
            &[],
            &["1", "2", "0.3", "4", "0.5", "6.5", "7", "8", "0.9"],
        )]);
        let row = EngagementRow::from_response(&response).unwrap();
        assert_eq!(row.page_views, "1");
        assert_eq!(row.average_session_duration, "6.5");
        assert_eq!(row.session_key_event_rate, "0.9");
    }

    #[test]
    fn test_user_types_drop_unknown_segments() {
        let rows = vec![
            UserTypeRow {
                segment: "new".to_string(),
                active_users: 12,
            },
            UserTypeRow {
                segment: "returning".to_string(),
                active_users: 8,
            },
            UserTypeRow {
                segment: "(not set)".to_string(),
                active_users: 99,
            },
        ];
        let summary = user_types(&rows);
        assert_eq!(summary.new_users, 12);
        assert_eq!(summary.returning_users, 8);
    }

    #[test]
    fn test_active_users_truncates_leaderboards_to_ten() {
        let rows: Vec<LocationRow> = (0..15)
            .map(|i| LocationRow {
                country: format!("Country{i:02}"),
                city: format!("City{i:02}"),
                active_users: i + 1,
            })
            .collect();
        let summary = active_users(&rows);
        assert_eq!(summary.total_active_users, (1..=15).sum::<i64>());
        assert_eq!(summary.top_countries.len(), 10);
        assert_eq!(summary.top_cities.len(), 10);
        assert_eq!(summary.top_countries.first().unwrap().users, 15);
        assert!(
            summary
                .top_countries
                .windows(2)
                .all(|pair| pair[0].users >= pair[1].users)
        );
    }

    #[test]
    fn test_active_users_excludes_not_set_from_leaderboards_only() {
        let rows = vec![
            LocationRow {
                country: "(not set)".to_string(),
                city: "(not set)".to_string(),
                active_users: 4,
            },
            LocationRow {
                country: "India".to_string(),
                city: "Mumbai".to_string(),
                active_users: 6,
            },
        ];
        let summary = active_users(&rows);
        assert_eq!(summary.total_active_users, 10);
        assert_eq!(summary.top_countries.len(), 1);
        assert_eq!(summary.top_cities.len(), 1);
    }

    #[test]
    fn test_named_counts_sorts_and_caps() {
        let rows = vec![
            NamedCountRow {
                name: "scroll".to_string(),
                count: 5,
            },
            NamedCountRow {
                name: "page_view".to_string(),
                count: 50,
            },
            NamedCountRow {
                name: "session_start".to_string(),
                count: 20,
            },
        ];
        let counts = named_counts(&rows, 2);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.first().unwrap().name, "page_view");
        assert_eq!(counts.get(1).unwrap().name, "session_start");
    }

    #[test]
    fn test_page_rows_prefer_title_over_path() {
        let response = response(vec![
            Row::new(&["/pricing", "Pricing - Meridian"], &["31"]),
            Row::new(&["/bare", "(not set)"], &["7"]),
            Row::new(&["/untitled", ""], &["3"]),
        ]);
        let rows = NamedCountRow::from_page_rows(&response);
        assert_eq!(rows.first().unwrap().name, "Pricing - Meridian");
        assert_eq!(rows.get(1).unwrap().name, "/bare");
        assert_eq!(rows.get(2).unwrap().name, "/untitled");
    }

    #[test]
    fn test_channel_details_reshape() {
        let summary = TrafficSourcesSummary {
            direct: 5,
            organic: 30,
            social: 0,
            paid: 12,
            referral: 2,
        };
        let details = channel_details(&summary, 10);
        assert_eq!(details.len(), 5);
        let first = details.first().unwrap();
        assert_eq!(first.source, "organic");
        assert_eq!(first.users, 30);
        assert!(first.medium.is_empty());
    }

    #[test]
    fn test_parse_count_handles_decimal_strings() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("12.9"), 12);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("NaN-ish"), 0);
    }
}
