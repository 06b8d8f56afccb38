//! Static placeholder summaries.
//!
//! Served whenever the Data API is unconfigured or a request fails. Every
//! numeric field is the `-1` sentinel - never 0, so consumers can tell
//! "no data available" apart from a genuinely quiet property. The city,
//! event, page, and source names are cosmetic seed values for the dashboard
//! cards, not measurements.

use meridian_core::{
    ActiveUsersSummary, AgeBracket, CityBreakdown, CityUsers, CountryUsers, DemographicsSummary,
    EngagementSummary, Gender, NamedCount, TrafficSourceDetail, TrafficSourcesSummary,
    UserTypesSummary,
};

/// The "no data" sentinel.
pub const SENTINEL: i64 = -1;

/// Illustrative city/country seed pairs for location cards.
const PLACEHOLDER_CITIES: &[(&str, &str)] = &[
    ("Mumbai", "India"),
    ("Delhi", "India"),
    ("Bengaluru", "India"),
    ("New York", "United States"),
    ("London", "United Kingdom"),
];

/// Illustrative event names for the top-events card.
const PLACEHOLDER_EVENTS: &[&str] = &[
    "page_view",
    "session_start",
    "first_visit",
    "user_engagement",
    "scroll",
];

/// Illustrative page paths for the top-pages card.
const PLACEHOLDER_PAGES: &[&str] = &["/", "/products", "/orders", "/coupons", "/reviews"];

/// Illustrative source/medium pairs for the traffic-sources card.
const PLACEHOLDER_SOURCES: &[(&str, &str)] = &[
    ("google", "organic"),
    ("(direct)", "(none)"),
    ("facebook.com", "referral"),
    ("instagram.com", "referral"),
    ("bing", "organic"),
];

/// Placeholder demographics: every bucket and city count is the sentinel.
#[must_use]
pub fn demographics() -> DemographicsSummary {
    DemographicsSummary {
        age_groups: AgeBracket::ALL.into_iter().map(|b| (b, SENTINEL)).collect(),
        gender_distribution: Gender::ALL.into_iter().map(|g| (g, SENTINEL)).collect(),
        cities: PLACEHOLDER_CITIES
            .iter()
            .map(|(city, country)| CityBreakdown {
                city: (*city).to_string(),
                country: (*country).to_string(),
                users: SENTINEL,
            })
            .collect(),
    }
}

/// Placeholder traffic sources: every channel bucket is the sentinel.
#[must_use]
pub const fn traffic_sources() -> TrafficSourcesSummary {
    TrafficSourcesSummary {
        direct: SENTINEL,
        organic: SENTINEL,
        social: SENTINEL,
        paid: SENTINEL,
        referral: SENTINEL,
    }
}

/// Placeholder engagement: every metric unavailable, `is_mock` set.
#[must_use]
pub const fn engagement() -> EngagementSummary {
    EngagementSummary::unavailable()
}

/// Placeholder user types.
#[must_use]
pub const fn user_types() -> UserTypesSummary {
    UserTypesSummary {
        new_users: SENTINEL,
        returning_users: SENTINEL,
    }
}

/// Placeholder realtime active users.
#[must_use]
pub fn active_users() -> ActiveUsersSummary {
    let mut countries: Vec<CountryUsers> = Vec::new();
    for (_, country) in PLACEHOLDER_CITIES {
        if !countries.iter().any(|c| c.country == *country) {
            countries.push(CountryUsers {
                country: (*country).to_string(),
                users: SENTINEL,
            });
        }
    }

    ActiveUsersSummary {
        total_active_users: SENTINEL,
        top_countries: countries,
        top_cities: PLACEHOLDER_CITIES
            .iter()
            .map(|(city, _)| CityUsers {
                city: (*city).to_string(),
                users: SENTINEL,
            })
            .collect(),
    }
}

/// Placeholder top events, capped at the caller's limit.
#[must_use]
pub fn top_events(limit: u32) -> Vec<NamedCount> {
    PLACEHOLDER_EVENTS
        .iter()
        .take(limit as usize)
        .map(|name| NamedCount {
            name: (*name).to_string(),
            count: SENTINEL,
        })
        .collect()
}

/// Placeholder top pages, capped at the caller's limit.
#[must_use]
pub fn top_pages(limit: u32) -> Vec<NamedCount> {
    PLACEHOLDER_PAGES
        .iter()
        .take(limit as usize)
        .map(|name| NamedCount {
            name: (*name).to_string(),
            count: SENTINEL,
        })
        .collect()
}

/// Placeholder realtime traffic sources, capped at the caller's limit.
#[must_use]
pub fn top_traffic_sources(limit: u32) -> Vec<TrafficSourceDetail> {
    PLACEHOLDER_SOURCES
        .iter()
        .take(limit as usize)
        .map(|(source, medium)| TrafficSourceDetail {
            source: (*source).to_string(),
            medium: (*medium).to_string(),
            users: SENTINEL,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demographics_placeholder_is_all_sentinels() {
        let summary = demographics();
        assert!(summary.age_groups.values().all(|&v| v == SENTINEL));
        assert!(summary.gender_distribution.values().all(|&v| v == SENTINEL));
        assert!(!summary.cities.is_empty());
        assert!(summary.cities.iter().all(|c| c.users == SENTINEL));
    }

    #[test]
    fn test_traffic_sources_placeholder_is_all_sentinels() {
        let summary = traffic_sources();
        assert_eq!(summary.total(), 5 * SENTINEL);
    }

    #[test]
    fn test_engagement_placeholder_is_mock() {
        let summary = engagement();
        assert!(summary.is_mock);
        assert!(summary.page_views.is_unavailable());
        assert!(summary.session_key_event_rate.is_unavailable());
    }

    #[test]
    fn test_active_users_placeholder_dedupes_countries() {
        let summary = active_users();
        assert_eq!(summary.total_active_users, SENTINEL);
        // Three distinct countries out of five seed cities.
        assert_eq!(summary.top_countries.len(), 3);
        assert_eq!(summary.top_cities.len(), 5);
    }

    #[test]
    fn test_leaderboard_placeholders_respect_limit() {
        assert_eq!(top_events(3).len(), 3);
        assert_eq!(top_pages(10).len(), 5);
        assert_eq!(top_traffic_sources(2).len(), 2);
        assert!(top_events(3).iter().all(|e| e.count == SENTINEL));
    }

    #[test]
    fn test_no_placeholder_uses_zero() {
        assert_ne!(SENTINEL, 0);
        let summary = user_types();
        assert_eq!(summary.new_users, SENTINEL);
        assert_eq!(summary.returning_users, SENTINEL);
    }
}
