//! GA4 Data API wire types.
//!
//! Serde models of the Data API v1beta request and response JSON. Field
//! names follow the API's camelCase; dimension and metric API names live in
//! the [`dimensions`] and [`metrics`] constant modules so report shapes are
//! spelled in one place.

use serde::{Deserialize, Serialize};

use meridian_core::DateToken;

/// Dimension API names used by the reports.
pub mod dimensions {
    pub const COUNTRY: &str = "country";
    pub const CITY: &str = "city";
    pub const USER_AGE_BRACKET: &str = "userAgeBracket";
    pub const USER_GENDER: &str = "userGender";
    pub const SESSION_DEFAULT_CHANNEL_GROUPING: &str = "sessionDefaultChannelGrouping";
    pub const NEW_VS_RETURNING: &str = "newVsReturning";
    pub const EVENT_NAME: &str = "eventName";
    pub const PAGE_PATH: &str = "pagePath";
    pub const PAGE_TITLE: &str = "pageTitle";
    pub const SESSION_SOURCE: &str = "sessionSource";
    pub const SESSION_MEDIUM: &str = "sessionMedium";
}

/// Metric API names used by the reports.
pub mod metrics {
    pub const ACTIVE_USERS: &str = "activeUsers";
    pub const SESSIONS: &str = "sessions";
    pub const PAGE_VIEWS: &str = "pageViews";
    pub const BOUNCE_RATE: &str = "bounceRate";
    pub const ENGAGED_SESSIONS: &str = "engagedSessions";
    pub const ENGAGEMENT_RATE: &str = "engagementRate";
    pub const AVERAGE_SESSION_DURATION: &str = "averageSessionDuration";
    pub const EVENT_COUNT: &str = "eventCount";
    pub const KEY_EVENTS: &str = "keyEvents";
    pub const SESSION_KEY_EVENT_RATE: &str = "sessionKeyEventRate";
}

/// A dimension reference in a report request.
#[derive(Debug, Clone, Serialize)]
pub struct Dimension {
    pub name: String,
}

impl Dimension {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// A metric reference in a report request.
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub name: String,
}

impl Metric {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// A date range in a report request (both bounds inclusive).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDateRange {
    pub start_date: DateToken,
    pub end_date: DateToken,
}

impl ApiDateRange {
    #[must_use]
    pub const fn new(start_date: DateToken, end_date: DateToken) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// The trailing day (`1daysAgo`..`today`), used by the historical
    /// fallback tier of the realtime leaderboards.
    #[must_use]
    pub const fn trailing_day() -> Self {
        Self {
            start_date: DateToken::DaysAgo(1),
            end_date: DateToken::Today,
        }
    }
}

/// Ordering clause for a report request (descending by a metric).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub metric: MetricOrderBy,
    pub desc: bool,
}

/// The metric an [`OrderBy`] sorts on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricOrderBy {
    pub metric_name: String,
}

impl OrderBy {
    /// Order descending by the named metric.
    #[must_use]
    pub fn metric_desc(metric_name: &str) -> Self {
        Self {
            metric: MetricOrderBy {
                metric_name: metric_name.to_string(),
            },
            desc: true,
        }
    }
}

/// Body of a `properties/{id}:runReport` request.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date_ranges: Vec<ApiDateRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Body of a `properties/{id}:runRealtimeReport` request.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunRealtimeReportRequest {
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// A dimension or metric value in a response row.
///
/// The API returns every value as a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiValue {
    #[serde(default)]
    pub value: String,
}

/// One response row: ordered dimension values, then ordered metric values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(default)]
    pub dimension_values: Vec<ApiValue>,
    #[serde(default)]
    pub metric_values: Vec<ApiValue>,
}

impl Row {
    /// Build a row from string slices (used by tests and fixtures).
    #[must_use]
    pub fn new(dimension_values: &[&str], metric_values: &[&str]) -> Self {
        let to_values = |values: &[&str]| {
            values
                .iter()
                .map(|value| ApiValue {
                    value: (*value).to_string(),
                })
                .collect()
        };
        Self {
            dimension_values: to_values(dimension_values),
            metric_values: to_values(metric_values),
        }
    }

    /// Dimension value at `index`, or `""` when absent.
    #[must_use]
    pub fn dimension(&self, index: usize) -> &str {
        self.dimension_values.get(index).map_or("", |v| v.value.as_str())
    }

    /// Metric value at `index`, or `""` when absent.
    #[must_use]
    pub fn metric(&self, index: usize) -> &str {
        self.metric_values.get(index).map_or("", |v| v.value.as_str())
    }
}

/// Response of both `runReport` and `runRealtimeReport`.
///
/// Only the fields the aggregators consume are modeled; everything else in
/// the response is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportResponse {
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub row_count: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_run_report_request_serializes_camel_case() {
        let request = RunReportRequest {
            date_ranges: vec![ApiDateRange::trailing_day()],
            dimensions: vec![Dimension::new(dimensions::EVENT_NAME)],
            metrics: vec![Metric::new(metrics::EVENT_COUNT)],
            order_bys: vec![OrderBy::metric_desc(metrics::EVENT_COUNT)],
            limit: Some(10),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dateRanges": [{"startDate": "1daysAgo", "endDate": "today"}],
                "dimensions": [{"name": "eventName"}],
                "metrics": [{"name": "eventCount"}],
                "orderBys": [{"metric": {"metricName": "eventCount"}, "desc": true}],
                "limit": 10,
            })
        );
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let request = RunReportRequest {
            metrics: vec![Metric::new(metrics::SESSIONS)],
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("dateRanges").is_none());
        assert!(json.get("dimensions").is_none());
        assert!(json.get("orderBys").is_none());
        assert!(json.get("limit").is_none());
    }

    #[test]
    fn test_response_rows_parse() {
        let json = serde_json::json!({
            "dimensionHeaders": [{"name": "country"}],
            "metricHeaders": [{"name": "activeUsers", "type": "TYPE_INTEGER"}],
            "rows": [
                {"dimensionValues": [{"value": "India"}], "metricValues": [{"value": "42"}]}
            ],
            "rowCount": 1,
        });
        let response: RunReportResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.row_count, 1);
        assert_eq!(response.rows.len(), 1);
        let row = response.rows.first().unwrap();
        assert_eq!(row.dimension(0), "India");
        assert_eq!(row.metric(0), "42");
    }

    #[test]
    fn test_response_without_rows_parses_empty() {
        let response: RunReportResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.rows.is_empty());
        assert_eq!(response.row_count, 0);
    }

    #[test]
    fn test_row_accessors_tolerate_missing_indices() {
        let row = Row::new(&["only"], &[]);
        assert_eq!(row.dimension(0), "only");
        assert_eq!(row.dimension(5), "");
        assert_eq!(row.metric(0), "");
    }
}
