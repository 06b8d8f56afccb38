//! Traffic-sources report: sessions per channel grouping.

use tracing::instrument;

use meridian_core::{DateToken, TrafficSourcesSummary};

use super::AnalyticsService;
use crate::aggregate::{self, ChannelRow};
use crate::fallback;
use crate::ga4::types::{
    ApiDateRange, Dimension, Metric, RunReportRequest, dimensions, metrics,
};

/// Row limit for the channel-grouping report.
const ROW_LIMIT: i64 = 1000;

impl AnalyticsService {
    /// Sessions per traffic channel over a historical date range.
    ///
    /// Channel groupings outside the five fixed buckets are dropped.
    /// Returns the placeholder summary when unconfigured or on request
    /// failure.
    #[instrument(skip(self))]
    pub async fn traffic_sources(&self, start: DateToken, end: DateToken) -> TrafficSourcesSummary {
        let Some(target) = self.target() else {
            return fallback::traffic_sources();
        };

        let request = RunReportRequest {
            date_ranges: vec![ApiDateRange::new(start, end)],
            dimensions: vec![Dimension::new(dimensions::SESSION_DEFAULT_CHANNEL_GROUPING)],
            metrics: vec![Metric::new(metrics::SESSIONS)],
            order_bys: Vec::new(),
            limit: Some(ROW_LIMIT),
        };

        match target.client.run_report(&target.property, request).await {
            Ok(response) => aggregate::traffic_channels(&ChannelRow::from_response(&response)),
            Err(error) => {
                tracing::warn!(%error, "traffic sources report failed, serving placeholder data");
                fallback::traffic_sources()
            }
        }
    }
}
