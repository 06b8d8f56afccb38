//! Realtime leaderboards: top events, top pages, top traffic sources.
//!
//! The realtime endpoint supports only a subset of dimensions, and which
//! subset varies by property configuration, so these leaderboards carry an
//! extra fallback tier: a rejected realtime request retries once against
//! the last day of historical data before serving the static placeholder.
//! Top traffic sources instead delegates to the channel-grouping report and
//! reshapes its buckets.

use tracing::instrument;

use meridian_core::{DateToken, NamedCount, ReportRange, TrafficSourceDetail};

use super::AnalyticsService;
use crate::aggregate::{self, NamedCountRow, SourceMediumRow};
use crate::fallback;
use crate::ga4::types::{
    ApiDateRange, Dimension, Metric, OrderBy, RunRealtimeReportRequest, RunReportRequest,
    dimensions, metrics,
};

impl AnalyticsService {
    /// Top events by count, realtime with a historical fallback tier.
    #[instrument(skip(self))]
    pub async fn top_events(&self, limit: u32) -> Vec<NamedCount> {
        let Some(target) = self.target() else {
            return fallback::top_events(limit);
        };

        let realtime = RunRealtimeReportRequest {
            dimensions: vec![Dimension::new(dimensions::EVENT_NAME)],
            metrics: vec![Metric::new(metrics::EVENT_COUNT)],
            limit: Some(i64::from(limit)),
        };
        match target
            .client
            .run_realtime_report(&target.property, realtime)
            .await
        {
            Ok(response) => {
                return aggregate::named_counts(&NamedCountRow::from_event_rows(&response), limit);
            }
            Err(error) => {
                tracing::warn!(%error, "realtime top events failed, retrying against the last day");
            }
        }

        let historical = RunReportRequest {
            date_ranges: vec![ApiDateRange::trailing_day()],
            dimensions: vec![Dimension::new(dimensions::EVENT_NAME)],
            metrics: vec![Metric::new(metrics::EVENT_COUNT)],
            order_bys: vec![OrderBy::metric_desc(metrics::EVENT_COUNT)],
            limit: Some(i64::from(limit)),
        };
        match target.client.run_report(&target.property, historical).await {
            Ok(response) => {
                aggregate::named_counts(&NamedCountRow::from_event_rows(&response), limit)
            }
            Err(error) => {
                tracing::warn!(%error, "historical top events failed, serving placeholder data");
                fallback::top_events(limit)
            }
        }
    }

    /// Top pages by views, realtime with a historical fallback tier.
    #[instrument(skip(self))]
    pub async fn top_pages(&self, limit: u32) -> Vec<NamedCount> {
        let Some(target) = self.target() else {
            return fallback::top_pages(limit);
        };

        let realtime = RunRealtimeReportRequest {
            dimensions: vec![
                Dimension::new(dimensions::PAGE_PATH),
                Dimension::new(dimensions::PAGE_TITLE),
            ],
            metrics: vec![Metric::new(metrics::ACTIVE_USERS)],
            limit: Some(i64::from(limit)),
        };
        match target
            .client
            .run_realtime_report(&target.property, realtime)
            .await
        {
            Ok(response) => {
                return aggregate::named_counts(&NamedCountRow::from_page_rows(&response), limit);
            }
            Err(error) => {
                tracing::warn!(%error, "realtime top pages failed, retrying against the last day");
            }
        }

        let historical = RunReportRequest {
            date_ranges: vec![ApiDateRange::trailing_day()],
            dimensions: vec![
                Dimension::new(dimensions::PAGE_PATH),
                Dimension::new(dimensions::PAGE_TITLE),
            ],
            metrics: vec![Metric::new(metrics::PAGE_VIEWS)],
            order_bys: vec![OrderBy::metric_desc(metrics::PAGE_VIEWS)],
            limit: Some(i64::from(limit)),
        };
        match target.client.run_report(&target.property, historical).await {
            Ok(response) => {
                aggregate::named_counts(&NamedCountRow::from_page_rows(&response), limit)
            }
            Err(error) => {
                tracing::warn!(%error, "historical top pages failed, serving placeholder data");
                fallback::top_pages(limit)
            }
        }
    }

    /// Top traffic sources for a range label.
    ///
    /// A label resolving to realtime queries source/medium against the
    /// realtime endpoint. A historical label - or a rejected realtime
    /// request - delegates to the channel-grouping report over the resolved
    /// bounds (the last day when no bounds were resolved) and reshapes its
    /// buckets into source rows with an empty medium.
    #[instrument(skip(self))]
    pub async fn top_traffic_sources(
        &self,
        label: Option<&str>,
        limit: u32,
    ) -> Vec<TrafficSourceDetail> {
        let range = ReportRange::resolve_now(label);

        let Some(target) = self.target() else {
            return fallback::top_traffic_sources(limit);
        };

        if range.is_realtime() {
            let realtime = RunRealtimeReportRequest {
                dimensions: vec![
                    Dimension::new(dimensions::SESSION_SOURCE),
                    Dimension::new(dimensions::SESSION_MEDIUM),
                ],
                metrics: vec![Metric::new(metrics::ACTIVE_USERS)],
                limit: Some(i64::from(limit)),
            };
            match target
                .client
                .run_realtime_report(&target.property, realtime)
                .await
            {
                Ok(response) => {
                    return aggregate::traffic_source_details(
                        &SourceMediumRow::from_response(&response),
                        limit,
                    );
                }
                Err(error) => {
                    tracing::warn!(%error, "realtime traffic sources failed, falling back to channel groupings");
                }
            }
        }

        let (start, end) = match range {
            ReportRange::Historical { start, end } => (start, end),
            ReportRange::Realtime => (DateToken::DaysAgo(1), DateToken::Today),
        };
        let channels = self.traffic_sources(start, end).await;
        aggregate::channel_details(&channels, limit)
    }
}
