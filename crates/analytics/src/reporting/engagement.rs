//! Engagement report: aggregate page-view, session, and event metrics.

use tracing::instrument;

use meridian_core::{DateToken, EngagementSummary};

use super::AnalyticsService;
use crate::aggregate::{self, EngagementRow};
use crate::fallback;
use crate::ga4::types::{ApiDateRange, Metric, RunReportRequest, metrics};

impl AnalyticsService {
    /// Aggregate engagement metrics over a historical date range.
    ///
    /// The report has no dimensions, so a single aggregate row comes back.
    /// An empty row set is treated the same as a failed request: both serve
    /// the placeholder (`is_mock` set, all metrics unavailable), so a
    /// property with no data never renders as a wall of real zeros.
    #[instrument(skip(self))]
    pub async fn engagement(&self, start: DateToken, end: DateToken) -> EngagementSummary {
        let Some(target) = self.target() else {
            return fallback::engagement();
        };

        // Metric order here is the positional order the boundary mapper
        // reads back; the two must stay in sync.
        let request = RunReportRequest {
            date_ranges: vec![ApiDateRange::new(start, end)],
            dimensions: Vec::new(),
            metrics: vec![
                Metric::new(metrics::PAGE_VIEWS),
                Metric::new(metrics::SESSIONS),
                Metric::new(metrics::BOUNCE_RATE),
                Metric::new(metrics::ENGAGED_SESSIONS),
                Metric::new(metrics::ENGAGEMENT_RATE),
                Metric::new(metrics::AVERAGE_SESSION_DURATION),
                Metric::new(metrics::EVENT_COUNT),
                Metric::new(metrics::KEY_EVENTS),
                Metric::new(metrics::SESSION_KEY_EVENT_RATE),
            ],
            order_bys: Vec::new(),
            limit: None,
        };

        match target.client.run_report(&target.property, request).await {
            Ok(response) => match EngagementRow::from_response(&response) {
                Some(row) => aggregate::engagement(&row),
                None => {
                    tracing::warn!("engagement report returned no rows, serving placeholder data");
                    fallback::engagement()
                }
            },
            Err(error) => {
                tracing::warn!(%error, "engagement report failed, serving placeholder data");
                fallback::engagement()
            }
        }
    }
}
