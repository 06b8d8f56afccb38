//! Demographics report: age, gender, and city splits.

use tracing::instrument;

use meridian_core::{DateToken, DemographicsSummary};

use super::AnalyticsService;
use crate::aggregate::{self, DemographicsRow};
use crate::fallback;
use crate::ga4::types::{
    ApiDateRange, Dimension, Metric, RunReportRequest, dimensions, metrics,
};

/// Row limit for the demographics report.
const ROW_LIMIT: i64 = 100;

impl AnalyticsService {
    /// Demographic splits of active users over a historical date range.
    ///
    /// Returns the placeholder summary when unconfigured or on request
    /// failure.
    #[instrument(skip(self))]
    pub async fn demographics(&self, start: DateToken, end: DateToken) -> DemographicsSummary {
        let Some(target) = self.target() else {
            return fallback::demographics();
        };

        let request = RunReportRequest {
            date_ranges: vec![ApiDateRange::new(start, end)],
            dimensions: vec![
                Dimension::new(dimensions::COUNTRY),
                Dimension::new(dimensions::CITY),
                Dimension::new(dimensions::USER_AGE_BRACKET),
                Dimension::new(dimensions::USER_GENDER),
            ],
            metrics: vec![Metric::new(metrics::ACTIVE_USERS)],
            order_bys: Vec::new(),
            limit: Some(ROW_LIMIT),
        };

        match target.client.run_report(&target.property, request).await {
            Ok(response) => aggregate::demographics(&DemographicsRow::from_response(&response)),
            Err(error) => {
                tracing::warn!(%error, "demographics report failed, serving placeholder data");
                fallback::demographics()
            }
        }
    }
}
