//! User-type split and realtime active users.

use tracing::instrument;

use meridian_core::{ActiveUsersSummary, DateToken, UserTypesSummary};

use super::AnalyticsService;
use crate::aggregate::{self, LocationRow, UserTypeRow};
use crate::fallback;
use crate::ga4::types::{
    ApiDateRange, Dimension, Metric, RunRealtimeReportRequest, RunReportRequest, dimensions,
    metrics,
};

/// Row limit for the realtime active-users report.
const ACTIVE_USERS_ROW_LIMIT: i64 = 100;

impl AnalyticsService {
    /// New vs. returning active users over a historical date range.
    ///
    /// Returns the placeholder summary when unconfigured or on request
    /// failure.
    #[instrument(skip(self))]
    pub async fn user_types(&self, start: DateToken, end: DateToken) -> UserTypesSummary {
        let Some(target) = self.target() else {
            return fallback::user_types();
        };

        let request = RunReportRequest {
            date_ranges: vec![ApiDateRange::new(start, end)],
            dimensions: vec![Dimension::new(dimensions::NEW_VS_RETURNING)],
            metrics: vec![Metric::new(metrics::ACTIVE_USERS)],
            order_bys: Vec::new(),
            limit: None,
        };

        match target.client.run_report(&target.property, request).await {
            Ok(response) => aggregate::user_types(&UserTypeRow::from_response(&response)),
            Err(error) => {
                tracing::warn!(%error, "user types report failed, serving placeholder data");
                fallback::user_types()
            }
        }
    }

    /// Realtime active users with country and city leaderboards.
    ///
    /// Reflects roughly the last 30 minutes of activity. Returns the
    /// placeholder summary when unconfigured or on request failure.
    #[instrument(skip(self))]
    pub async fn active_users(&self) -> ActiveUsersSummary {
        let Some(target) = self.target() else {
            return fallback::active_users();
        };

        let request = RunRealtimeReportRequest {
            dimensions: vec![
                Dimension::new(dimensions::COUNTRY),
                Dimension::new(dimensions::CITY),
            ],
            metrics: vec![Metric::new(metrics::ACTIVE_USERS)],
            limit: Some(ACTIVE_USERS_ROW_LIMIT),
        };

        match target
            .client
            .run_realtime_report(&target.property, request)
            .await
        {
            Ok(response) => aggregate::active_users(&LocationRow::from_response(&response)),
            Err(error) => {
                tracing::warn!(%error, "realtime active users report failed, serving placeholder data");
                fallback::active_users()
            }
        }
    }
}
