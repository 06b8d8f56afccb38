//! Reporting service over the GA4 Data API.
//!
//! [`AnalyticsService`] is the façade the dashboard handlers call: one
//! method per report, each following the same protocol:
//!
//! 1. With no configured client, return the placeholder for that report
//!    immediately - no request is attempted.
//! 2. Otherwise issue exactly one request with the report's shape.
//! 3. On failure, log and return the placeholder. The realtime top-events
//!    and top-pages leaderboards retry once against the last day of
//!    historical data before giving up.
//!
//! Methods never return errors; callers distinguish placeholder data via
//! the `-1` sentinels (and `isMock` on the engagement summary).
//!
//! # Construction
//!
//! The service is built once by the composition root and handed to
//! handlers - there is no global accessor. It is write-once and cheap to
//! clone.

mod demographics;
mod engagement;
mod realtime;
mod traffic;
mod users;

use std::sync::Arc;

use meridian_core::PropertyId;

use crate::config::Ga4Config;
use crate::ga4::{DataApiClient, ReportingClient};

/// The analytics reporting façade.
#[derive(Clone)]
pub struct AnalyticsService {
    target: Option<Target>,
}

/// A configured reporting destination: client plus target property.
#[derive(Clone)]
struct Target {
    client: Arc<dyn ReportingClient>,
    property: PropertyId,
}

impl AnalyticsService {
    /// Create a service reporting against `property` through `client`.
    #[must_use]
    pub fn new(client: Arc<dyn ReportingClient>, property: PropertyId) -> Self {
        Self {
            target: Some(Target { client, property }),
        }
    }

    /// Create a service with no reporting destination.
    ///
    /// Every report method returns its placeholder without issuing any
    /// request.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { target: None }
    }

    /// Build a service from loaded configuration.
    ///
    /// `None` configuration, or a client construction failure, degrades to
    /// the unconfigured service rather than erroring.
    #[must_use]
    pub fn from_config(config: Option<Ga4Config>) -> Self {
        let Some(config) = config else {
            return Self::unconfigured();
        };

        match DataApiClient::new(config.credentials) {
            Ok(client) => {
                tracing::info!(property = %config.property_id, "GA4 reporting configured");
                Self::new(Arc::new(client), config.property_id)
            }
            Err(error) => {
                tracing::warn!(%error, "failed to construct GA4 client, analytics will serve placeholder data");
                Self::unconfigured()
            }
        }
    }

    /// Whether a reporting destination is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.target.is_some()
    }

    /// The configured destination, if any.
    fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }
}

impl std::fmt::Debug for AnalyticsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsService")
            .field("property", &self.target.as_ref().map(|t| t.property.as_str()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fallback;
    use meridian_core::DateToken;

    #[test]
    fn test_from_config_none_is_unconfigured() {
        let service = AnalyticsService::from_config(None);
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_service_serves_placeholders() {
        let service = AnalyticsService::unconfigured();

        let engagement = service
            .engagement(DateToken::DaysAgo(7), DateToken::Today)
            .await;
        assert!(engagement.is_mock);

        let traffic = service
            .traffic_sources(DateToken::DaysAgo(7), DateToken::Today)
            .await;
        assert_eq!(traffic, fallback::traffic_sources());

        let events = service.top_events(5).await;
        assert_eq!(events, fallback::top_events(5));
    }
}
