//! Google Analytics 4 Data API client.
//!
//! # Architecture
//!
//! - Direct REST calls to the Data API v1beta (no SDK, no codegen)
//! - Service-account auth via self-signed RS256 JWTs - no token-exchange
//!   round trip and no token cache, so the client stays write-once
//! - [`ReportingClient`] is the seam the reporting service depends on;
//!   [`DataApiClient`] is the production implementation
//!
//! # Example
//!
//! ```rust,ignore
//! use meridian_analytics::ga4::{DataApiClient, ServiceAccountKey};
//!
//! let key = ServiceAccountKey::from_json(&key_json)?;
//! let client = DataApiClient::new(key)?;
//!
//! let response = client.run_report(&property, request).await?;
//! ```

pub mod auth;
pub mod client;
pub mod types;

pub use auth::ServiceAccountKey;
pub use client::DataApiClient;

use async_trait::async_trait;
use thiserror::Error;

use meridian_core::PropertyId;

use types::{RunRealtimeReportRequest, RunReportRequest, RunReportResponse};

/// Errors that can occur when interacting with the GA4 Data API.
#[derive(Debug, Error)]
pub enum Ga4Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the Data API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Service account rejected (invalid key or missing property access).
    #[error("Unauthorized: service account rejected")]
    Unauthorized,

    /// Credential or token signing failure.
    #[error("Auth error: {0}")]
    Auth(String),

    /// Failed to parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The reporting operations the adapter needs from the Data API.
///
/// Both calls return the same response shape; the realtime variant has no
/// date range and reflects roughly the last 30 minutes of activity.
#[async_trait]
pub trait ReportingClient: Send + Sync {
    /// Run a historical report against `properties/{property}`.
    async fn run_report(
        &self,
        property: &PropertyId,
        request: RunReportRequest,
    ) -> Result<RunReportResponse, Ga4Error>;

    /// Run a realtime report against `properties/{property}`.
    async fn run_realtime_report(
        &self,
        property: &PropertyId,
        request: RunRealtimeReportRequest,
    ) -> Result<RunReportResponse, Ga4Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Ga4Error::Api {
            status: 400,
            message: "invalid dimension".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 400 - invalid dimension");
    }

    #[test]
    fn test_rate_limited_error_display() {
        let err = Ga4Error::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_auth_error_display() {
        let err = Ga4Error::Auth("invalid private key".to_string());
        assert_eq!(err.to_string(), "Auth error: invalid private key");
    }
}
