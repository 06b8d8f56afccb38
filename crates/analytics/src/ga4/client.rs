//! HTTP client for the GA4 Data API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use meridian_core::PropertyId;

use super::auth::ServiceAccountKey;
use super::types::{RunRealtimeReportRequest, RunReportRequest, RunReportResponse};
use super::{Ga4Error, ReportingClient};

/// Data API base URL.
const BASE_URL: &str = "https://analyticsdata.googleapis.com/v1beta";

/// GA4 Data API client.
///
/// Issues `runReport` and `runRealtimeReport` calls authenticated with a
/// per-request self-signed service-account token. Cheap to clone.
#[derive(Clone)]
pub struct DataApiClient {
    inner: Arc<DataApiClientInner>,
}

struct DataApiClientInner {
    client: reqwest::Client,
    key: ServiceAccountKey,
}

impl DataApiClient {
    /// Create a new Data API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(key: ServiceAccountKey) -> Result<Self, Ga4Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: Arc::new(DataApiClientInner { client, key }),
        })
    }

    /// The service-account identity this client authenticates as.
    #[must_use]
    pub fn client_email(&self) -> &str {
        &self.inner.key.client_email
    }

    /// Execute a report POST against the Data API.
    async fn post_report<B: Serialize + Sync>(
        &self,
        method: &str,
        property: &PropertyId,
        body: &B,
    ) -> Result<RunReportResponse, Ga4Error> {
        let token = self.inner.key.sign_bearer_token()?;
        let url = format!("{BASE_URL}/properties/{property}:{method}");
        let response = self
            .inner
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle an API response and parse the report JSON.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<RunReportResponse, Ga4Error> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| Ga4Error::Parse(format!("failed to parse report response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Map an error response to the client error taxonomy.
    async fn parse_error(response: reqwest::Response) -> Ga4Error {
        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Ga4Error::RateLimited(retry_after);
        }

        if status == 401 || status == 403 {
            return Ga4Error::Unauthorized;
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Ga4Error::Api { status, message }
    }
}

#[async_trait]
impl ReportingClient for DataApiClient {
    #[instrument(skip(self, request), fields(property = %property))]
    async fn run_report(
        &self,
        property: &PropertyId,
        request: RunReportRequest,
    ) -> Result<RunReportResponse, Ga4Error> {
        self.post_report("runReport", property, &request).await
    }

    #[instrument(skip(self, request), fields(property = %property))]
    async fn run_realtime_report(
        &self,
        property: &PropertyId,
        request: RunRealtimeReportRequest,
    ) -> Result<RunReportResponse, Ga4Error> {
        self.post_report("runRealtimeReport", property, &request)
            .await
    }
}

impl std::fmt::Debug for DataApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataApiClient")
            .field("client_email", &self.inner.key.client_email)
            .finish_non_exhaustive()
    }
}
