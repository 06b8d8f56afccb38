//! Integration tests for Meridian.
//!
//! The analytics adapter is exercised end-to-end against
//! [`FakeReportingClient`], an in-process Data API stand-in with scripted
//! responses and request counters, so every fallback tier can be driven
//! deterministically without credentials or network access.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p meridian-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use meridian_analytics::ga4::types::{
    RunRealtimeReportRequest, RunReportRequest, RunReportResponse,
};
use meridian_analytics::{Ga4Error, ReportingClient};
use meridian_core::PropertyId;

/// A scripted Data API client.
///
/// Each endpoint either returns its canned response or fails with a
/// scripted API error. Calls and request bodies are recorded for
/// assertions.
#[derive(Default)]
pub struct FakeReportingClient {
    report_response: Option<RunReportResponse>,
    realtime_response: Option<RunReportResponse>,
    report_calls: AtomicUsize,
    realtime_calls: AtomicUsize,
    report_requests: Mutex<Vec<RunReportRequest>>,
    realtime_requests: Mutex<Vec<RunRealtimeReportRequest>>,
}

impl FakeReportingClient {
    /// A client whose endpoints both fail.
    #[must_use]
    pub fn failing() -> Self {
        Self::default()
    }

    /// Script the historical endpoint to succeed with `response`.
    #[must_use]
    pub fn with_report(mut self, response: RunReportResponse) -> Self {
        self.report_response = Some(response);
        self
    }

    /// Script the realtime endpoint to succeed with `response`.
    #[must_use]
    pub fn with_realtime(mut self, response: RunReportResponse) -> Self {
        self.realtime_response = Some(response);
        self
    }

    /// Number of historical report calls received.
    #[must_use]
    pub fn report_calls(&self) -> usize {
        self.report_calls.load(Ordering::SeqCst)
    }

    /// Number of realtime report calls received.
    #[must_use]
    pub fn realtime_calls(&self) -> usize {
        self.realtime_calls.load(Ordering::SeqCst)
    }

    /// Total calls received across both endpoints.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.report_calls() + self.realtime_calls()
    }

    /// The most recent historical request body, if any.
    #[must_use]
    pub fn last_report_request(&self) -> Option<RunReportRequest> {
        self.report_requests
            .lock()
            .expect("request log poisoned")
            .last()
            .cloned()
    }

    /// The most recent realtime request body, if any.
    #[must_use]
    pub fn last_realtime_request(&self) -> Option<RunRealtimeReportRequest> {
        self.realtime_requests
            .lock()
            .expect("request log poisoned")
            .last()
            .cloned()
    }

    fn scripted_failure() -> Ga4Error {
        Ga4Error::Api {
            status: 503,
            message: "scripted failure".to_string(),
        }
    }
}

#[async_trait]
impl ReportingClient for FakeReportingClient {
    async fn run_report(
        &self,
        _property: &PropertyId,
        request: RunReportRequest,
    ) -> Result<RunReportResponse, Ga4Error> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        self.report_requests
            .lock()
            .expect("request log poisoned")
            .push(request);
        self.report_response
            .clone()
            .ok_or_else(Self::scripted_failure)
    }

    async fn run_realtime_report(
        &self,
        _property: &PropertyId,
        request: RunRealtimeReportRequest,
    ) -> Result<RunReportResponse, Ga4Error> {
        self.realtime_calls.fetch_add(1, Ordering::SeqCst);
        self.realtime_requests
            .lock()
            .expect("request log poisoned")
            .push(request);
        self.realtime_response
            .clone()
            .ok_or_else(Self::scripted_failure)
    }
}

/// Build a response wrapping `rows`.
#[must_use]
pub fn response_with_rows(rows: Vec<meridian_analytics::ga4::types::Row>) -> RunReportResponse {
    let row_count = i64::try_from(rows.len()).unwrap_or(0);
    RunReportResponse { rows, row_count }
}
