//! Meridian Analytics - GA4 reporting adapter.
//!
//! This crate backs the admin dashboard's analytics pages. It shapes report
//! requests against the Google Analytics 4 Data API, folds the raw rows into
//! the normalized summaries of `meridian-core`, and degrades to deterministic
//! placeholder data whenever the API is unreachable or unconfigured, so the
//! dashboard never sees an analytics error.
//!
//! # Architecture
//!
//! - [`config`] - Environment configuration (property id + service account)
//! - [`ga4`] - Data API wire types, HTTP client, and service-account auth
//! - [`reporting`] - The [`AnalyticsService`] façade: one method per report
//! - [`aggregate`] - Pure folds from typed API rows into summaries
//! - [`fallback`] - Static placeholder summaries (`-1` sentinels)
//!
//! # Example
//!
//! ```rust,ignore
//! use meridian_analytics::{AnalyticsService, Ga4Config};
//!
//! let service = AnalyticsService::from_config(Ga4Config::from_env());
//!
//! // Historical demographics over the trailing week
//! let demographics = service
//!     .demographics(DateToken::DaysAgo(7), DateToken::Today)
//!     .await;
//!
//! // Realtime active users (roughly the last 30 minutes)
//! let active = service.active_users().await;
//! ```
//!
//! # Failure policy
//!
//! No public method returns an error. Configuration absence, credential
//! problems, and request failures all route to the fallback placeholders;
//! the engagement summary carries an explicit `is_mock` flag and every
//! placeholder numeric is the `-1` sentinel, never a real zero.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod config;
pub mod fallback;
pub mod ga4;
pub mod reporting;

pub use config::Ga4Config;
pub use ga4::{DataApiClient, Ga4Error, ReportingClient, ServiceAccountKey};
pub use reporting::AnalyticsService;
