//! Meridian Core - Shared types library.
//!
//! This crate provides common types used across all Meridian components:
//! - `analytics` - GA4 reporting adapter serving the admin dashboard
//! - `integration-tests` - End-to-end tests over the adapter surface
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no configuration. This keeps it lightweight and allows it to be
//! used anywhere, including inside the dashboard's request handlers.
//!
//! # Modules
//!
//! - [`types`] - Property id newtype, report ranges, metric buckets, and the
//!   normalized summary shapes returned by the reporting adapter

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
