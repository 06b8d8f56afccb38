//! Shared type definitions.
//!
//! # Modules
//!
//! - [`property`] - GA4 property identifier newtype
//! - [`range`] - Report date ranges and range-label resolution
//! - [`buckets`] - Fixed demographic and channel bucket enums
//! - [`metric_value`] - Availability-tagged metric values
//! - [`summaries`] - Normalized report summaries returned to callers

pub mod buckets;
pub mod metric_value;
pub mod property;
pub mod range;
pub mod summaries;

pub use buckets::{AgeBracket, Channel, Gender};
pub use metric_value::MetricValue;
pub use property::{PropertyId, PropertyIdError};
pub use range::{DateToken, ReportRange};
pub use summaries::{
    ActiveUsersSummary, CityBreakdown, CityUsers, CountryUsers, DemographicsSummary,
    EngagementSummary, NamedCount, TrafficSourceDetail, TrafficSourcesSummary, UserTypesSummary,
};
