//! Availability-tagged metric values.
//!
//! Placeholder summaries historically signalled "no data" with the sentinel
//! `-1`, and dashboard consumers still expect that on the wire. In memory
//! the distinction is kept explicit instead of overloading the numeric
//! domain; the serializer emits the sentinel for unavailable values so
//! serialized output stays consumer-compatible.

use serde::Serialize;

/// A metric value that is either measured or unavailable.
///
/// Serializes as the inner value when available, or as `-1` when not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricValue<T> {
    /// A genuinely measured value (which may be zero).
    Available(T),
    /// No data; serializes as the `-1` sentinel.
    Unavailable,
}

impl<T> MetricValue<T> {
    /// Whether this value is the unavailable sentinel.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// The measured value, or `default` when unavailable.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Available(value) => value,
            Self::Unavailable => default,
        }
    }

    /// The measured value, if any.
    #[must_use]
    pub fn available(self) -> Option<T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable => None,
        }
    }
}

impl<T> From<T> for MetricValue<T> {
    fn from(value: T) -> Self {
        Self::Available(value)
    }
}

impl<T: Serialize> Serialize for MetricValue<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Available(value) => value.serialize(serializer),
            Self::Unavailable => serializer.serialize_i64(-1),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_available_serializes_as_value() {
        let value: MetricValue<u64> = MetricValue::Available(42);
        assert_eq!(serde_json::to_value(value).unwrap(), serde_json::json!(42));
    }

    #[test]
    fn test_available_zero_is_distinct_from_unavailable() {
        let zero: MetricValue<u64> = MetricValue::Available(0);
        assert_eq!(serde_json::to_value(zero).unwrap(), serde_json::json!(0));
        assert!(!zero.is_unavailable());
    }

    #[test]
    fn test_unavailable_serializes_as_sentinel() {
        let value: MetricValue<u64> = MetricValue::Unavailable;
        assert_eq!(serde_json::to_value(value).unwrap(), serde_json::json!(-1));
    }

    #[test]
    fn test_unavailable_float_serializes_as_integer_sentinel() {
        let value: MetricValue<f64> = MetricValue::Unavailable;
        assert_eq!(serde_json::to_value(value).unwrap(), serde_json::json!(-1));
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(MetricValue::Available(7_u64).unwrap_or(0), 7);
        assert_eq!(MetricValue::<u64>::Unavailable.unwrap_or(0), 0);
    }
}
