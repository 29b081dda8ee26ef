//! Notification pipeline configuration.

use chrono::{FixedOffset, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Event type stamped on every outbound notification by default.
pub const DEFAULT_EVENT_TYPE: &str = "All";
/// Application name stamped on every outbound notification by default.
pub const DEFAULT_APPLICATION: &str = "Policies";

/// Time zone used to turn epoch milliseconds into a calendar timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampZone {
    /// The host system's local zone.
    #[default]
    Local,
    /// A fixed offset east of UTC.
    Fixed {
        offset_seconds: i32,
    },
}

impl TimestampZone {
    /// Converts epoch milliseconds to wall-clock time in this zone.
    ///
    /// Returns `None` when the instant is out of range or the offset is invalid.
    #[must_use]
    pub fn to_calendar(self, epoch_millis: i64) -> Option<NaiveDateTime> {
        match self {
            Self::Local => Local
                .timestamp_millis_opt(epoch_millis)
                .single()
                .map(|dt| dt.naive_local()),
            Self::Fixed { offset_seconds } => FixedOffset::east_opt(offset_seconds)?
                .timestamp_millis_opt(epoch_millis)
                .single()
                .map(|dt| dt.naive_local()),
        }
    }
}

/// Settings for building and dispatching notifications.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Constant `eventType` of outbound messages.
    pub event_type: String,
    /// Constant `application` of outbound messages.
    pub application: String,
    /// Zone for the `timestamp` field.
    pub zone: TimestampZone,
    /// Max queued payloads on the outbound channel. `None` means unbounded.
    pub buffer_capacity: Option<usize>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            event_type: DEFAULT_EVENT_TYPE.to_string(),
            application: DEFAULT_APPLICATION.to_string(),
            zone: TimestampZone::Local,
            buffer_capacity: None,
        }
    }
}

impl NotificationConfig {
    /// Parses a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is not valid JSON or has
    /// fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    #[must_use]
    pub fn with_zone(mut self, zone: TimestampZone) -> Self {
        self.zone = zone;
        self
    }

    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = Some(capacity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = NotificationConfig::default();
        assert_eq!(cfg.event_type, "All");
        assert_eq!(cfg.application, "Policies");
        assert_eq!(cfg.zone, TimestampZone::Local);
        assert_eq!(cfg.buffer_capacity, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = NotificationConfig::from_json(r#"{"application": "Drift", "buffer_capacity": 16}"#).unwrap();
        assert_eq!(cfg.application, "Drift");
        assert_eq!(cfg.event_type, "All");
        assert_eq!(cfg.buffer_capacity, Some(16));
    }

    #[test]
    fn test_fixed_zone_from_json() {
        let cfg = NotificationConfig::from_json(r#"{"zone": {"fixed": {"offset_seconds": 3600}}}"#).unwrap();
        assert_eq!(cfg.zone, TimestampZone::Fixed { offset_seconds: 3600 });
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = NotificationConfig::from_json(r#"{"buffer_capacity": "lots"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_fixed_zone_conversion() {
        let utc = TimestampZone::Fixed { offset_seconds: 0 };
        let ts = utc.to_calendar(1_700_000_000_123).unwrap();
        assert_eq!(ts.to_string(), "2023-11-14 22:13:20.123");

        let plus_two = TimestampZone::Fixed { offset_seconds: 7200 };
        assert_eq!(plus_two.to_calendar(0).unwrap().to_string(), "1970-01-01 02:00:00");
    }

    #[test]
    fn test_invalid_offset_or_instant() {
        assert!(TimestampZone::Fixed { offset_seconds: 90_000 }.to_calendar(0).is_none());
        assert!(TimestampZone::Fixed { offset_seconds: 0 }.to_calendar(i64::MAX).is_none());
    }
}
