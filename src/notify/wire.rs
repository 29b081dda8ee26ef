//! Outbound notification wire schema.
//!
//! The schema is fixed and externally versioned. It has no nullable fields:
//! absent message entries are omitted and tag values default to `""`.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// A key/value label copied from the source event.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Account scope and message fields of a notification.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContext {
    pub account_id: String,
    pub message: BTreeMap<String, String>,
}

/// The canonical message sent downstream for a fired alert.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundNotification {
    pub event_type: String,
    pub application: String,
    /// Wall-clock time in the configured zone, millisecond precision.
    #[serde(with = "calendar_millis")]
    pub timestamp: NaiveDateTime,
    pub event_id: String,
    pub tags: Vec<Tag>,
    pub event: NotificationContext,
}

impl OutboundNotification {
    /// Encodes the notification as JSON text.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::Serialize` if serialization fails.
    pub fn encode(&self) -> Result<String, EncodeError> {
        serde_json::to_string(self).map_err(EncodeError::Serialize)
    }

    /// Decodes a notification from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::Deserialize` if the payload does not match the schema.
    pub fn decode(payload: &str) -> Result<Self, EncodeError> {
        serde_json::from_str(payload).map_err(EncodeError::Deserialize)
    }

    /// Looks up a message field.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<&str> {
        self.event.message.get(key).map(String::as_str)
    }
}

mod calendar_millis {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, READ_FORMAT).map_err(serde::de::Error::custom)
    }
}
