//! Error types for alertwire.
//!
//! All errors are strongly typed using thiserror so callers can match on
//! the specific failure. Nothing in this crate retries or swallows an error;
//! every failure path is returned to the immediate caller.

use thiserror::Error;

use crate::condition::ConditionKind;

/// Validation errors raised by condition variants.
///
/// These are meant to block persistence upstream.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required field '{field}' is missing")]
    MissingField {
        field: String,
    },

    #[error("Field '{field}' must be positive, got {value}")]
    NonPositive {
        field: String,
        value: i64,
    },

    #[error("Invalid range for '{field}': {reason}")]
    InvalidRange {
        field: String,
        reason: String,
    },

    #[error("Expected a {expected} condition, got {actual}")]
    KindMismatch {
        expected: ConditionKind,
        actual: ConditionKind,
    },

    #[error("{kind} conditions have a dedicated evaluation type")]
    DedicatedEvaluation {
        kind: ConditionKind,
    },
}

impl ValidationError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

/// Malformed fired-alert input detected while assembling a notification.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    #[error("Alert '{event_id}' has no trigger attached")]
    MissingTrigger {
        event_id: String,
    },

    #[error("Matched event '{event_id}' carries no '{tag}' tag")]
    MissingTag {
        event_id: String,
        tag: String,
    },

    #[error("Creation time {ctime} cannot be represented as a calendar timestamp")]
    InvalidTimestamp {
        ctime: i64,
    },
}

/// Wire encoding errors.
///
/// The builder is supposed to prevent these; seeing one is a programming error.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to encode notification: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to decode notification: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Errors publishing onto the outbound channel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    #[error("Outbound channel is full (capacity {capacity})")]
    ChannelFull {
        capacity: usize,
    },

    #[error("Outbound channel is closed")]
    ChannelClosed,

    #[error("No payload received within {duration_ms}ms")]
    Timeout {
        duration_ms: u64,
    },
}

/// Configuration errors from the hosting plugin layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for property '{key}'")]
    InvalidProperty {
        key: String,
        value: String,
    },

    #[error("Invalid notification config: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Top-level error type for alertwire.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AlertError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the fired-alert input was malformed.
    #[must_use]
    pub const fn is_build(&self) -> bool {
        matches!(self, Self::Build(_))
    }

    /// Returns true if this is an encoding error.
    #[must_use]
    pub const fn is_encode(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    /// Returns true if publishing failed.
    #[must_use]
    pub const fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type alias for alertwire operations.
pub type AlertResult<T> = Result<T, AlertError>;
