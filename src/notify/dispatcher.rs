//! Outbound notification dispatcher.
//!
//! Encodes notifications to JSON and publishes them on an in-process channel
//! consumed through an [`OutboundStream`]. The channel is unbounded unless the
//! config sets `buffer_capacity`, in which case a full buffer fails the
//! dispatch instead of blocking the caller.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{bounded, unbounded, Sender, TrySendError};
use tracing::{debug, error, warn};

use crate::config::NotificationConfig;
use crate::error::{AlertResult, DispatchError};
use crate::event::FiredAlert;
use crate::plugin::{ActionPlugin, ENDPOINT_ID, MANAGED};

use super::builder::NotificationBuilder;
use super::stream::OutboundStream;
use super::wire::OutboundNotification;

/// Registration name of the dispatcher plugin.
pub const PLUGIN_NAME: &str = "webhook";
/// Name of the delivered-notification counter.
pub const PROCESSED_METRIC: &str = "engine.actions.webhook.processed";

#[derive(Debug)]
pub struct NotificationDispatcher {
    builder: NotificationBuilder,
    tx: Sender<String>,
    capacity: Option<usize>,
    delivered: AtomicU64,
}

impl NotificationDispatcher {
    /// Creates a dispatcher and the stream its payloads are published on.
    #[must_use]
    pub fn new(cfg: &NotificationConfig) -> (Self, OutboundStream) {
        let capacity = cfg.buffer_capacity.map(|c| c.max(1));
        let (tx, rx) = match capacity {
            Some(capacity) => bounded(capacity),
            None => unbounded(),
        };

        let dispatcher = Self {
            builder: NotificationBuilder::new(cfg),
            tx,
            capacity,
            delivered: AtomicU64::new(0),
        };
        (dispatcher, OutboundStream::new(rx))
    }

    /// Encodes and publishes one notification, then counts it as delivered.
    ///
    /// Never blocks. Safe to call from many threads at once.
    ///
    /// # Errors
    ///
    /// - `EncodeError::Serialize` if encoding fails; nothing is published.
    /// - `DispatchError::ChannelFull` if a bounded buffer is full.
    /// - `DispatchError::ChannelClosed` if the stream was dropped.
    ///
    /// The counter is left untouched on every error path.
    pub fn dispatch(&self, notification: &OutboundNotification) -> AlertResult<()> {
        let payload = notification.encode().map_err(|err| {
            error!(event_id = %notification.event_id, error = %err, "failed to encode notification");
            err
        })?;

        let bytes = payload.len();
        self.publish(payload).map_err(|err| {
            warn!(event_id = %notification.event_id, error = %err, "failed to publish notification");
            err
        })?;

        let delivered = self.delivered.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(
            event_id = %notification.event_id,
            account_id = %notification.event.account_id,
            bytes,
            delivered,
            "notification dispatched"
        );
        Ok(())
    }

    fn publish(&self, payload: String) -> Result<(), DispatchError> {
        match self.tx.try_send(payload) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DispatchError::ChannelFull {
                capacity: self.capacity.unwrap_or_default(),
            }),
            Err(TrySendError::Disconnected(_)) => Err(DispatchError::ChannelClosed),
        }
    }

    /// Number of notifications successfully published by this dispatcher.
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Buffer limit, or `None` when unbounded.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[must_use]
    pub const fn builder(&self) -> &NotificationBuilder {
        &self.builder
    }

    /// Property keys the host must supply.
    #[must_use]
    pub fn required_properties() -> BTreeSet<&'static str> {
        BTreeSet::from([ENDPOINT_ID])
    }

    /// Property defaults handed to the host.
    #[must_use]
    pub fn property_defaults() -> BTreeMap<String, String> {
        BTreeMap::from([
            (MANAGED.to_string(), "true".to_string()),
            (ENDPOINT_ID.to_string(), String::new()),
        ])
    }
}

impl ActionPlugin for NotificationDispatcher {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn process(&self, fired: &FiredAlert) -> AlertResult<()> {
        let notification = self.builder.build(fired)?;
        self.dispatch(&notification)
    }

    /// Publishing is immediate; there is nothing to flush.
    fn flush(&self) {}

    fn properties(&self) -> BTreeSet<&'static str> {
        Self::required_properties()
    }

    fn default_properties(&self) -> BTreeMap<String, String> {
        Self::property_defaults()
    }
}
