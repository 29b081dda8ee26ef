//! Translation of fired alerts into outbound notifications.
//!
//! A fired alert flows through three stages: the selector picks the
//! representative event evaluation, the builder composes the wire entity, and
//! the dispatcher encodes and publishes it onto the outbound channel.

/// Outbound notification dispatch and delivery counting.
pub mod dispatcher;
/// Notification assembly.
pub mod builder;
/// Representative evaluation selection.
pub mod selector;
/// Consumer handle for published payloads.
pub mod stream;
/// Wire schema.
pub mod wire;

pub use builder::NotificationBuilder;
pub use dispatcher::{NotificationDispatcher, PLUGIN_NAME, PROCESSED_METRIC};
pub use selector::first_event_eval;
pub use stream::OutboundStream;
pub use wire::{NotificationContext, OutboundNotification, Tag};
