//! # alertwire - Condition identity and alert notification translation
//!
//! `alertwire` sits between a rule-based alerting engine and its downstream
//! notification consumers. It owns two concerns:
//!
//! - **Conditions**: a composite, deterministic identity for each condition of
//!   a trigger, a closed set of condition bodies (including the temporal
//!   missing-data variant), and a lazily cached display string.
//! - **Notifications**: translating a fired alert into the canonical
//!   [`OutboundNotification`], encoding it to JSON, and publishing it on an
//!   in-process channel while counting deliveries.
//!
//! ## Usage
//!
//! ```rust
//! use alertwire::{
//!     ActionPlugin, Alert, Condition, EventConditionEval, EventData, FiredAlert, MatchedEvent,
//!     Mode, NotificationConfig, NotificationDispatcher, OutboundNotification, TagMultimap,
//!     Trigger,
//! };
//!
//! let condition = Condition::single("acme", "t1", Mode::Firing, EventData::new("inventory", None));
//! let tags: TagMultimap = [("display_name", "host-1")].into_iter().collect();
//! let eval = EventConditionEval::new(&condition, MatchedEvent::new("inventory", 0).with_tags(tags))?;
//!
//! let mut alert = Alert::new("acme", Trigger::new("t1", "Trigger One"), 0);
//! alert.eval_sets = vec![vec![eval.into()]];
//!
//! let (dispatcher, stream) = NotificationDispatcher::new(&NotificationConfig::default());
//! dispatcher.process(&FiredAlert::from_alert(alert))?;
//!
//! let notification = OutboundNotification::decode(&stream.recv()?)?;
//! assert_eq!(notification.message("display_name"), Some("host-1"));
//! assert_eq!(dispatcher.delivered(), 1);
//! # Ok::<(), alertwire::AlertError>(())
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Conditions and their evaluation results
pub mod condition;
pub mod error;
pub mod eval;
pub mod event;

// Notification translation and delivery
pub mod config;
pub mod notify;
pub mod plugin;

// Re-export primary types at crate root for convenience
pub use condition::{
    compute_condition_id, Condition, ConditionBody, ConditionIdentity, ConditionKind, EventData,
    MissingData, Mode, ThresholdData, Variant, VariantMut, VariantSpec,
};
pub use config::{NotificationConfig, TimestampZone};
pub use error::{
    AlertError, AlertResult, BuildError, ConfigError, DispatchError, EncodeError, ValidationError,
};
pub use eval::{
    ConditionEval, EvalSet, EvaluatedCondition, EventConditionEval, GenericConditionEval,
    MissingConditionEval,
};
pub use event::{Alert, FiredAlert, MatchedEvent, TagEntry, TagMultimap, Trigger};
pub use notify::{
    first_event_eval, NotificationBuilder, NotificationContext, NotificationDispatcher,
    OutboundNotification, OutboundStream, Tag,
};
pub use plugin::{ActionPlugin, PluginProperties};
