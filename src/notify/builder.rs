//! Assembly of outbound notifications from fired alerts.
//!
//! The builder never writes an absent value into the message map: a field
//! whose source is missing is left out. Tag values are the exception and
//! fall back to `""`, keeping one output tag per source tag.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{NotificationConfig, TimestampZone};
use crate::error::BuildError;
use crate::event::FiredAlert;

use super::selector::first_event_eval;
use super::wire::{NotificationContext, OutboundNotification, Tag};

/// Message key for the trigger id.
pub const POLICY_ID: &str = "policy_id";
/// Message key for the trigger name.
pub const POLICY_NAME: &str = "policy_name";
/// Message key for the trigger description.
pub const POLICY_DESCRIPTION: &str = "policy_description";
/// Message key for the matched condition's expression.
pub const POLICY_CONDITION: &str = "policy_condition";
/// Message key, and evaluation-context key, for the inventory id.
pub const INSIGHTS_ID: &str = "insights_id";
/// Message key, and event tag key, for the host display name.
pub const DISPLAY_NAME: &str = "display_name";

/// Builds [`OutboundNotification`]s. Stateless apart from its constants.
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    event_type: String,
    application: String,
    zone: TimestampZone,
}

impl Default for NotificationBuilder {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}

impl NotificationBuilder {
    #[must_use]
    pub fn new(cfg: &NotificationConfig) -> Self {
        Self {
            event_type: cfg.event_type.clone(),
            application: cfg.application.clone(),
            zone: cfg.zone,
        }
    }

    /// Translates a fired alert into its outbound notification.
    ///
    /// # Errors
    ///
    /// - `BuildError::MissingTrigger` if the alert has no trigger.
    /// - `BuildError::MissingTag` if an event evaluation was selected but its
    ///   matched event has no `display_name` tag at all.
    /// - `BuildError::InvalidTimestamp` if `ctime` is out of range.
    pub fn build(&self, fired: &FiredAlert) -> Result<OutboundNotification, BuildError> {
        let trigger = fired.event.trigger.as_ref().ok_or_else(|| BuildError::MissingTrigger {
            event_id: fired.event_id.clone(),
        })?;

        let timestamp = self
            .zone
            .to_calendar(fired.ctime)
            .ok_or(BuildError::InvalidTimestamp { ctime: fired.ctime })?;

        let tags = fired
            .event
            .tags
            .entries()
            .map(|entry| Tag::new(entry.key.clone(), entry.value.clone().unwrap_or_default()))
            .collect();

        let mut message = BTreeMap::new();
        add_to_message(&mut message, POLICY_ID, Some(trigger.id.as_str()));
        add_to_message(&mut message, POLICY_NAME, Some(trigger.name.as_str()));
        add_to_message(&mut message, POLICY_DESCRIPTION, trigger.description.as_deref());

        if let Some(eval) = first_event_eval(&fired.event.eval_sets) {
            let display_name = eval
                .value
                .tags
                .first(DISPLAY_NAME)
                .ok_or_else(|| BuildError::MissingTag {
                    event_id: eval.value.id.clone(),
                    tag: DISPLAY_NAME.to_string(),
                })?;

            add_to_message(&mut message, POLICY_CONDITION, Some(eval.condition.expression.as_str()));
            add_to_message(&mut message, INSIGHTS_ID, eval.context.get(INSIGHTS_ID).map(String::as_str));
            add_to_message(&mut message, DISPLAY_NAME, display_name);
        } else {
            debug!(event_id = %fired.event_id, "no event evaluation found; condition fields omitted");
        }

        Ok(OutboundNotification {
            event_type: self.event_type.clone(),
            application: self.application.clone(),
            timestamp,
            event_id: fired.event_id.clone(),
            tags,
            event: NotificationContext {
                account_id: fired.tenant_id.clone(),
                message,
            },
        })
    }
}

fn add_to_message(message: &mut BTreeMap<String, String>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        message.insert(key.to_string(), value.to_string());
    }
}
