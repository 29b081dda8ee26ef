//! Condition evaluation records.
//!
//! When a trigger's conditions are checked, each check produces one
//! evaluation record. Records are grouped into evaluation sets; a fired
//! alert carries an ordered list of them. The evaluation variants form a
//! closed set: event evaluations carry the matched event, missing-data
//! evaluations carry the gap that was measured, and every other kind is
//! represented generically.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::condition::{Condition, ConditionKind, MissingData};
use crate::error::ValidationError;
use crate::event::MatchedEvent;

/// One group of evaluation records.
///
/// Consumers should treat a set as unordered; iteration follows insertion
/// order.
pub type EvalSet = Vec<ConditionEval>;

/// Condition metadata snapshotted into an evaluation.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedCondition {
    pub condition_id: String,
    pub kind: ConditionKind,
    pub data_id: String,
    /// The condition's display string at evaluation time.
    pub expression: String,
}

impl From<&Condition> for EvaluatedCondition {
    fn from(condition: &Condition) -> Self {
        Self {
            condition_id: condition.condition_id().to_string(),
            kind: condition.kind(),
            data_id: condition.data_id().to_string(),
            expression: condition.display_string().to_string(),
        }
    }
}

fn expect_kind(condition: &Condition, expected: ConditionKind) -> Result<(), ValidationError> {
    if condition.kind() != expected {
        return Err(ValidationError::KindMismatch {
            expected,
            actual: condition.kind(),
        });
    }
    Ok(())
}

/// Evaluation of an event condition against a matched event.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConditionEval {
    pub condition: EvaluatedCondition,
    pub matched: bool,
    pub eval_timestamp: i64,
    #[serde(default)]
    pub context: HashMap<String, String>,
    pub value: MatchedEvent,
}

impl EventConditionEval {
    /// Records that `value` matched the event condition `condition`.
    ///
    /// The evaluation context starts as a copy of the condition's context.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::KindMismatch` if `condition` is not an event condition.
    pub fn new(condition: &Condition, value: MatchedEvent) -> Result<Self, ValidationError> {
        expect_kind(condition, ConditionKind::Event)?;
        Ok(Self {
            condition: EvaluatedCondition::from(condition),
            matched: true,
            eval_timestamp: Utc::now().timestamp_millis(),
            context: condition.context().clone(),
            value,
        })
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Evaluation of a missing-data condition.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingConditionEval {
    pub condition: EvaluatedCondition,
    pub matched: bool,
    pub eval_timestamp: i64,
    pub previous_time: i64,
    pub time: i64,
    #[serde(default)]
    pub context: HashMap<String, String>,
}

impl MissingConditionEval {
    /// Evaluates the gap between `previous_time` and `time`.
    ///
    /// The condition's `last_evaluation` is left alone; stamping it is the
    /// evaluation engine's job.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::KindMismatch` if `condition` is not a missing-data condition.
    pub fn evaluate(condition: &Condition, previous_time: i64, time: i64) -> Result<Self, ValidationError> {
        let Some(data) = condition.variant::<MissingData>() else {
            return Err(ValidationError::KindMismatch {
                expected: ConditionKind::Missing,
                actual: condition.kind(),
            });
        };
        Ok(Self {
            condition: EvaluatedCondition::from(condition),
            matched: data.matches(previous_time, time),
            eval_timestamp: Utc::now().timestamp_millis(),
            previous_time,
            time,
            context: condition.context().clone(),
        })
    }
}

/// Evaluation of any other condition kind.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericConditionEval {
    pub condition: EvaluatedCondition,
    pub matched: bool,
    pub eval_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub context: HashMap<String, String>,
}

impl GenericConditionEval {
    /// Records an outcome computed by the evaluation engine.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DedicatedEvaluation` for event and
    /// missing-data conditions.
    pub fn new(condition: &Condition, matched: bool, value: Option<String>) -> Result<Self, ValidationError> {
        let kind = condition.kind();
        if matches!(kind, ConditionKind::Event | ConditionKind::Missing) {
            return Err(ValidationError::DedicatedEvaluation { kind });
        }
        Ok(Self {
            condition: EvaluatedCondition::from(condition),
            matched,
            eval_timestamp: Utc::now().timestamp_millis(),
            value,
            context: condition.context().clone(),
        })
    }
}

/// A single condition evaluation record.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionEval {
    Event(EventConditionEval),
    Missing(MissingConditionEval),
    Generic(GenericConditionEval),
}

impl ConditionEval {
    #[must_use]
    pub const fn condition(&self) -> &EvaluatedCondition {
        match self {
            Self::Event(e) => &e.condition,
            Self::Missing(e) => &e.condition,
            Self::Generic(e) => &e.condition,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ConditionKind {
        self.condition().kind
    }

    #[must_use]
    pub const fn matched(&self) -> bool {
        match self {
            Self::Event(e) => e.matched,
            Self::Missing(e) => e.matched,
            Self::Generic(e) => e.matched,
        }
    }

    #[must_use]
    pub const fn is_event(&self) -> bool {
        matches!(self, Self::Event(_))
    }

    #[must_use]
    pub const fn as_event(&self) -> Option<&EventConditionEval> {
        match self {
            Self::Event(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EventConditionEval> for ConditionEval {
    fn from(eval: EventConditionEval) -> Self {
        Self::Event(eval)
    }
}

impl From<MissingConditionEval> for ConditionEval {
    fn from(eval: MissingConditionEval) -> Self {
        Self::Missing(eval)
    }
}

impl From<GenericConditionEval> for ConditionEval {
    fn from(eval: GenericConditionEval) -> Self {
        Self::Generic(eval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{CompareOperator, EventData, Mode, ThresholdData};

    fn event_condition() -> Condition {
        Condition::single("acme", "trig", Mode::Firing, EventData::new("app", None))
    }

    #[test]
    fn test_event_eval_snapshots_condition() {
        let mut condition = event_condition();
        condition.context_mut().insert("insights_id".to_string(), "abc".to_string());

        let eval = EventConditionEval::new(&condition, MatchedEvent::new("app", 1)).unwrap();
        assert_eq!(eval.condition.condition_id, "acme-trig-FIRING-1-1");
        assert_eq!(eval.condition.expression, "app matches any event");
        assert_eq!(eval.context.get("insights_id").map(String::as_str), Some("abc"));
        assert!(eval.matched);
    }

    #[test]
    fn test_event_eval_rejects_other_kinds() {
        let condition = Condition::missing("acme", "trig", "hb", 1000);
        let err = EventConditionEval::new(&condition, MatchedEvent::new("hb", 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::KindMismatch {
                expected: ConditionKind::Event,
                actual: ConditionKind::Missing,
            }
        );
    }

    #[test]
    fn test_missing_eval_uses_strict_gap() {
        let condition = Condition::missing("acme", "trig", "hb", 1000);
        assert!(!MissingConditionEval::evaluate(&condition, 0, 1000).unwrap().matched);
        let eval = MissingConditionEval::evaluate(&condition, 0, 1001).unwrap();
        assert!(eval.matched);
        assert_eq!(eval.condition.expression, "hb missing GTE 1000ms");
        assert_eq!(condition.last_evaluation(), 0);
    }

    #[test]
    fn test_missing_eval_rejects_other_kinds() {
        let err = MissingConditionEval::evaluate(&event_condition(), 0, 1).unwrap_err();
        assert!(matches!(err, ValidationError::KindMismatch { expected: ConditionKind::Missing, .. }));
    }

    #[test]
    fn test_generic_eval_rejects_dedicated_kinds() {
        assert_eq!(
            GenericConditionEval::new(&event_condition(), true, None).unwrap_err(),
            ValidationError::DedicatedEvaluation { kind: ConditionKind::Event }
        );
        let threshold = Condition::single("acme", "trig", Mode::Firing, ThresholdData::new("cpu", CompareOperator::Gt, 1.0));
        let eval = ConditionEval::from(GenericConditionEval::new(&threshold, true, Some("2.0".to_string())).unwrap());
        assert_eq!(eval.kind(), ConditionKind::Threshold);
        assert!(eval.matched());
        assert!(!eval.is_event());
    }

    #[test]
    fn test_condition_eval_tagged_serialization() {
        let eval = ConditionEval::from(EventConditionEval::new(&event_condition(), MatchedEvent::new("app", 5)).unwrap());
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["type"], "EVENT");
        assert_eq!(json["condition"]["kind"], "EVENT");

        let back: ConditionEval = serde_json::from_value(json).unwrap();
        assert_eq!(back, eval);
    }
}
