//! Condition types and identity management.
//!
//! A condition is a single predicate attached to a trigger. Every condition
//! carries a composite identity (`tenant-trigger-MODE-size-index`) plus a
//! variant body describing what it checks. The set of variants is closed:
//! the [`ConditionKind`] tag is derived from the [`ConditionBody`], so the two
//! can never disagree.
//!
//! Conditions hold no internal synchronization. A condition is owned and
//! mutated by one logical owner at a time (the trigger-management layer);
//! sharing one across threads for mutation needs external locking.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The missing-data variant.
pub mod missing;
/// Data bodies for the remaining variants.
pub mod variants;

pub use missing::MissingData;
pub use variants::{
    AvailabilityData, AvailabilityOperator, CompareData, CompareOperator, EventData, ExternalData,
    NelsonData, NelsonRule, RangeData, RangeOperator, RateData, RateDirection, RatePeriod,
    StringData, StringOperator, ThresholdData,
};

/// The owning trigger's lifecycle phase a condition is active for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    #[default]
    Firing,
    Autoresolve,
}

impl Mode {
    /// Wire name of the mode, as used inside condition ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Firing => "FIRING",
            Self::Autoresolve => "AUTORESOLVE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of the condition variant.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionKind {
    Availability,
    Compare,
    String,
    Threshold,
    Range,
    External,
    Event,
    Rate,
    Missing,
    Nelson,
}

impl ConditionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Availability => "AVAILABILITY",
            Self::Compare => "COMPARE",
            Self::String => "STRING",
            Self::Threshold => "THRESHOLD",
            Self::Range => "RANGE",
            Self::External => "EXTERNAL",
            Self::Event => "EVENT",
            Self::Rate => "RATE",
            Self::Missing => "MISSING",
            Self::Nelson => "NELSON",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the composite condition key.
///
/// # Examples
///
/// ```
/// use alertwire::condition::{compute_condition_id, Mode};
///
/// let id = compute_condition_id("acme", "cpu-high", Mode::Firing, 2, 1);
/// assert_eq!(id, "acme-cpu-high-FIRING-2-1");
/// ```
#[must_use]
pub fn compute_condition_id(
    tenant_id: &str,
    trigger_id: &str,
    mode: Mode,
    condition_set_size: u32,
    condition_set_index: u32,
) -> String {
    format!("{tenant_id}-{trigger_id}-{mode}-{condition_set_size}-{condition_set_index}")
}

/// Identity fields of a condition.
///
/// The derived `condition_id` is recomputed by every setter before it
/// returns, so a stale key is never observable.
///
/// `1 <= condition_set_index <= condition_set_size` is a caller obligation and
/// is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionIdentity {
    tenant_id: String,
    trigger_id: String,
    trigger_mode: Mode,
    condition_set_size: u32,
    condition_set_index: u32,
    condition_id: String,
}

impl ConditionIdentity {
    #[must_use]
    pub fn new(
        tenant_id: impl Into<String>,
        trigger_id: impl Into<String>,
        trigger_mode: Mode,
        condition_set_size: u32,
        condition_set_index: u32,
    ) -> Self {
        let mut identity = Self {
            tenant_id: tenant_id.into(),
            trigger_id: trigger_id.into(),
            trigger_mode,
            condition_set_size,
            condition_set_index,
            condition_id: String::new(),
        };
        identity.update_id();
        identity
    }

    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    #[must_use]
    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    #[must_use]
    pub const fn trigger_mode(&self) -> Mode {
        self.trigger_mode
    }

    #[must_use]
    pub const fn condition_set_size(&self) -> u32 {
        self.condition_set_size
    }

    #[must_use]
    pub const fn condition_set_index(&self) -> u32 {
        self.condition_set_index
    }

    #[must_use]
    pub fn condition_id(&self) -> &str {
        &self.condition_id
    }

    pub fn set_tenant_id(&mut self, tenant_id: impl Into<String>) {
        self.tenant_id = tenant_id.into();
        self.update_id();
    }

    pub fn set_trigger_id(&mut self, trigger_id: impl Into<String>) {
        self.trigger_id = trigger_id.into();
        self.update_id();
    }

    pub fn set_trigger_mode(&mut self, trigger_mode: Mode) {
        self.trigger_mode = trigger_mode;
        self.update_id();
    }

    pub fn set_condition_set_size(&mut self, condition_set_size: u32) {
        self.condition_set_size = condition_set_size;
        self.update_id();
    }

    pub fn set_condition_set_index(&mut self, condition_set_index: u32) {
        self.condition_set_index = condition_set_index;
        self.update_id();
    }

    fn update_id(&mut self) {
        self.condition_id = compute_condition_id(
            &self.tenant_id,
            &self.trigger_id,
            self.trigger_mode,
            self.condition_set_size,
            self.condition_set_index,
        );
    }
}

/// Behavior every condition variant provides.
///
/// `validate` defaults to accepting everything; variants with required or
/// range-checked fields override it.
pub trait VariantSpec {
    /// The monitored data stream identifier.
    fn data_id(&self) -> &str;

    /// Canonical human-readable rendering of the condition expression.
    fn display_string(&self) -> String;

    /// Checks that required fields are present and in range.
    ///
    /// # Errors
    ///
    /// Returns a descriptive `ValidationError` for the first offending field.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Variant-specific data of a condition.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionBody {
    Availability(AvailabilityData),
    Compare(CompareData),
    String(StringData),
    Threshold(ThresholdData),
    Range(RangeData),
    External(ExternalData),
    Event(EventData),
    Rate(RateData),
    Missing(MissingData),
    Nelson(NelsonData),
}

macro_rules! with_variant {
    ($body:expr, $v:ident => $e:expr) => {
        match $body {
            ConditionBody::Availability($v) => $e,
            ConditionBody::Compare($v) => $e,
            ConditionBody::String($v) => $e,
            ConditionBody::Threshold($v) => $e,
            ConditionBody::Range($v) => $e,
            ConditionBody::External($v) => $e,
            ConditionBody::Event($v) => $e,
            ConditionBody::Rate($v) => $e,
            ConditionBody::Missing($v) => $e,
            ConditionBody::Nelson($v) => $e,
        }
    };
}

impl ConditionBody {
    #[must_use]
    pub const fn kind(&self) -> ConditionKind {
        match self {
            Self::Availability(_) => ConditionKind::Availability,
            Self::Compare(_) => ConditionKind::Compare,
            Self::String(_) => ConditionKind::String,
            Self::Threshold(_) => ConditionKind::Threshold,
            Self::Range(_) => ConditionKind::Range,
            Self::External(_) => ConditionKind::External,
            Self::Event(_) => ConditionKind::Event,
            Self::Rate(_) => ConditionKind::Rate,
            Self::Missing(_) => ConditionKind::Missing,
            Self::Nelson(_) => ConditionKind::Nelson,
        }
    }
}

impl VariantSpec for ConditionBody {
    fn data_id(&self) -> &str {
        with_variant!(self, v => v.data_id())
    }

    fn display_string(&self) -> String {
        with_variant!(self, v => v.display_string())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        with_variant!(self, v => v.validate())
    }
}

/// A variant data type that can be projected out of a [`ConditionBody`].
pub trait Variant: VariantSpec + Into<ConditionBody> {
    /// Tag of the body this type lives in.
    const KIND: ConditionKind;

    fn from_body(body: &ConditionBody) -> Option<&Self>;

    fn from_body_mut(body: &mut ConditionBody) -> Option<&mut Self>;
}

macro_rules! impl_variant {
    ($($name:ident => $data:ty),* $(,)?) => {
        $(
            impl From<$data> for ConditionBody {
                fn from(data: $data) -> Self {
                    Self::$name(data)
                }
            }

            impl Variant for $data {
                const KIND: ConditionKind = ConditionKind::$name;

                fn from_body(body: &ConditionBody) -> Option<&Self> {
                    match body {
                        ConditionBody::$name(data) => Some(data),
                        _ => None,
                    }
                }

                fn from_body_mut(body: &mut ConditionBody) -> Option<&mut Self> {
                    match body {
                        ConditionBody::$name(data) => Some(data),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_variant! {
    Availability => AvailabilityData,
    Compare => CompareData,
    String => StringData,
    Threshold => ThresholdData,
    Range => RangeData,
    External => ExternalData,
    Event => EventData,
    Rate => RateData,
    Missing => MissingData,
    Nelson => NelsonData,
}

/// Mutable access to a condition's variant data.
///
/// Dropping the guard clears the cached display string, so the next read
/// renders the mutated fields instead of a stale value.
pub struct VariantMut<'a, T> {
    data: &'a mut T,
    display: &'a mut OnceLock<String>,
}

impl<T> Deref for VariantMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.data
    }
}

impl<T> DerefMut for VariantMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.data
    }
}

impl<T> Drop for VariantMut<'_, T> {
    fn drop(&mut self) {
        self.display.take();
    }
}

/// A predicate attached to a trigger.
///
/// # Examples
///
/// ```
/// use alertwire::condition::{Condition, MissingData, Mode};
///
/// let mut condition = Condition::new("acme", "heartbeat", Mode::Firing, 1, 1, MissingData::new("agent-1", 60_000));
/// assert_eq!(condition.condition_id(), "acme-heartbeat-FIRING-1-1");
/// assert_eq!(condition.display_string(), "agent-1 missing GTE 60000ms");
///
/// condition.set_trigger_mode(Mode::Autoresolve);
/// assert_eq!(condition.condition_id(), "acme-heartbeat-AUTORESOLVE-1-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ConditionRecord", into = "ConditionRecord")]
pub struct Condition {
    identity: ConditionIdentity,
    body: ConditionBody,
    context: HashMap<String, String>,
    display: OnceLock<String>,
    last_evaluation: i64,
}

impl Condition {
    /// Creates a condition and renders its display string.
    #[must_use]
    pub fn new(
        tenant_id: impl Into<String>,
        trigger_id: impl Into<String>,
        trigger_mode: Mode,
        condition_set_size: u32,
        condition_set_index: u32,
        body: impl Into<ConditionBody>,
    ) -> Self {
        let identity = ConditionIdentity::new(
            tenant_id,
            trigger_id,
            trigger_mode,
            condition_set_size,
            condition_set_index,
        );
        Self::from_parts(identity, body.into())
    }

    /// Creates the only condition of a trigger (set 1 of 1).
    ///
    /// The tenant may be left empty and assigned later from the request context.
    #[must_use]
    pub fn single(
        tenant_id: impl Into<String>,
        trigger_id: impl Into<String>,
        trigger_mode: Mode,
        body: impl Into<ConditionBody>,
    ) -> Self {
        Self::new(tenant_id, trigger_id, trigger_mode, 1, 1, body)
    }

    /// Assembles a condition from an identity and body.
    #[must_use]
    pub fn from_parts(identity: ConditionIdentity, body: ConditionBody) -> Self {
        let display = OnceLock::new();
        let _ = display.set(body.display_string());
        Self {
            identity,
            body,
            context: HashMap::new(),
            display,
            last_evaluation: 0,
        }
    }

    #[must_use]
    pub const fn identity(&self) -> &ConditionIdentity {
        &self.identity
    }

    #[must_use]
    pub fn tenant_id(&self) -> &str {
        self.identity.tenant_id()
    }

    #[must_use]
    pub fn trigger_id(&self) -> &str {
        self.identity.trigger_id()
    }

    #[must_use]
    pub const fn trigger_mode(&self) -> Mode {
        self.identity.trigger_mode()
    }

    #[must_use]
    pub const fn condition_set_size(&self) -> u32 {
        self.identity.condition_set_size()
    }

    #[must_use]
    pub const fn condition_set_index(&self) -> u32 {
        self.identity.condition_set_index()
    }

    #[must_use]
    pub fn condition_id(&self) -> &str {
        self.identity.condition_id()
    }

    pub fn set_tenant_id(&mut self, tenant_id: impl Into<String>) {
        self.identity.set_tenant_id(tenant_id);
    }

    pub fn set_trigger_id(&mut self, trigger_id: impl Into<String>) {
        self.identity.set_trigger_id(trigger_id);
    }

    pub fn set_trigger_mode(&mut self, trigger_mode: Mode) {
        self.identity.set_trigger_mode(trigger_mode);
    }

    pub fn set_condition_set_size(&mut self, condition_set_size: u32) {
        self.identity.set_condition_set_size(condition_set_size);
    }

    pub fn set_condition_set_index(&mut self, condition_set_index: u32) {
        self.identity.set_condition_set_index(condition_set_index);
    }

    #[must_use]
    pub const fn kind(&self) -> ConditionKind {
        self.body.kind()
    }

    #[must_use]
    pub fn data_id(&self) -> &str {
        self.body.data_id()
    }

    #[must_use]
    pub const fn body(&self) -> &ConditionBody {
        &self.body
    }

    /// Returns the variant data if this condition is of kind `T::KIND`.
    #[must_use]
    pub fn variant<T: Variant>(&self) -> Option<&T> {
        T::from_body(&self.body)
    }

    /// Mutable access to the variant data if this condition is of kind `T::KIND`.
    ///
    /// The display string is invalidated when the returned guard is dropped.
    pub fn variant_mut<T: Variant>(&mut self) -> Option<VariantMut<'_, T>> {
        let Self { body, display, .. } = self;
        T::from_body_mut(body).map(|data| VariantMut { data, display })
    }

    /// User-defined properties of this condition.
    #[must_use]
    pub const fn context(&self) -> &HashMap<String, String> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.context
    }

    pub fn set_context(&mut self, context: HashMap<String, String>) {
        self.context = context;
    }

    /// Canonical display string, rendered on first access if not cached.
    #[must_use]
    pub fn display_string(&self) -> &str {
        self.display.get_or_init(|| self.body.display_string())
    }

    /// Overrides the cached display string until the variant data is next mutated.
    pub fn set_display_string(&mut self, display: impl Into<String>) {
        self.display = OnceLock::from(display.into());
    }

    /// Re-renders the display string from the current variant data.
    pub fn update_display_string(&mut self) {
        self.display = OnceLock::from(self.body.display_string());
    }

    /// Last time this condition was evaluated, epoch milliseconds.
    #[must_use]
    pub const fn last_evaluation(&self) -> i64 {
        self.last_evaluation
    }

    pub fn set_last_evaluation(&mut self, last_evaluation: i64) {
        self.last_evaluation = last_evaluation;
    }

    /// Stamps `last_evaluation` with the current wall-clock time.
    pub fn touch_evaluation_timestamp(&mut self) {
        self.last_evaluation = Utc::now().timestamp_millis();
    }

    /// Validates the variant data.
    ///
    /// The identity fields are not checked here.
    ///
    /// # Errors
    ///
    /// Returns the variant's `ValidationError` when a required field is absent
    /// or out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.body.validate()
    }

    /// Whether this condition has the same persisted field values as `other`.
    ///
    /// Used by reconciliation to decide whether a stored condition changed.
    /// Currently every variant compares with full equality.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        self == other
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity && self.body == other.body
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConditionRecord {
    #[serde(default)]
    tenant_id: String,
    #[serde(default)]
    trigger_id: String,
    #[serde(default)]
    trigger_mode: Mode,
    #[serde(default = "default_set_value")]
    condition_set_size: u32,
    #[serde(default = "default_set_value")]
    condition_set_index: u32,
    #[serde(default)]
    condition_id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    context: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_string: Option<String>,
    #[serde(default)]
    last_evaluation: i64,
    #[serde(flatten)]
    body: ConditionBody,
}

const fn default_set_value() -> u32 {
    1
}

impl From<ConditionRecord> for Condition {
    fn from(record: ConditionRecord) -> Self {
        // The stored condition id is ignored; it is always derived.
        let identity = ConditionIdentity::new(
            record.tenant_id,
            record.trigger_id,
            record.trigger_mode,
            record.condition_set_size,
            record.condition_set_index,
        );
        let mut condition = Self::from_parts(identity, record.body);
        condition.context = record.context;
        condition.last_evaluation = record.last_evaluation;
        if let Some(display) = record.display_string {
            condition.set_display_string(display);
        }
        condition
    }
}

impl From<Condition> for ConditionRecord {
    fn from(condition: Condition) -> Self {
        let display_string = Some(condition.display_string().to_string());
        let Condition {
            identity,
            body,
            context,
            last_evaluation,
            ..
        } = condition;
        Self {
            tenant_id: identity.tenant_id,
            trigger_id: identity.trigger_id,
            trigger_mode: identity.trigger_mode,
            condition_set_size: identity.condition_set_size,
            condition_set_index: identity.condition_set_index,
            condition_id: identity.condition_id,
            context,
            display_string,
            last_evaluation,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> ThresholdData {
        ThresholdData::new("cpu", CompareOperator::Gt, 90.0)
    }

    #[test]
    fn test_condition_id_concatenation() {
        let c = Condition::new("t1", "trig", Mode::Autoresolve, 3, 2, threshold());
        assert_eq!(c.condition_id(), "t1-trig-AUTORESOLVE-3-2");
        assert_eq!(c.kind(), ConditionKind::Threshold);
    }

    #[test]
    fn test_every_identity_setter_updates_id() {
        let mut c = Condition::single("", "trig", Mode::Firing, threshold());
        assert_eq!(c.condition_id(), "-trig-FIRING-1-1");

        c.set_tenant_id("acme");
        assert_eq!(c.condition_id(), "acme-trig-FIRING-1-1");
        c.set_trigger_id("other");
        assert_eq!(c.condition_id(), "acme-other-FIRING-1-1");
        c.set_trigger_mode(Mode::Autoresolve);
        assert_eq!(c.condition_id(), "acme-other-AUTORESOLVE-1-1");
        c.set_condition_set_size(4);
        assert_eq!(c.condition_id(), "acme-other-AUTORESOLVE-4-1");
        c.set_condition_set_index(3);
        assert_eq!(c.condition_id(), "acme-other-AUTORESOLVE-4-3");
    }

    #[test]
    fn test_index_out_of_range_is_accepted() {
        let c = Condition::new("t", "trig", Mode::Firing, 1, 5, threshold());
        assert_eq!(c.condition_set_index(), 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_equality_ignores_context_and_display() {
        let a = Condition::single("t", "trig", Mode::Firing, threshold());
        let mut b = a.clone();
        b.context_mut().insert("owner".to_string(), "ops".to_string());
        b.set_display_string("custom");
        b.set_last_evaluation(42);

        assert_eq!(a, b);
        assert!(a.is_same(&b));
    }

    #[test]
    fn test_equality_includes_variant_fields() {
        let a = Condition::single("t", "trig", Mode::Firing, threshold());
        let b = Condition::single("t", "trig", Mode::Firing, ThresholdData::new("cpu", CompareOperator::Gt, 95.0));
        assert_ne!(a, b);
        assert!(!a.is_same(&b));
    }

    #[test]
    fn test_clone_does_not_alias_context() {
        let mut a = Condition::single("t", "trig", Mode::Firing, threshold());
        a.context_mut().insert("k".to_string(), "v".to_string());
        a.set_last_evaluation(7);

        let mut b = a.clone();
        b.context_mut().insert("k".to_string(), "changed".to_string());

        assert_eq!(a.context().get("k").map(String::as_str), Some("v"));
        assert_eq!(b.last_evaluation(), 7);
        assert_eq!(b.display_string(), a.display_string());
    }

    #[test]
    fn test_context_starts_empty_and_persists_mutation() {
        let mut c = Condition::single("t", "trig", Mode::Firing, threshold());
        assert!(c.context().is_empty());
        c.context_mut().insert("k".to_string(), "v".to_string());
        assert_eq!(c.context().len(), 1);
    }

    #[test]
    fn test_display_override_kept_until_variant_mutation() {
        let mut c = Condition::single("t", "trig", Mode::Firing, threshold());
        assert_eq!(c.display_string(), "cpu GT 90.00");

        c.set_display_string("custom");
        assert_eq!(c.display_string(), "custom");

        if let Some(mut data) = c.variant_mut::<ThresholdData>() {
            data.threshold = 75.5;
        }
        assert_eq!(c.display_string(), "cpu GT 75.50");
    }

    #[test]
    fn test_update_display_string_rerenders() {
        let mut c = Condition::single("t", "trig", Mode::Firing, threshold());
        c.set_display_string("stale");
        c.update_display_string();
        assert_eq!(c.display_string(), "cpu GT 90.00");
    }

    #[test]
    fn test_variant_projection_by_kind() {
        let mut c = Condition::single("t", "trig", Mode::Firing, threshold());
        assert!(c.variant::<ThresholdData>().is_some());
        assert!(c.variant::<MissingData>().is_none());
        assert!(c.variant_mut::<MissingData>().is_none());
    }

    #[test]
    fn test_touch_evaluation_timestamp() {
        let mut c = Condition::single("t", "trig", Mode::Firing, threshold());
        assert_eq!(c.last_evaluation(), 0);
        let before = Utc::now().timestamp_millis();
        c.touch_evaluation_timestamp();
        assert!(c.last_evaluation() >= before);
    }

    #[test]
    fn test_serialization_shape() {
        let c = Condition::new("t", "trig", Mode::Firing, 2, 1, MissingData::new("hb", 5000));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "MISSING");
        assert_eq!(json["tenantId"], "t");
        assert_eq!(json["conditionId"], "t-trig-FIRING-2-1");
        assert_eq!(json["dataId"], "hb");
        assert_eq!(json["interval"], 5000);
        assert_eq!(json["displayString"], "hb missing GTE 5000ms");
        assert!(json.get("context").is_none());
    }

    #[test]
    fn test_deserialization_recomputes_id() {
        let json = r#"{
            "tenantId": "acme",
            "triggerId": "trig",
            "triggerMode": "AUTORESOLVE",
            "conditionSetSize": 2,
            "conditionSetIndex": 2,
            "conditionId": "bogus",
            "type": "THRESHOLD",
            "dataId": "mem",
            "operator": "LTE",
            "threshold": 10.0
        }"#;
        let c: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(c.condition_id(), "acme-trig-AUTORESOLVE-2-2");
        assert_eq!(c.display_string(), "mem LTE 10.00");
    }
}
