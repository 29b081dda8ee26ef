//! Missing-data conditions.
//!
//! A missing-data condition is satisfied when no data or event has arrived
//! for a data id within `interval` milliseconds, counting from the last
//! observation or from when the trigger was enabled.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{Condition, Mode, VariantSpec};

/// Variant data of a missing-data condition.
///
/// # Examples
///
/// ```
/// use alertwire::condition::MissingData;
///
/// let missing = MissingData::new("agent-1", 1000);
/// assert!(!missing.matches(0, 1000));
/// assert!(missing.matches(0, 1001));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingData {
    /// The monitored data stream.
    pub data_id: String,
    /// Allowed gap, in milliseconds.
    pub interval: i64,
}

impl MissingData {
    #[must_use]
    pub fn new(data_id: impl Into<String>, interval: i64) -> Self {
        Self {
            data_id: data_id.into(),
            interval,
        }
    }

    /// True when strictly more than `interval` ms separate `previous_time` and `time`.
    ///
    /// `previous_time` is the last observation, or the trigger enablement time
    /// when nothing has been observed yet. Pure: evaluation timestamps are not
    /// touched.
    #[must_use]
    pub const fn matches(&self, previous_time: i64, time: i64) -> bool {
        previous_time.saturating_add(self.interval) < time
    }
}

impl VariantSpec for MissingData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        format!("{} missing GTE {}ms", self.data_id, self.interval)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.data_id.trim().is_empty() {
            return Err(ValidationError::missing("dataId"));
        }
        if self.interval <= 0 {
            return Err(ValidationError::NonPositive {
                field: "interval".to_string(),
                value: self.interval,
            });
        }
        Ok(())
    }
}

impl Condition {
    /// Creates a firing-mode missing-data condition, set 1 of 1.
    #[must_use]
    pub fn missing(
        tenant_id: impl Into<String>,
        trigger_id: impl Into<String>,
        data_id: impl Into<String>,
        interval: i64,
    ) -> Self {
        Self::single(tenant_id, trigger_id, Mode::Firing, MissingData::new(data_id, interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionKind;

    #[test]
    fn test_match_boundary_is_strict() {
        let missing = MissingData::new("hb", 1000);
        assert!(!missing.matches(0, 999));
        assert!(!missing.matches(0, 1000));
        assert!(missing.matches(0, 1001));
    }

    #[test]
    fn test_match_is_monotonic_in_time() {
        let missing = MissingData::new("hb", 500);
        let first_hit = (0..2000).find(|t| missing.matches(100, *t)).unwrap();
        assert_eq!(first_hit, 601);
        assert!((first_hit..first_hit + 100).all(|t| missing.matches(100, t)));
    }

    #[test]
    fn test_match_does_not_overflow() {
        let missing = MissingData::new("hb", i64::MAX);
        assert!(!missing.matches(i64::MAX, i64::MAX));
    }

    #[test]
    fn test_match_leaves_last_evaluation_untouched() {
        let condition = Condition::missing("t", "trig", "hb", 1000);
        let data = condition.variant::<MissingData>().unwrap();
        assert!(data.matches(0, 5000));
        assert_eq!(condition.last_evaluation(), 0);
    }

    #[test]
    fn test_display_string_template() {
        let condition = Condition::missing("t", "trig", "cpu.usage", 30_000);
        assert_eq!(condition.display_string(), "cpu.usage missing GTE 30000ms");
        assert_eq!(condition.kind(), ConditionKind::Missing);
        assert_eq!(condition.condition_id(), "t-trig-FIRING-1-1");
    }

    #[test]
    fn test_display_string_follows_mutation() {
        let mut condition = Condition::missing("t", "trig", "hb", 1000);
        if let Some(mut data) = condition.variant_mut::<MissingData>() {
            data.interval = 2500;
            data.data_id = "hb2".to_string();
        }
        assert_eq!(condition.display_string(), "hb2 missing GTE 2500ms");
    }

    #[test]
    fn test_validate_rejects_non_positive_interval() {
        for interval in [0, -1] {
            let condition = Condition::missing("t", "trig", "hb", interval);
            assert_eq!(
                condition.validate(),
                Err(ValidationError::NonPositive {
                    field: "interval".to_string(),
                    value: interval,
                })
            );
        }
    }

    #[test]
    fn test_validate_requires_data_id() {
        let condition = Condition::missing("t", "trig", "", 1000);
        assert_eq!(condition.validate(), Err(ValidationError::missing("dataId")));
        assert!(Condition::missing("t", "trig", "hb", 1).validate().is_ok());
    }

    #[test]
    fn test_equality_includes_interval() {
        let a = Condition::missing("t", "trig", "hb", 1000);
        let b = Condition::missing("t", "trig", "hb", 2000);
        assert_ne!(a, b);
    }
}
