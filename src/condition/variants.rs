//! Data bodies for condition variants other than missing data.
//!
//! These carry the persisted fields, the canonical display string, and field
//! validation. Evaluating them against incoming data belongs to the
//! evaluation engine.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::VariantSpec;

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}

/// Availability states checked by an [`AvailabilityData`] condition.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityOperator {
    Down,
    NotUp,
    Up,
}

impl fmt::Display for AvailabilityOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Down => "DOWN",
            Self::NotUp => "NOT_UP",
            Self::Up => "UP",
        })
    }
}

/// Numeric comparison operators.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompareOperator {
    Lt,
    Gt,
    Lte,
    Gte,
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Lte => "LTE",
            Self::Gte => "GTE",
        })
    }
}

/// String matching operators.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StringOperator {
    Equal,
    NotEqual,
    StartsWith,
    EndsWith,
    Contains,
    Match,
}

impl fmt::Display for StringOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::StartsWith => "STARTS_WITH",
            Self::EndsWith => "ENDS_WITH",
            Self::Contains => "CONTAINS",
            Self::Match => "MATCH",
        })
    }
}

/// Whether a range bound includes its endpoint.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeOperator {
    Inclusive,
    Exclusive,
}

/// Direction of change watched by a rate condition.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateDirection {
    Decreasing,
    Increasing,
    Na,
}

impl fmt::Display for RateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decreasing => "DECREASING",
            Self::Increasing => "INCREASING",
            Self::Na => "NA",
        })
    }
}

/// Time unit a rate is normalized to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatePeriod {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Second => "SECOND",
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
        })
    }
}

/// Nelson control-chart rules.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NelsonRule {
    Rule1,
    Rule2,
    Rule3,
    Rule4,
    Rule5,
    Rule6,
    Rule7,
    Rule8,
}

impl fmt::Display for NelsonRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Availability of a resource matches an operator.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    pub data_id: String,
    pub operator: AvailabilityOperator,
}

impl AvailabilityData {
    #[must_use]
    pub fn new(data_id: impl Into<String>, operator: AvailabilityOperator) -> Self {
        Self {
            data_id: data_id.into(),
            operator,
        }
    }
}

impl VariantSpec for AvailabilityData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        format!("{} is {}", self.data_id, self.operator)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)
    }
}

/// Compares one data stream against a multiple of another.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareData {
    pub data_id: String,
    pub operator: CompareOperator,
    pub data2_id: String,
    pub data2_multiplier: f64,
}

impl CompareData {
    #[must_use]
    pub fn new(
        data_id: impl Into<String>,
        operator: CompareOperator,
        data2_multiplier: f64,
        data2_id: impl Into<String>,
    ) -> Self {
        Self {
            data_id: data_id.into(),
            operator,
            data2_id: data2_id.into(),
            data2_multiplier,
        }
    }
}

impl VariantSpec for CompareData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        format!(
            "{} {} {:.2}*{}",
            self.data_id, self.operator, self.data2_multiplier, self.data2_id
        )
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)?;
        require("data2Id", &self.data2_id)
    }
}

/// String data matches a pattern.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringData {
    pub data_id: String,
    pub operator: StringOperator,
    pub pattern: String,
    #[serde(default)]
    pub ignore_case: bool,
}

impl StringData {
    #[must_use]
    pub fn new(
        data_id: impl Into<String>,
        operator: StringOperator,
        pattern: impl Into<String>,
        ignore_case: bool,
    ) -> Self {
        Self {
            data_id: data_id.into(),
            operator,
            pattern: pattern.into(),
            ignore_case,
        }
    }
}

impl VariantSpec for StringData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        let suffix = if self.ignore_case { " (ignoreCase)" } else { "" };
        format!("{} {} {}{suffix}", self.data_id, self.operator, self.pattern)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)
    }
}

/// Numeric data crosses a fixed threshold.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdData {
    pub data_id: String,
    pub operator: CompareOperator,
    pub threshold: f64,
}

impl ThresholdData {
    #[must_use]
    pub fn new(data_id: impl Into<String>, operator: CompareOperator, threshold: f64) -> Self {
        Self {
            data_id: data_id.into(),
            operator,
            threshold,
        }
    }
}

impl VariantSpec for ThresholdData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        format!("{} {} {:.2}", self.data_id, self.operator, self.threshold)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)
    }
}

/// Numeric data falls inside (or outside) a range.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeData {
    pub data_id: String,
    pub operator_low: RangeOperator,
    pub operator_high: RangeOperator,
    pub threshold_low: f64,
    pub threshold_high: f64,
    pub in_range: bool,
}

impl VariantSpec for RangeData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        let verb = if self.in_range { "in" } else { "not in" };
        let open = match self.operator_low {
            RangeOperator::Inclusive => '[',
            RangeOperator::Exclusive => '(',
        };
        let close = match self.operator_high {
            RangeOperator::Inclusive => ']',
            RangeOperator::Exclusive => ')',
        };
        format!(
            "{} {verb} {open}{:.2} , {:.2}{close}",
            self.data_id, self.threshold_low, self.threshold_high
        )
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)?;
        if self.threshold_low > self.threshold_high {
            return Err(ValidationError::InvalidRange {
                field: "thresholdLow".to_string(),
                reason: format!(
                    "low bound {} exceeds high bound {}",
                    self.threshold_low, self.threshold_high
                ),
            });
        }
        Ok(())
    }
}

/// Evaluated by an external alerter.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalData {
    pub alerter_id: String,
    pub data_id: String,
    pub expression: String,
}

impl VariantSpec for ExternalData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        format!("{}[{}]: {}", self.alerter_id, self.data_id, self.expression)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("alerterId", &self.alerter_id)?;
        require("dataId", &self.data_id)
    }
}

/// Matches incoming events on a data id, optionally filtered by an expression.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub data_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl EventData {
    #[must_use]
    pub fn new(data_id: impl Into<String>, expression: Option<String>) -> Self {
        Self {
            data_id: data_id.into(),
            expression,
        }
    }
}

impl VariantSpec for EventData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        match &self.expression {
            Some(expression) => format!("{} matches [{expression}]", self.data_id),
            None => format!("{} matches any event", self.data_id),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)
    }
}

/// Rate of change crosses a threshold.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateData {
    pub data_id: String,
    pub direction: RateDirection,
    pub period: RatePeriod,
    pub operator: CompareOperator,
    pub threshold: f64,
}

impl VariantSpec for RateData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        format!(
            "{} {} {} {:.2} per {}",
            self.data_id, self.direction, self.operator, self.threshold, self.period
        )
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)
    }
}

/// Statistical process control using Nelson rules.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NelsonData {
    pub data_id: String,
    pub active_rules: BTreeSet<NelsonRule>,
    pub sample_size: u32,
}

impl VariantSpec for NelsonData {
    fn data_id(&self) -> &str {
        &self.data_id
    }

    fn display_string(&self) -> String {
        let rules: Vec<String> = self.active_rules.iter().map(ToString::to_string).collect();
        format!("{} violates one or more of [{}]", self.data_id, rules.join(", "))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("dataId", &self.data_id)?;
        if self.active_rules.is_empty() {
            return Err(ValidationError::missing("activeRules"));
        }
        if self.sample_size == 0 {
            return Err(ValidationError::NonPositive {
                field: "sampleSize".to_string(),
                value: 0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(
            AvailabilityData::new("svc", AvailabilityOperator::NotUp).display_string(),
            "svc is NOT_UP"
        );
        assert_eq!(
            CompareData::new("heap", CompareOperator::Gte, 0.8, "heap.max").display_string(),
            "heap GTE 0.80*heap.max"
        );
        assert_eq!(
            StringData::new("log", StringOperator::Contains, "ERROR", true).display_string(),
            "log CONTAINS ERROR (ignoreCase)"
        );
        assert_eq!(
            EventData::new("app.events", Some("category == 'ALERT'".to_string())).display_string(),
            "app.events matches [category == 'ALERT']"
        );
        assert_eq!(EventData::new("app.events", None).display_string(), "app.events matches any event");
    }

    #[test]
    fn test_range_display_and_validation() {
        let mut range = RangeData {
            data_id: "temp".to_string(),
            operator_low: RangeOperator::Inclusive,
            operator_high: RangeOperator::Exclusive,
            threshold_low: 10.0,
            threshold_high: 20.0,
            in_range: false,
        };
        assert_eq!(range.display_string(), "temp not in [10.00 , 20.00)");
        assert!(range.validate().is_ok());

        range.threshold_low = 30.0;
        assert!(matches!(range.validate(), Err(ValidationError::InvalidRange { .. })));
    }

    #[test]
    fn test_rate_display() {
        let rate = RateData {
            data_id: "requests".to_string(),
            direction: RateDirection::Increasing,
            period: RatePeriod::Minute,
            operator: CompareOperator::Gt,
            threshold: 100.0,
        };
        assert_eq!(rate.display_string(), "requests INCREASING GT 100.00 per MINUTE");
    }

    #[test]
    fn test_nelson_display_and_validation() {
        let mut nelson = NelsonData {
            data_id: "latency".to_string(),
            active_rules: [NelsonRule::Rule2, NelsonRule::Rule1].into_iter().collect(),
            sample_size: 50,
        };
        assert_eq!(nelson.display_string(), "latency violates one or more of [Rule1, Rule2]");
        assert!(nelson.validate().is_ok());

        nelson.sample_size = 0;
        assert!(matches!(nelson.validate(), Err(ValidationError::NonPositive { .. })));

        nelson.active_rules.clear();
        assert_eq!(nelson.validate(), Err(ValidationError::missing("activeRules")));
    }

    #[test]
    fn test_required_fields() {
        let external = ExternalData {
            alerter_id: " ".to_string(),
            data_id: "d".to_string(),
            expression: "x > 1".to_string(),
        };
        assert_eq!(external.validate(), Err(ValidationError::missing("alerterId")));

        let compare = CompareData::new("a", CompareOperator::Lt, 1.0, "");
        assert_eq!(compare.validate(), Err(ValidationError::missing("data2Id")));

        let threshold = ThresholdData::new("", CompareOperator::Lt, 1.0);
        assert_eq!(threshold.validate(), Err(ValidationError::missing("dataId")));
    }
}
