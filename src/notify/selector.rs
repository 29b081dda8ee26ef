//! Selection of the representative event evaluation.

use crate::eval::{EvalSet, EventConditionEval};

/// Returns the first event evaluation across `eval_sets`.
///
/// Sets are scanned in order and records within a set in collection order;
/// scanning stops at the first hit. When a set holds more than one event
/// evaluation the winner depends on that collection order, so producers should
/// put at most one event evaluation in each set.
///
/// `None` is not an error: the fields sourced from the evaluation are simply
/// left out of the notification.
#[must_use]
pub fn first_event_eval(eval_sets: &[EvalSet]) -> Option<&EventConditionEval> {
    eval_sets
        .iter()
        .flat_map(|set| set.iter())
        .find_map(|eval| eval.as_event())
}
