//! Mixed-type Manhattan and Euclidean distance computation.

use crate::config::Metric;
use crate::value::{Instance, Value};

/// Per-attribute difference: 0/1 equality for nominal values, absolute
/// difference for numeric values.
fn value_diff(a: &Value, b: &Value) -> f64 {
    match (a, b) {
        (Value::Nominal(x), Value::Nominal(y)) => {
            if x == y {
                0.0
            } else {
                1.0
            }
        }
        (Value::Numeric(x), Value::Numeric(y)) => (x - y).abs(),
        // Mixed kinds cannot survive training validation; a stray pair
        // counts as a full mismatch.
        _ => 1.0,
    }
}

/// Computes the distance between two instances under the given metric.
///
/// The class attribute slot is skipped: it carries no geometric meaning.
/// Both instances must already be normalized consistently; this function
/// never rescales.
///
/// # Panics
///
/// Debug-asserts that both instances have the same length.
pub(crate) fn distance(metric: Metric, a: &Instance, b: &Instance, class_index: usize) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let diffs = a
        .iter()
        .zip(b.iter())
        .enumerate()
        .filter(|(i, _)| *i != class_index)
        .map(|(_, (x, y))| value_diff(x, y));

    match metric {
        Metric::Manhattan => diffs.sum(),
        Metric::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
    }
}
