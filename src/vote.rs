//! Vote aggregation and winner selection.

use crate::config::Voting;
use crate::select::Neighbor;
use crate::value::{Instance, Value};

/// Accumulates `weight` onto `label`'s tally entry, inserting it on first
/// sight. Entries keep first-seen order, which makes the winner scan
/// deterministic.
fn add_weight(tally: &mut Vec<(Value, f64)>, label: &Value, weight: f64) {
    match tally.iter_mut().find(|(l, _)| l == label) {
        Some((_, w)) => *w += weight,
        None => tally.push((label.clone(), weight)),
    }
}

/// Builds the vote tally for a neighbor set.
///
/// Majority voting adds 1.0 per neighbor. Inverse-distance voting adds
/// `1 / distance` per neighbor, with one defined boundary case: if any
/// neighbor sits at distance exactly 0.0 its contribution would be infinite,
/// so the tally is restricted to the zero-distance neighbors, counted with
/// weight 1.0 each. An exact match therefore wins outright, and no division
/// by zero occurs.
pub(crate) fn tally_votes(
    neighbors: &[Neighbor],
    training: &[Instance],
    class_index: usize,
    voting: Voting,
) -> Vec<(Value, f64)> {
    let mut tally = Vec::new();
    match voting {
        Voting::Majority => {
            for neighbor in neighbors {
                add_weight(&mut tally, &training[neighbor.index][class_index], 1.0);
            }
        }
        Voting::InverseDistance => {
            if neighbors.iter().any(|n| n.distance == 0.0) {
                for neighbor in neighbors.iter().filter(|n| n.distance == 0.0) {
                    add_weight(&mut tally, &training[neighbor.index][class_index], 1.0);
                }
            } else {
                for neighbor in neighbors {
                    add_weight(
                        &mut tally,
                        &training[neighbor.index][class_index],
                        neighbor.distance.recip(),
                    );
                }
            }
        }
    }
    tally
}

/// Counts how often each class label occurs across the whole training set.
///
/// Entries keep first-seen order.
pub(crate) fn class_distribution(training: &[Instance], class_index: usize) -> Vec<(Value, usize)> {
    let mut distribution: Vec<(Value, usize)> = Vec::new();
    for instance in training {
        let label = &instance[class_index];
        match distribution.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => distribution.push((label.clone(), 1)),
        }
    }
    distribution
}

/// Picks the winning class label from a vote tally.
///
/// Scans for the maximum accumulated weight. An exact weight tie is broken
/// in favor of the class with the higher occurrence count in the full
/// training set; if that also ties, the earlier tally entry wins.
///
/// # Panics
///
/// Debug-asserts that the tally is non-empty.
pub(crate) fn select_winner(tally: &[(Value, f64)], distribution: &[(Value, usize)]) -> Value {
    debug_assert!(!tally.is_empty());

    let frequency = |label: &Value| {
        distribution
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, count)| *count)
    };

    let mut winner = &tally[0];
    for entry in &tally[1..] {
        if entry.1 > winner.1 || (entry.1 == winner.1 && frequency(&entry.0) > frequency(&winner.0))
        {
            winner = entry;
        }
    }
    winner.0.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Training set with only a class column, so labels can be addressed by
    /// neighbor index directly.
    fn labels(names: &[&str]) -> Vec<Instance> {
        names.iter().map(|n| vec![Value::nominal(*n)]).collect()
    }

    fn neighbor(index: usize, distance: f64) -> Neighbor {
        Neighbor { index, distance }
    }

    #[test]
    fn test_majority_counts() {
        let training = labels(&["a", "b", "a", "a", "b"]);
        let neighbors: Vec<Neighbor> = (0..5).map(|i| neighbor(i, 1.0 + i as f64)).collect();
        let tally = tally_votes(&neighbors, &training, 0, Voting::Majority);

        assert_eq!(tally.len(), 2);
        assert_eq!(tally[0].0, Value::nominal("a"));
        assert_abs_diff_eq!(tally[0].1, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tally[1].1, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_distance_accumulates_reciprocals() {
        let training = labels(&["a", "a", "b"]);
        let neighbors = vec![neighbor(0, 0.5), neighbor(1, 2.0), neighbor(2, 4.0)];
        let tally = tally_votes(&neighbors, &training, 0, Voting::InverseDistance);

        // a: 1/0.5 + 1/2 = 2.5, b: 1/4 = 0.25
        assert_abs_diff_eq!(tally[0].1, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(tally[1].1, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_distance_wins_outright() {
        // The zero-distance neighbor's class takes the whole tally even
        // though the far neighbors would otherwise accumulate huge weight.
        let training = labels(&["a", "b", "b", "b"]);
        let neighbors = vec![
            neighbor(0, 0.0),
            neighbor(1, 0.01),
            neighbor(2, 0.01),
            neighbor(3, 0.01),
        ];
        let tally = tally_votes(&neighbors, &training, 0, Voting::InverseDistance);

        assert_eq!(tally.len(), 1);
        assert_eq!(tally[0].0, Value::nominal("a"));
        assert_abs_diff_eq!(tally[0].1, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multiple_zero_distance_neighbors_counted() {
        let training = labels(&["a", "b", "b"]);
        let neighbors = vec![neighbor(0, 0.0), neighbor(1, 0.0), neighbor(2, 0.0)];
        let tally = tally_votes(&neighbors, &training, 0, Voting::InverseDistance);

        assert_eq!(tally.len(), 2);
        let distribution = class_distribution(&training, 0);
        assert_eq!(select_winner(&tally, &distribution), Value::nominal("b"));
    }

    #[test]
    fn test_class_distribution() {
        let training = labels(&["a", "b", "a", "c", "a", "b"]);
        let distribution = class_distribution(&training, 0);
        assert_eq!(
            distribution,
            vec![
                (Value::nominal("a"), 3),
                (Value::nominal("b"), 2),
                (Value::nominal("c"), 1),
            ]
        );
    }

    #[test]
    fn test_winner_by_weight() {
        let tally = vec![(Value::nominal("a"), 1.0), (Value::nominal("b"), 2.0)];
        assert_eq!(select_winner(&tally, &[]), Value::nominal("b"));
    }

    #[test]
    fn test_weight_tie_broken_by_frequency() {
        let tally = vec![(Value::nominal("a"), 2.0), (Value::nominal("b"), 2.0)];
        let distribution = vec![(Value::nominal("a"), 3), (Value::nominal("b"), 9)];
        assert_eq!(select_winner(&tally, &distribution), Value::nominal("b"));
    }

    #[test]
    fn test_full_tie_keeps_first_seen() {
        // Equal weight and equal frequency: the earlier tally entry wins,
        // which is deterministic because the tally keeps first-seen order.
        let tally = vec![(Value::nominal("a"), 2.0), (Value::nominal("b"), 2.0)];
        let distribution = vec![(Value::nominal("a"), 4), (Value::nominal("b"), 4)];
        assert_eq!(select_winner(&tally, &distribution), Value::nominal("a"));
    }

    #[test]
    fn test_numeric_class_labels() {
        let training = vec![
            vec![Value::numeric(0.0)],
            vec![Value::numeric(1.0)],
            vec![Value::numeric(0.0)],
        ];
        let neighbors: Vec<Neighbor> = (0..3).map(|i| neighbor(i, 1.0)).collect();
        let tally = tally_votes(&neighbors, &training, 0, Voting::Majority);
        let distribution = class_distribution(&training, 0);
        assert_eq!(select_winner(&tally, &distribution), Value::numeric(0.0));
    }
}
