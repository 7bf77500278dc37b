//! k-nearest selection with tie-widening.

use std::cmp::Ordering;

/// One selected training instance: its position in the training set and its
/// distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index into the training set.
    pub index: usize,
    /// Distance to the query under the configured metric.
    pub distance: f64,
}

/// Selects the `k_eff` nearest candidates from per-candidate distances.
///
/// `distances[i]` is the distance of training instance `i` to the query.
/// Candidates are sorted ascending by distance with a stable sort, so ties
/// keep their input order and results are deterministic.
///
/// After taking the first `k_eff`, the selection is widened: while the next
/// candidate's distance equals the last included one's, it is included too.
/// This never cuts inside a group of tied candidates. The one exception is
/// `k_eff == 1`, which returns exactly the single nearest candidate even if
/// others tie with it.
///
/// # Panics
///
/// Debug-asserts that `k_eff >= 1` and `k_eff <= distances.len()`.
pub(crate) fn select_nearest(distances: &[f64], k_eff: usize) -> Vec<Neighbor> {
    debug_assert!(k_eff >= 1);
    debug_assert!(k_eff <= distances.len());

    let mut candidates: Vec<Neighbor> = distances
        .iter()
        .copied()
        .enumerate()
        .map(|(index, distance)| Neighbor { index, distance })
        .collect();

    // Stable sort — NaN-safe via Ordering::Equal fallback.
    candidates.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));

    if k_eff == 1 {
        candidates.truncate(1);
        return candidates;
    }

    let mut to = k_eff;
    while to < candidates.len() && candidates[to].distance == candidates[to - 1].distance {
        to += 1;
    }
    candidates.truncate(to);
    candidates
}
