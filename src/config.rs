//! Configuration for classification queries.

/// Distance metric used to compare two instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    /// Sum of absolute differences (nominal mismatch counts 1).
    Manhattan,
    /// Square root of the sum of squared differences (nominal mismatch
    /// counts 1 before squaring).
    #[default]
    Euclidean,
}

/// Vote aggregation scheme for the selected neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Voting {
    /// Every neighbor contributes 1.0 to its class.
    #[default]
    Majority,
    /// Every neighbor contributes `1 / distance` to its class. Neighbors at
    /// distance zero win outright (see [`crate::KnnClassifier::classify`]).
    InverseDistance,
}

/// Configuration for a classification query.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use mixed_knn::{KnnConfig, Metric, Voting};
///
/// let config = KnnConfig::new(5)
///     .with_metric(Metric::Manhattan)
///     .with_voting(Voting::InverseDistance)
///     .with_normalize(true)
///     .with_class_index(3);
///
/// assert_eq!(config.k(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct KnnConfig {
    /// Number of nearest neighbors to consider.
    k: usize,
    /// Distance metric.
    metric: Metric,
    /// Vote aggregation scheme.
    voting: Voting,
    /// Whether to min-max rescale numeric attributes before measuring
    /// distance.
    normalize: bool,
    /// Position of the class attribute within each instance.
    class_index: usize,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `metric = Euclidean`, `voting = Majority`,
    /// `normalize = false`, `class_index = 0`.
    ///
    /// A `k` of zero is not rejected here; queries clamp it to 1 and emit a
    /// warning instead.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: Metric::Euclidean,
            voting: Voting::Majority,
            normalize: false,
            class_index: 0,
        }
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the vote aggregation scheme.
    pub fn with_voting(mut self, voting: Voting) -> Self {
        self.voting = voting;
        self
    }

    /// Enables or disables min-max normalization of numeric attributes.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Sets the position of the class attribute.
    ///
    /// Validated against the attribute count when training data is supplied.
    pub fn with_class_index(mut self, class_index: usize) -> Self {
        self.class_index = class_index;
        self
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the distance metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the vote aggregation scheme.
    pub fn voting(&self) -> Voting {
        self.voting
    }

    /// Returns whether numeric attributes are normalized.
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Returns the position of the class attribute.
    pub fn class_index(&self) -> usize {
        self.class_index
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
