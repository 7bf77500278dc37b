//! Classifier entry point: training-set storage and the query pipeline.

use tracing::{debug, warn};

use crate::config::KnnConfig;
use crate::distance::distance;
use crate::error::KnnError;
use crate::scale::ScalingParams;
use crate::select::{Neighbor, select_nearest};
use crate::value::{Instance, Value};
use crate::vote::{class_distribution, select_winner, tally_votes};

/// An exhaustive k-nearest-neighbor classifier.
///
/// Training stores the instances verbatim; all work happens at query time
/// with a linear scan over the training set. Queries take `&self` and share
/// no mutable state, so a trained classifier can be queried concurrently.
///
/// # Example
///
/// ```
/// use mixed_knn::{KnnClassifier, KnnConfig, Metric, Value};
///
/// let training = vec![
///     vec![Value::numeric(1.0), Value::nominal("yes")],
///     vec![Value::numeric(1.2), Value::nominal("yes")],
///     vec![Value::numeric(8.0), Value::nominal("no")],
/// ];
///
/// let config = KnnConfig::new(2).with_class_index(1);
/// let mut classifier = KnnClassifier::new(config);
/// classifier.train(training)?;
///
/// let query = vec![Value::numeric(1.1), Value::nominal("?")];
/// assert_eq!(classifier.classify(&query)?, Value::nominal("yes"));
/// # Ok::<(), mixed_knn::KnnError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    /// Query configuration.
    config: KnnConfig,
    /// Training instances, present once [`train`](Self::train) succeeded.
    training: Option<Vec<Instance>>,
}

impl KnnClassifier {
    /// Creates an untrained classifier with the given configuration.
    pub fn new(config: KnnConfig) -> Self {
        Self {
            config,
            training: None,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    /// Returns true once training data has been stored.
    pub fn is_trained(&self) -> bool {
        self.training.is_some()
    }

    /// Stores the training set after validating its schema.
    ///
    /// Every instance must have the same length as the first one, the
    /// configured class index must lie within that length, and every
    /// attribute position must hold the same value kind as in the first
    /// instance. The set is held immutably for the classifier's lifetime.
    ///
    /// # Errors
    ///
    /// [`KnnError::EmptyTrainingSet`], [`KnnError::ClassIndexOutOfBounds`],
    /// [`KnnError::RaggedTrainingSet`], or [`KnnError::AttributeKindMismatch`].
    pub fn train(&mut self, instances: Vec<Instance>) -> Result<(), KnnError> {
        let first = instances.first().ok_or(KnnError::EmptyTrainingSet)?;
        let n_attrs = first.len();

        if self.config.class_index() >= n_attrs {
            return Err(KnnError::ClassIndexOutOfBounds {
                index: self.config.class_index(),
                n_attrs,
            });
        }

        for (index, instance) in instances.iter().enumerate() {
            if instance.len() != n_attrs {
                return Err(KnnError::RaggedTrainingSet {
                    index,
                    len: instance.len(),
                    expected: n_attrs,
                });
            }
            for (attribute, (value, reference)) in instance.iter().zip(first.iter()).enumerate() {
                if !value.same_kind(reference) {
                    return Err(KnnError::AttributeKindMismatch { index, attribute });
                }
            }
        }

        debug!(n_instances = instances.len(), n_attrs, "training set stored");
        self.training = Some(instances);
        Ok(())
    }

    /// Returns the k nearest training instances to `query`, closest first.
    ///
    /// Scaling vectors are refitted from the training set on every call;
    /// they are a pure function of the stored data, so the refit is
    /// idempotent and keeps queries free of shared mutable state. The query
    /// and all training instances are normalized with the same vectors
    /// before any distance is measured.
    ///
    /// Ties with the k-th nearest instance widen the result (see
    /// [`select`](crate::select)), so the returned set can be larger than k.
    /// A `k` of zero is clamped to 1 with a warning; `k` larger than the
    /// training set is clipped to its size.
    ///
    /// # Errors
    ///
    /// [`KnnError::NotTrained`] before [`train`](Self::train), or
    /// [`KnnError::SchemaMismatch`] if the query length differs from the
    /// training attribute count.
    pub fn nearest(&self, query: &Instance) -> Result<Vec<Neighbor>, KnnError> {
        let training = self.training.as_ref().ok_or(KnnError::NotTrained)?;
        let n_attrs = training[0].len();
        if query.len() != n_attrs {
            return Err(KnnError::SchemaMismatch {
                expected: n_attrs,
                got: query.len(),
            });
        }

        let params = ScalingParams::fit(training, self.config.normalize());
        let query = params.apply(query);
        let normalized: Vec<Instance> = training.iter().map(|t| params.apply(t)).collect();

        let distances: Vec<f64> = normalized
            .iter()
            .map(|t| {
                distance(
                    self.config.metric(),
                    &query,
                    t,
                    self.config.class_index(),
                )
            })
            .collect();

        let mut k = self.config.k();
        if k == 0 {
            warn!("k must be >= 1, clamping to 1");
            k = 1;
        }
        let k_eff = k.min(training.len());

        Ok(select_nearest(&distances, k_eff))
    }

    /// Predicts the class label of `query`.
    ///
    /// Runs the full pipeline: normalization, nearest-neighbor search, vote
    /// aggregation, and winner selection. The value stored at the query's
    /// class slot is ignored.
    ///
    /// # Errors
    ///
    /// Same conditions as [`nearest`](Self::nearest).
    #[tracing::instrument(skip_all)]
    pub fn classify(&self, query: &Instance) -> Result<Value, KnnError> {
        let neighbors = self.nearest(query)?;
        // `nearest` succeeded, so the training set is present.
        let training = self.training.as_ref().ok_or(KnnError::NotTrained)?;

        let tally = tally_votes(
            &neighbors,
            training,
            self.config.class_index(),
            self.config.voting(),
        );
        let distribution = class_distribution(training, self.config.class_index());
        let label = select_winner(&tally, &distribution);

        debug!(n_neighbors = neighbors.len(), label = %label, "classified");
        Ok(label)
    }

    /// Occurrence count of every class label across the training set, in
    /// first-seen order.
    ///
    /// This is the mapping that breaks exact vote ties during winner
    /// selection.
    ///
    /// # Errors
    ///
    /// [`KnnError::NotTrained`] before [`train`](Self::train).
    pub fn class_distribution(&self) -> Result<Vec<(Value, usize)>, KnnError> {
        let training = self.training.as_ref().ok_or(KnnError::NotTrained)?;
        Ok(class_distribution(training, self.config.class_index()))
    }
}
