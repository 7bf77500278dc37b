//! Error types for the mixed-knn crate.

/// Error type for all fallible operations in the mixed-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when a query is issued before any training data was supplied.
    #[error("classifier has not been trained")]
    NotTrained,

    /// Returned when the training set is empty.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Returned when a query instance's length does not match the training
    /// attribute count.
    #[error("query has {got} attributes, expected {expected}")]
    SchemaMismatch {
        /// Attribute count of the training set.
        expected: usize,
        /// Attribute count of the query instance.
        got: usize,
    },

    /// Returned when a training instance's length differs from the first
    /// instance's.
    #[error("training instance {index} has {len} attributes, expected {expected}")]
    RaggedTrainingSet {
        /// Position of the offending instance in the training set.
        index: usize,
        /// Length of the offending instance.
        len: usize,
        /// Attribute count of the first instance.
        expected: usize,
    },

    /// Returned when the configured class index lies outside the attribute
    /// range.
    #[error("class index {index} is out of bounds for {n_attrs} attributes")]
    ClassIndexOutOfBounds {
        /// The configured class index.
        index: usize,
        /// Attribute count of the training set.
        n_attrs: usize,
    },

    /// Returned when a training instance's value kind disagrees with the
    /// first instance at the same position.
    #[error("training instance {index} attribute {attribute} does not match the kind of the first instance")]
    AttributeKindMismatch {
        /// Position of the offending instance in the training set.
        index: usize,
        /// Attribute position with the conflicting kind.
        attribute: usize,
    },
}
