//! Exhaustive k-nearest-neighbor classification over mixed tabular data.
//!
//! This crate classifies tabular instances whose attributes may be nominal
//! (textual) or numeric, using an exhaustive linear scan over the training
//! set. Two distance metrics and two vote aggregation schemes are supported:
//!
//! | Metric | Numeric attribute | Nominal attribute |
//! |--------|-------------------|-------------------|
//! | Manhattan | `\|a - b\|` | 0 if equal, else 1 |
//! | Euclidean | `(a - b)²`, final `sqrt` | 0 if equal, else 1 (1² = 1) |
//!
//! | Voting | Contribution per neighbor |
//! |--------|---------------------------|
//! | Majority | 1.0 |
//! | InverseDistance | `1 / d` (exact matches win outright) |
//!
//! Numeric attributes can be min-max normalized into a common range using
//! statistics from the training set. Neighbor selection widens across
//! distance ties with the k-th neighbor, and exact vote ties are broken in
//! favor of the class that is more frequent in the training set.
//!
//! # Quick start
//!
//! ```
//! use mixed_knn::{KnnClassifier, KnnConfig, Metric, Value};
//!
//! // Class label at index 2.
//! let training = vec![
//!     vec![Value::numeric(1.0), Value::nominal("sunny"), Value::nominal("yes")],
//!     vec![Value::numeric(1.2), Value::nominal("sunny"), Value::nominal("yes")],
//!     vec![Value::numeric(5.0), Value::nominal("rain"), Value::nominal("no")],
//!     vec![Value::numeric(5.5), Value::nominal("rain"), Value::nominal("no")],
//! ];
//!
//! let config = KnnConfig::new(3)
//!     .with_metric(Metric::Manhattan)
//!     .with_class_index(2);
//! let mut classifier = KnnClassifier::new(config);
//! classifier.train(training)?;
//!
//! let query = vec![Value::numeric(1.1), Value::nominal("sunny"), Value::nominal("?")];
//! assert_eq!(classifier.classify(&query)?, Value::nominal("yes"));
//! # Ok::<(), mixed_knn::KnnError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify()
//!   ├─ ScalingParams::fit() / apply()   (scale.rs)
//!   ├─ distance()                       (distance.rs)
//!   ├─ select_nearest()                 (select.rs)
//!   └─ tally_votes() / select_winner()  (vote.rs)
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod scale;
pub mod select;
pub mod value;

pub(crate) mod distance;
pub(crate) mod vote;

pub use classifier::KnnClassifier;
pub use config::{KnnConfig, Metric, Voting};
pub use error::KnnError;
pub use scale::ScalingParams;
pub use select::Neighbor;
pub use value::{Instance, Value};
