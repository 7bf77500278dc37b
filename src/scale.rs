//! Min-max scaling and translation vectors.

use crate::value::{Instance, Value};

/// Per-attribute scaling and translation vectors derived from a training set.
///
/// Numeric attributes are rescaled as `(v - translation) / scaling`, i.e.
/// min-max normalization into `[0, 1]` when fitted with normalization
/// enabled. Nominal positions always carry the identity transform
/// (`scaling = 1.0`, `translation = 0.0`); nominal values are never touched.
///
/// The class attribute slot is included in both vectors so they stay aligned
/// with the instance layout, but it is never consulted for distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingParams {
    /// Per-attribute scale factor (`max - min` for normalized numeric
    /// positions, 1.0 otherwise).
    scaling: Vec<f64>,
    /// Per-attribute offset (`min` for normalized numeric positions, 0.0
    /// otherwise).
    translation: Vec<f64>,
}

impl ScalingParams {
    /// Identity transform for `n_attrs` attributes.
    pub fn identity(n_attrs: usize) -> Self {
        Self {
            scaling: vec![1.0; n_attrs],
            translation: vec![0.0; n_attrs],
        }
    }

    /// Fits scaling and translation vectors from a training set.
    ///
    /// Pure function of its inputs: fitting twice on the same data yields
    /// identical vectors. With `normalize = false` this is the identity
    /// transform. With `normalize = true`, numeric positions get
    /// `scaling = max - min` and `translation = min` over the training set;
    /// an attribute whose values are all equal gets `scaling = 0.0`, which
    /// [`apply`](Self::apply) treats as pass-through.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `training` is non-empty.
    pub fn fit(training: &[Instance], normalize: bool) -> Self {
        debug_assert!(!training.is_empty());

        let n_attrs = training[0].len();
        if !normalize {
            return Self::identity(n_attrs);
        }

        let mut params = Self::identity(n_attrs);
        for (i, first) in training[0].iter().enumerate() {
            // Attribute kind comes from the first instance; nominal slots
            // keep the identity transform.
            let Some(seed) = first.as_numeric() else {
                continue;
            };
            let mut min = seed;
            let mut max = seed;
            for instance in training {
                if let Some(v) = instance[i].as_numeric() {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
            params.scaling[i] = max - min;
            params.translation[i] = min;
        }
        params
    }

    /// Applies the transform to one instance, returning the rescaled copy.
    ///
    /// Nominal values pass through unchanged. A numeric position with
    /// `scaling = 0.0` (zero range across the training data) also passes
    /// through unchanged, so no division by zero can occur.
    pub fn apply(&self, instance: &Instance) -> Instance {
        debug_assert_eq!(instance.len(), self.scaling.len());

        instance
            .iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::Nominal(_) => value.clone(),
                Value::Numeric(v) => {
                    if self.scaling[i] == 0.0 {
                        Value::Numeric(*v)
                    } else {
                        Value::Numeric((v - self.translation[i]) / self.scaling[i])
                    }
                }
            })
            .collect()
    }

    /// Returns the per-attribute scale factors.
    pub fn scaling(&self) -> &[f64] {
        &self.scaling
    }

    /// Returns the per-attribute offsets.
    pub fn translation(&self) -> &[f64] {
        &self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn numeric_row(values: &[f64]) -> Instance {
        values.iter().map(|&v| Value::numeric(v)).collect()
    }

    #[test]
    fn test_disabled_is_identity() {
        let training = vec![numeric_row(&[1.0, 10.0]), numeric_row(&[3.0, 30.0])];
        let params = ScalingParams::fit(&training, false);
        assert_eq!(params.scaling(), &[1.0, 1.0]);
        assert_eq!(params.translation(), &[0.0, 0.0]);

        // Identity apply leaves values untouched.
        let out = params.apply(&numeric_row(&[7.0, 70.0]));
        assert_eq!(out, numeric_row(&[7.0, 70.0]));
    }

    #[test]
    fn test_fit_min_max() {
        let training = vec![
            numeric_row(&[2.0, 100.0]),
            numeric_row(&[4.0, 300.0]),
            numeric_row(&[8.0, 200.0]),
        ];
        let params = ScalingParams::fit(&training, true);
        assert_abs_diff_eq!(params.scaling()[0], 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(params.translation()[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(params.scaling()[1], 200.0, epsilon = 1e-12);
        assert_abs_diff_eq!(params.translation()[1], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_rescales_into_unit_range() {
        let training = vec![numeric_row(&[2.0]), numeric_row(&[4.0]), numeric_row(&[8.0])];
        let params = ScalingParams::fit(&training, true);

        let lo = params.apply(&numeric_row(&[2.0]));
        let hi = params.apply(&numeric_row(&[8.0]));
        let mid = params.apply(&numeric_row(&[5.0]));
        assert_abs_diff_eq!(lo[0].as_numeric().unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hi[0].as_numeric().unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[0].as_numeric().unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_range_passes_through() {
        // All training values identical: scaling = 0.0, apply leaves the
        // raw value, and nothing non-finite is produced.
        let training = vec![numeric_row(&[7.0]), numeric_row(&[7.0]), numeric_row(&[7.0])];
        let params = ScalingParams::fit(&training, true);
        assert_abs_diff_eq!(params.scaling()[0], 0.0, epsilon = 1e-12);

        let out = params.apply(&numeric_row(&[9.0]));
        let v = out[0].as_numeric().unwrap();
        assert!(v.is_finite());
        assert_abs_diff_eq!(v, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nominal_slots_keep_identity() {
        let training = vec![
            vec![Value::nominal("sunny"), Value::numeric(10.0)],
            vec![Value::nominal("rain"), Value::numeric(30.0)],
        ];
        let params = ScalingParams::fit(&training, true);
        assert_abs_diff_eq!(params.scaling()[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(params.translation()[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(params.scaling()[1], 20.0, epsilon = 1e-12);

        let instance = vec![Value::nominal("overcast"), Value::numeric(20.0)];
        let out = params.apply(&instance);
        assert_eq!(out[0], Value::nominal("overcast"));
        assert_abs_diff_eq!(out[1].as_numeric().unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_is_idempotent() {
        let training = vec![numeric_row(&[1.0, 5.0]), numeric_row(&[3.0, 9.0])];
        let a = ScalingParams::fit(&training, true);
        let b = ScalingParams::fit(&training, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_vectors_cover_every_slot() {
        // The class slot participates in the vectors like any other
        // position, keeping them aligned with the instance layout.
        let training = vec![
            vec![Value::numeric(1.0), Value::nominal("yes")],
            vec![Value::numeric(2.0), Value::nominal("no")],
        ];
        let params = ScalingParams::fit(&training, true);
        assert_eq!(params.scaling().len(), 2);
        assert_eq!(params.translation().len(), 2);
    }
}
