use crate::estimators::{
    EstimateKind, EstimatorError, GroupEstimatorParams, InputError, Predictions, Regressor,
};
use log::{debug, info};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Predicts a numeric target from a single categorical key.
///
/// `fit` learns the mean or median of `y` for every distinct key of `x`;
/// `predict` looks each key up and yields `None` for keys never seen during
/// fit and for groups whose estimate is undefined (`NaN`). Refitting replaces all previously learned groups.
#[derive(Debug, Clone)]
pub struct GroupEstimator<K> {
    estimate: EstimateKind,
    group_estimates: Option<HashMap<K, f64>>,
}

impl<K> GroupEstimator<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(estimate: EstimateKind) -> Self {
        Self {
            estimate,
            group_estimates: None,
        }
    }

    /// Builds an estimator from `"mean"` or `"median"`.
    pub fn from_name(estimate: &str) -> Result<Self, EstimatorError> {
        EstimateKind::from_name(estimate).map(Self::new)
    }

    pub fn from_params(params: GroupEstimatorParams) -> Self {
        Self::new(params.estimate)
    }

    #[inline]
    pub fn estimate_kind(&self) -> EstimateKind {
        self.estimate
    }

    #[inline]
    pub fn is_fitted(&self) -> bool {
        self.group_estimates.is_some()
    }

    pub fn group_estimates(&self) -> Option<&HashMap<K, f64>> {
        self.group_estimates.as_ref()
    }

    pub fn num_groups(&self) -> usize {
        self.group_estimates.as_ref().map_or(0, HashMap::len)
    }

    /// Learned estimate for one key, `None` if unfit or the key was not seen.
    pub fn estimate_for<Q>(&self, key: &Q) -> Option<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.group_estimates.as_ref()?.get(key).copied()
    }

    /// Same as [`Regressor::fit`] for data with no missing keys.
    ///
    /// `NaN` in `y` is still rejected as a missing value.
    pub fn fit_complete(&mut self, x: &[K], y: &[f64]) -> Result<(), EstimatorError> {
        self.fit_pairs(x.iter().map(Some), y.iter().map(|&v| Some(v)))
    }

    /// Same as [`Regressor::predict`] over borrowed keys, e.g. `&str` lookups
    /// against `String` groups.
    pub fn predict_keys<'a, Q, I>(&self, x: I) -> Result<Predictions, EstimatorError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        self.lookup(x.into_iter().map(Some))
    }

    fn fit_pairs<'a>(
        &mut self,
        x: impl ExactSizeIterator<Item = Option<&'a K>>,
        y: impl ExactSizeIterator<Item = Option<f64>>,
    ) -> Result<(), EstimatorError>
    where
        K: 'a,
    {
        let pairs = validated_pairs(x, y)?;
        let observations = pairs.len();
        let estimates = self.estimate.summarize(pairs);
        debug!(
            "Fit group estimator: estimate={}, observations={}, groups={}",
            self.estimate,
            observations,
            estimates.len()
        );
        self.group_estimates = Some(estimates);
        Ok(())
    }

    fn lookup<'a, Q>(
        &self,
        keys: impl Iterator<Item = Option<&'a Q>>,
    ) -> Result<Predictions, EstimatorError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let estimates = self
            .group_estimates
            .as_ref()
            .ok_or(EstimatorError::NotFitted)?;

        let predictions: Predictions = keys
            .map(|key| {
                key.and_then(|k| estimates.get(k).copied())
                    .filter(|v| !v.is_nan())
            })
            .collect();

        let missing = predictions.missing_groups();
        if missing > 0 {
            info!("{missing} observation(s) correspond to missing groups in the training data.");
        }
        Ok(predictions)
    }
}

impl<K> Regressor for GroupEstimator<K>
where
    K: Eq + Hash + Clone,
{
    type Key = K;

    fn fit(&mut self, x: &[Option<K>], y: &[Option<f64>]) -> Result<(), EstimatorError> {
        self.fit_pairs(x.iter().map(Option::as_ref), y.iter().copied())
    }

    fn predict(&self, x: &[Option<K>]) -> Result<Predictions, EstimatorError> {
        self.lookup(x.iter().map(Option::as_ref))
    }
}

/// Checks a training pair without touching any fitted state.
///
/// Lengths are compared first, then the first missing key or value is reported.
fn validated_pairs<'a, K: 'a>(
    x: impl ExactSizeIterator<Item = Option<&'a K>>,
    y: impl ExactSizeIterator<Item = Option<f64>>,
) -> Result<Vec<(&'a K, f64)>, InputError> {
    let (x_len, y_len) = (x.len(), y.len());
    if x_len != y_len {
        return Err(InputError::LengthMismatch { x_len, y_len });
    }

    x.zip(y)
        .enumerate()
        .map(|(index, (key, value))| -> Result<_, InputError> {
            let key = key.ok_or(InputError::MissingKey { index })?;
            let value = value
                .filter(|v| !v.is_nan())
                .ok_or(InputError::MissingValue { index })?;
            Ok((key, value))
        })
        .collect()
}
