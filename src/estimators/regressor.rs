use crate::estimators::{EstimatorError, Predictions};

/// Learner mapping categorical observations to numeric estimates.
///
/// Missing entries are `None` on both the training and the prediction side.
pub trait Regressor {
    type Key;

    /// Learns from `x` paired element-wise with `y`, replacing any previous fit.
    fn fit(&mut self, x: &[Option<Self::Key>], y: &[Option<f64>]) -> Result<(), EstimatorError>;

    fn predict(&self, x: &[Option<Self::Key>]) -> Result<Predictions, EstimatorError>;
}
