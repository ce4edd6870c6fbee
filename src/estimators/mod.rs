mod error;
mod estimate_kind;
mod group_estimator;
mod params;
mod predictions;
mod regressor;

pub use error::{EstimatorError, InputError};
pub use estimate_kind::EstimateKind;
pub use group_estimator::GroupEstimator;
pub use params::GroupEstimatorParams;
pub use predictions::Predictions;
pub use regressor::Regressor;
